use eframe::egui::{self, Align2, Color32, FontId, RichText, ScrollArea, Sense, Ui, Vec2};

use crate::config::GalleryConfig;
use crate::state::{GalleryState, PhotoCard};

// ---------------------------------------------------------------------------
// Photo grid (central panel)
// ---------------------------------------------------------------------------

/// Render the photo cards, `config.columns` per row.
///
/// A click toggles the card's enlarged flag; the drawn size eases towards
/// the new target scale over `config.animation_secs`.
pub fn photo_grid(ui: &mut Ui, state: &mut GalleryState, config: &GalleryConfig) {
    if state.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No photos to show.");
        });
        return;
    }

    let columns = config.columns.max(1);
    let spacing = ui.spacing().item_spacing.x;
    let cell_width = ((ui.available_width() - spacing * (columns as f32 - 1.0))
        / columns as f32)
        .max(64.0);

    let mut clicked = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("photo_grid")
                .num_columns(columns)
                .spacing([spacing, spacing])
                .show(ui, |ui: &mut Ui| {
                    for (index, card) in state.cards.iter().enumerate() {
                        let target = state.target_scale(index, config.enlarged_scale);
                        let scale = ui.ctx().animate_value_with_time(
                            egui::Id::new(("photo_scale", index)),
                            target,
                            config.animation_secs,
                        );
                        // Frame padding comes out of the cell width.
                        let base = Vec2::new(cell_width - 12.0, config.tile_height);
                        let tint = state.placeholders.color_for(index);

                        if photo_card(ui, card, base * scale, tint).clicked() {
                            clicked = Some(index);
                        }
                        if (index + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    if let Some(index) = clicked {
        log::debug!("Toggled photo {index}");
        state.toggle_enlarged(index);
    }
}

/// One card: image (or placeholder) above its caption.
fn photo_card(ui: &mut Ui, card: &PhotoCard, size: Vec2, tint: Color32) -> egui::Response {
    let frame = egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            match &card.image {
                Some(asset) => {
                    ui.add(
                        egui::Image::from_bytes(asset.uri.clone(), asset.bytes.clone())
                            .fit_to_exact_size(size)
                            .maintain_aspect_ratio(true),
                    );
                }
                None => placeholder(ui, card.record.file(), size, tint),
            }
            ui.label(RichText::new(card.record.title()).strong());
        });
    });

    frame
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Tinted box with the missing file name, sized like the image would be.
fn placeholder(ui: &mut Ui, file: &str, size: Vec2, tint: Color32) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, tint);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        format!("Image not found: {file}"),
        FontId::proportional(13.0),
        Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PhotoRecord;
    use crate::resources::BundledImages;
    use crate::ui::testing::painted_texts;
    use egui::{pos2, vec2, Event, FullOutput, Modifiers, PointerButton, Pos2, RawInput, Rect};

    fn input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    fn run_frame(
        ctx: &egui::Context,
        raw: RawInput,
        state: &mut GalleryState,
        config: &GalleryConfig,
    ) -> FullOutput {
        ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| photo_grid(ui, state, config));
        })
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn placeholder_gallery() -> GalleryState {
        GalleryState::new(
            vec![
                PhotoRecord::new("Harbour", "harbour.jpg"),
                PhotoRecord::new("Pier", "pier.jpg"),
            ],
            &BundledImages::default(),
        )
    }

    #[test]
    fn draws_titles_and_placeholder_text() {
        let ctx = egui::Context::default();
        let mut state = GalleryState::new(
            vec![
                PhotoRecord::new("Sunset", "sunset.png"),
                PhotoRecord::new("Harbour", "harbour.jpg"),
            ],
            &BundledImages::default(),
        );
        let output = run_frame(&ctx, input(Vec::new()), &mut state, &GalleryConfig::default());

        let texts = painted_texts(&output);
        assert!(texts.iter().any(|t| t == "Sunset"));
        assert!(texts.iter().any(|t| t == "Harbour"));
        assert!(texts.iter().any(|t| t == "Image not found: harbour.jpg"));
        assert!(!texts.iter().any(|t| t == "Image not found: sunset.png"));
    }

    #[test]
    fn clicking_a_card_toggles_it() {
        let ctx = egui::Context::default();
        let config = GalleryConfig::default();
        let mut state = placeholder_gallery();
        // Inside the first card's image area, clear of its caption.
        let inside_first = pos2(40.0, 40.0);

        let click = |state: &mut GalleryState| {
            run_frame(&ctx, input(vec![Event::PointerMoved(inside_first)]), state, &config);
            run_frame(&ctx, input(vec![button(inside_first, true)]), state, &config);
            run_frame(&ctx, input(vec![button(inside_first, false)]), state, &config);
        };

        run_frame(&ctx, input(Vec::new()), &mut state, &config);
        assert!(!state.is_enlarged(0));

        click(&mut state);
        assert!(state.is_enlarged(0));
        assert!(!state.is_enlarged(1));

        click(&mut state);
        assert!(!state.is_enlarged(0));
    }

    #[test]
    fn empty_gallery_shows_empty_state() {
        let ctx = egui::Context::default();
        let mut state = GalleryState::default();
        let output = run_frame(&ctx, input(Vec::new()), &mut state, &GalleryConfig::default());
        assert!(painted_texts(&output).iter().any(|t| t == "No photos to show."));
    }
}
