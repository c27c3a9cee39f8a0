use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::GalleryState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: photo count, missing images and any status message.
pub fn top_bar(ui: &mut Ui, state: &GalleryState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!("{} photos", state.len()));

        let missing = state.missing_images();
        if missing > 0 {
            ui.separator();
            ui.label(format!("{missing} without image"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
