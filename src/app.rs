use eframe::egui;

use crate::config::GalleryConfig;
use crate::data::manifest::load_manifest;
use crate::resources::{AssetResolver, ResourceProvider};
use crate::state::GalleryState;
use crate::ui::{grid, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PhotoGridApp {
    pub state: GalleryState,
    pub config: GalleryConfig,
}

impl PhotoGridApp {
    /// Parse the manifest once and resolve every photo's image.
    ///
    /// A manifest failure never aborts start-up: the gallery comes up empty
    /// and the error is shown in the top bar.
    pub fn new<P, R>(provider: &P, resolver: &R, config: GalleryConfig) -> Self
    where
        P: ResourceProvider + ?Sized,
        R: AssetResolver + ?Sized,
    {
        let state = match load_manifest(provider, &config.manifest, config.parse_mode()) {
            Ok(photos) => GalleryState::new(photos, resolver),
            Err(e) => {
                log::error!("Failed to load manifest {}: {e}", config.manifest);
                let mut state = GalleryState::default();
                state.status_message = Some(format!("Error: {e}"));
                state
            }
        };
        Self { state, config }
    }
}

impl eframe::App for PhotoGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: counts and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: photo grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            grid::photo_grid(ui, &mut self.state, &self.config);
        });
    }
}
