use eframe::egui;
use photo_grid::app::PhotoGridApp;
use photo_grid::config::GalleryConfig;
use photo_grid::resources::{BundledImages, BundledResources};

fn main() -> eframe::Result {
    env_logger::init();

    let config = GalleryConfig::load_or_default(&BundledResources);
    let app = PhotoGridApp::new(&BundledResources, &BundledImages::default(), config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Photo Grid",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can decode the bundled png/jpg bytes.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
