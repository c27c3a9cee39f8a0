use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n).map(|i| hue_color(i, n)).collect()
}

fn hue_color(i: usize, n: usize) -> Color32 {
    let hue = (i as f32 / n as f32) * 360.0;
    // Muted so the "Image not found" text stays readable on top.
    let hsl = Hsl::new(hue, 0.35, 0.35);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Placeholder tint: grid index → Color32
// ---------------------------------------------------------------------------

/// Background tints for cards whose image could not be resolved.
#[derive(Debug, Clone)]
pub struct PlaceholderPalette {
    colors: Vec<Color32>,
}

impl PlaceholderPalette {
    /// One hue per photo so neighbouring placeholders are told apart.
    pub fn new(photo_count: usize) -> Self {
        Self {
            colors: generate_palette(photo_count),
        }
    }

    pub fn color_for(&self, index: usize) -> Color32 {
        self.colors.get(index).copied().unwrap_or(Color32::DARK_GRAY)
    }
}
