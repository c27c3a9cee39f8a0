//! Photo grid: a small egui gallery whose photos and captions come from a
//! bundled XML manifest.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod resources;
pub mod state;
pub mod ui;
