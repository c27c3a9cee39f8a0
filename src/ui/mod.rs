//! egui views. Each function renders into a `Ui` and only touches state
//! through `GalleryState` methods.

pub mod grid;
pub mod panels;

#[cfg(test)]
pub(crate) mod testing {
    use eframe::egui::{epaint::Shape, FullOutput};

    /// Every string painted in a frame, in paint order.
    pub fn painted_texts(output: &FullOutput) -> Vec<String> {
        fn collect(shape: &Shape, out: &mut Vec<String>) {
            match shape {
                Shape::Text(text) => out.push(text.galley.text().to_string()),
                Shape::Vec(shapes) => shapes.iter().for_each(|s| collect(s, out)),
                _ => {}
            }
        }
        let mut out = Vec::new();
        for clipped in &output.shapes {
            collect(&clipped.shape, &mut out);
        }
        out
    }
}
