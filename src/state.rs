use std::collections::BTreeMap;

use crate::color::PlaceholderPalette;
use crate::data::model::PhotoRecord;
use crate::resources::{AssetResolver, ImageAsset};

// ---------------------------------------------------------------------------
// Gallery state
// ---------------------------------------------------------------------------

/// One grid entry: the record plus its resolved image, if any.
#[derive(Debug, Clone)]
pub struct PhotoCard {
    pub record: PhotoRecord,
    /// `None` when no bundled image matches the record's file stem.
    pub image: Option<ImageAsset>,
}

/// The full UI state, independent of rendering.
pub struct GalleryState {
    /// Cards in manifest order.
    pub cards: Vec<PhotoCard>,

    /// Placeholder tints, one per card.
    pub placeholders: PlaceholderPalette,

    /// Card index → enlarged. Transient view state, never persisted.
    enlarged: BTreeMap<usize, bool>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            placeholders: PlaceholderPalette::new(0),
            enlarged: BTreeMap::new(),
            status_message: None,
        }
    }
}

impl GalleryState {
    /// Build the gallery, resolving every record's image once up front.
    pub fn new<R: AssetResolver + ?Sized>(photos: Vec<PhotoRecord>, resolver: &R) -> Self {
        let cards: Vec<PhotoCard> = photos
            .into_iter()
            .map(|record| {
                let image = resolver.resolve(record.file_stem());
                if image.is_none() {
                    log::debug!("No image for {record}; using a placeholder");
                }
                PhotoCard { record, image }
            })
            .collect();

        let status_message = cards.is_empty().then(|| "No photos to show.".to_string());

        Self {
            placeholders: PlaceholderPalette::new(cards.len()),
            cards,
            enlarged: BTreeMap::new(),
            status_message,
        }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards showing a placeholder instead of an image.
    pub fn missing_images(&self) -> usize {
        self.cards.iter().filter(|c| c.image.is_none()).count()
    }

    /// Flip the enlarged flag of a card. Unknown indices are ignored.
    pub fn toggle_enlarged(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }
        let flag = self.enlarged.entry(index).or_default();
        *flag = !*flag;
    }

    pub fn is_enlarged(&self, index: usize) -> bool {
        self.enlarged.get(&index).copied().unwrap_or(false)
    }

    /// Scale the card is animating towards.
    pub fn target_scale(&self, index: usize, enlarged_scale: f32) -> f32 {
        if self.is_enlarged(index) {
            enlarged_scale
        } else {
            1.0
        }
    }
}
