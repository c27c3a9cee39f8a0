use std::borrow::Cow;
use std::io::{BufRead, Cursor};
use std::path::Path;
use std::sync::Arc;

use rust_embed::RustEmbed;

use crate::data::error::ManifestError;

/// Everything under `assets/`, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Bundled;

// ---------------------------------------------------------------------------
// Byte streams keyed by logical name
// ---------------------------------------------------------------------------

/// Opens readable streams for bundled resources such as the manifest.
///
/// The returned stream is owned by the caller; dropping it releases it.
pub trait ResourceProvider {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead>, ManifestError>;
}

/// Serves the files embedded from `assets/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledResources;

impl ResourceProvider for BundledResources {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead>, ManifestError> {
        let file = Bundled::get(name).ok_or_else(|| ManifestError::NotFound(name.to_string()))?;
        Ok(Box::new(Cursor::new(file.data)))
    }
}

// ---------------------------------------------------------------------------
// Image assets keyed by file stem
// ---------------------------------------------------------------------------

/// Encoded image bytes plus the URI egui's loaders cache them under.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// `bytes://` URI; keeps the real extension so the right decoder is used.
    pub uri: String,
    pub bytes: Arc<[u8]>,
}

/// Maps a file stem (`"sunset"` for `sunset.jpg`) to a renderable image.
///
/// `None` means "not found"; callers show a placeholder instead.
pub trait AssetResolver {
    fn resolve(&self, stem: &str) -> Option<ImageAsset>;
}

/// Looks up embedded images in one directory of `assets/`.
#[derive(Debug, Clone)]
pub struct BundledImages {
    prefix: Cow<'static, str>,
}

impl Default for BundledImages {
    fn default() -> Self {
        Self::new("images/")
    }
}

impl BundledImages {
    pub fn new(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Embedded path of the first image in this directory with the given stem.
    fn find(&self, stem: &str) -> Option<Cow<'static, str>> {
        Bundled::iter().find(|path| {
            path.strip_prefix(self.prefix.as_ref())
                .filter(|rest| !rest.contains('/'))
                .and_then(|rest| Path::new(rest).file_stem())
                .is_some_and(|s| s == stem)
        })
    }
}

impl AssetResolver for BundledImages {
    fn resolve(&self, stem: &str) -> Option<ImageAsset> {
        if stem.is_empty() {
            return None;
        }
        let Some(path) = self.find(stem) else {
            log::debug!("No bundled image for {stem:?} under {}", self.prefix);
            return None;
        };
        let file = Bundled::get(&path)?;
        Some(ImageAsset {
            uri: format!("bytes://{path}"),
            bytes: Arc::from(file.data.into_owned()),
        })
    }
}
