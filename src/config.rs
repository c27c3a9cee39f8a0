use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::error::ManifestError;
use crate::data::manifest::ParseMode;
use crate::resources::ResourceProvider;

/// Logical name of the optional bundled configuration file.
pub const CONFIG_RESOURCE: &str = "gallery.json";

// ---------------------------------------------------------------------------
// Gallery configuration
// ---------------------------------------------------------------------------

/// Display settings for the gallery. Every field has a default, so a
/// partial (or absent) `gallery.json` is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Logical name of the manifest resource.
    pub manifest: String,
    /// Cards per grid row.
    pub columns: usize,
    /// Scale applied to an enlarged card.
    pub enlarged_scale: f32,
    /// Duration of the enlarge/shrink animation, in seconds.
    pub animation_secs: f32,
    /// Unscaled image height of a card, in points.
    pub tile_height: f32,
    /// Show a manifest error instead of an empty or partial gallery.
    pub strict_manifest: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest: "photos.xml".to_string(),
            columns: 2,
            enlarged_scale: 1.5,
            animation_secs: 0.3,
            tile_height: 180.0,
            strict_manifest: false,
        }
    }
}

impl GalleryConfig {
    /// Parse a JSON config, clamping out-of-range values.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("parsing gallery config")?;
        Ok(config.sanitized())
    }

    /// Load [`CONFIG_RESOURCE`] from `provider`; defaults when it is absent.
    pub fn load<P: ResourceProvider + ?Sized>(provider: &P) -> Result<Self> {
        let mut stream = match provider.open(CONFIG_RESOURCE) {
            Ok(stream) => stream,
            Err(ManifestError::NotFound(_)) => return Ok(Self::default()),
            Err(e) => return Err(e).context("opening gallery config"),
        };
        let mut text = String::new();
        stream
            .read_to_string(&mut text)
            .context("reading gallery config")?;
        Self::from_json(&text)
    }

    /// Like [`GalleryConfig::load`], but logs failures and falls back to defaults.
    pub fn load_or_default<P: ResourceProvider + ?Sized>(provider: &P) -> Self {
        match Self::load(provider) {
            Ok(config) => {
                log::debug!("Gallery config: {config:?}");
                config
            }
            Err(e) => {
                log::warn!("Ignoring gallery config: {e:#}");
                Self::default()
            }
        }
    }

    pub fn parse_mode(&self) -> ParseMode {
        if self.strict_manifest {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.columns = self.columns.max(1);
        if !self.enlarged_scale.is_finite() || self.enlarged_scale < 1.0 {
            self.enlarged_scale = 1.0;
        }
        if !self.animation_secs.is_finite() || self.animation_secs < 0.0 {
            self.animation_secs = 0.0;
        }
        if !self.tile_height.is_finite() || self.tile_height <= 0.0 {
            self.tile_height = defaults.tile_height;
        }
        if self.manifest.trim().is_empty() {
            self.manifest = defaults.manifest;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, Cursor};

    struct Single(&'static str);

    impl ResourceProvider for Single {
        fn open(&self, name: &str) -> Result<Box<dyn BufRead>, ManifestError> {
            if name == CONFIG_RESOURCE {
                Ok(Box::new(Cursor::new(self.0.as_bytes())))
            } else {
                Err(ManifestError::NotFound(name.to_string()))
            }
        }
    }

    struct Empty;

    impl ResourceProvider for Empty {
        fn open(&self, name: &str) -> Result<Box<dyn BufRead>, ManifestError> {
            Err(ManifestError::NotFound(name.to_string()))
        }
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = GalleryConfig::from_json(r#"{ "columns": 3 }"#).unwrap();
        assert_eq!(config.columns, 3);
        assert_eq!(config.manifest, "photos.xml");
        assert_eq!(config.enlarged_scale, 1.5);
        assert_eq!(config.parse_mode(), ParseMode::Lenient);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = GalleryConfig::from_json(
            r#"{ "columns": 0, "enlarged_scale": 0.5, "animation_secs": -1.0, "tile_height": 0.0, "manifest": " " }"#,
        )
        .unwrap();
        assert_eq!(config.columns, 1);
        assert_eq!(config.enlarged_scale, 1.0);
        assert_eq!(config.animation_secs, 0.0);
        assert_eq!(config.tile_height, 180.0);
        assert_eq!(config.manifest, "photos.xml");
    }

    #[test]
    fn strict_flag_selects_strict_mode() {
        let config = GalleryConfig::from_json(r#"{ "strict_manifest": true }"#).unwrap();
        assert_eq!(config.parse_mode(), ParseMode::Strict);
    }

    #[test]
    fn absent_config_is_default() {
        assert_eq!(GalleryConfig::load(&Empty).unwrap(), GalleryConfig::default());
    }

    #[test]
    fn invalid_config_falls_back_to_default() {
        let provider = Single("{ not json");
        assert!(GalleryConfig::load(&provider).is_err());
        assert_eq!(GalleryConfig::load_or_default(&provider), GalleryConfig::default());
    }

    #[test]
    fn bundled_config_loads() {
        let config = GalleryConfig::load(&crate::resources::BundledResources).unwrap();
        assert_eq!(config.columns, 2);
        assert_eq!(config.manifest, "photos.xml");
    }
}
