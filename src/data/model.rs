use std::fmt;

// ---------------------------------------------------------------------------
// PhotoRecord – one <photo> entry of the manifest
// ---------------------------------------------------------------------------

/// A captioned photo as described by the manifest.
///
/// Immutable once built; the parser only constructs one when both fields
/// were present and non-empty inside the same `<photo>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoRecord {
    title: String,
    file: String,
}

impl PhotoRecord {
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file: file.into(),
        }
    }

    /// Human-readable caption.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Asset file name as written in the manifest, extension included.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The file name with its final extension removed, used as the asset key.
    ///
    /// Dot-files such as `.hidden` keep their full name.
    pub fn file_stem(&self) -> &str {
        match self.file.rfind('.') {
            Some(0) | None => &self.file,
            Some(dot) => &self.file[..dot],
        }
    }
}

impl fmt::Display for PhotoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.file)
    }
}
