/// Failures while opening or reading the photo manifest.
///
/// Incomplete `<photo>` entries are not errors; the parser skips them.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("malformed manifest XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("manifest ended with {depth} unclosed element(s)")]
    UnexpectedEof { depth: usize },
}
