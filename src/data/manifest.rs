use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::error::ManifestError;
use super::model::PhotoRecord;
use crate::resources::ResourceProvider;

// ---------------------------------------------------------------------------
// Parse mode
// ---------------------------------------------------------------------------

/// How [`load_manifest`] reacts to an unreadable or malformed manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Log the failure and keep whatever was parsed before it.
    /// A manifest that cannot be opened yields an empty gallery.
    #[default]
    Lenient,
    /// Return the failure to the caller and discard partial results.
    Strict,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Open `name` through `provider` and parse it into photo records.
///
/// In [`ParseMode::Lenient`] this never returns `Err`.
/// The stream is owned by this call and released before it returns.
pub fn load_manifest<P>(
    provider: &P,
    name: &str,
    mode: ParseMode,
) -> Result<Vec<PhotoRecord>, ManifestError>
where
    P: ResourceProvider + ?Sized,
{
    let stream = match provider.open(name) {
        Ok(stream) => stream,
        Err(e) if mode == ParseMode::Lenient => {
            log::warn!("Could not open manifest {name}: {e}; showing an empty gallery");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let (photos, error) = parse_photos_partial(stream);
    match error {
        None => {
            log::info!("Loaded {} photo(s) from {name}", photos.len());
            Ok(photos)
        }
        Some(e) if mode == ParseMode::Lenient => {
            log::warn!(
                "Manifest {name} is malformed ({e}); keeping {} photo(s) read before the error",
                photos.len()
            );
            Ok(photos)
        }
        Some(e) => Err(e),
    }
}

/// Parse a manifest, failing on the first XML error.
pub fn parse_photos<R: BufRead>(source: R) -> Result<Vec<PhotoRecord>, ManifestError> {
    match parse_photos_partial(source) {
        (photos, None) => Ok(photos),
        (_, Some(e)) => Err(e),
    }
}

/// Parse a manifest in a single forward pass.
///
/// Returns every record completed before the pass stopped, plus the error
/// that stopped it, if any.
pub fn parse_photos_partial<R: BufRead>(source: R) -> (Vec<PhotoRecord>, Option<ManifestError>) {
    let mut photos = Vec::new();
    let error = scan(source, &mut photos).err();
    (photos, error)
}

// ---------------------------------------------------------------------------
// Streaming scan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    File,
}

/// Fields seen so far inside the current `<photo>`.
#[derive(Debug, Default)]
struct PendingPhoto {
    title: String,
    file: String,
}

impl PendingPhoto {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::File => &mut self.file,
        }
    }

    fn clear(&mut self) {
        self.title.clear();
        self.file.clear();
    }

    /// Build a record if both fields are non-empty. Always resets the slots.
    fn take_record(&mut self) -> Option<PhotoRecord> {
        let title = std::mem::take(&mut self.title);
        let file = std::mem::take(&mut self.file);
        let (title, file) = (title.trim(), file.trim());
        if title.is_empty() || file.is_empty() {
            log::debug!("Skipping incomplete photo (title: {title:?}, file: {file:?})");
            return None;
        }
        Some(PhotoRecord::new(title, file))
    }
}

fn scan<R: BufRead>(source: R, photos: &mut Vec<PhotoRecord>) -> Result<(), ManifestError> {
    // Text is kept untrimmed so chunks split by comments or child elements
    // join with their inner whitespace; `take_record` trims the result.
    let mut reader = Reader::from_reader(source);

    let mut buf = Vec::new();
    let mut pending = PendingPhoto::default();
    // Field being captured and the depth of its element; only text at that
    // exact depth counts as the field's content.
    let mut capture: Option<(Field, usize)> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"photo" => {
                        pending.clear();
                        capture = None;
                    }
                    b"title" => {
                        pending.title.clear();
                        capture = Some((Field::Title, depth));
                    }
                    b"file" => {
                        pending.file.clear();
                        capture = Some((Field::File, depth));
                    }
                    _ => {}
                }
            }
            Event::End(e) => {
                if matches!(capture, Some((_, d)) if d == depth) {
                    capture = None;
                }
                if e.local_name().as_ref() == b"photo" {
                    if let Some(record) = pending.take_record() {
                        photos.push(record);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(e) => {
                if let Some((field, d)) = capture {
                    if d == depth {
                        pending.slot(field).push_str(&e.unescape()?);
                    }
                }
            }
            Event::CData(e) => {
                if let Some((field, d)) = capture {
                    if d == depth {
                        pending
                            .slot(field)
                            .push_str(&e.decode().map_err(quick_xml::Error::from)?);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(ManifestError::UnexpectedEof { depth });
    }
    Ok(())
}
