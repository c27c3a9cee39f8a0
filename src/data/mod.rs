/// Data layer: photo records and the manifest parser.
///
/// Architecture:
/// ```text
///   assets/photos.xml
///        │
///        ▼
///   ┌──────────────────┐
///   │ ResourceProvider  │  logical name → owned byte stream
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ manifest  │  streaming XML pass → Vec<PhotoRecord>
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ PhotoRecord  │  immutable (title, file)
///   └─────────────┘
/// ```

pub mod error;
pub mod manifest;
pub mod model;
