//! Resolving uploaded images into stored image values.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use folio_entity::project::ImageUpload;

/// Public asset path for a snapshot image, e.g. `/images/projects/hero.png`.
///
/// The file itself still has to be copied into the site's static assets.
pub fn asset_path(base_path: &str, upload: &ImageUpload) -> String {
    let file_name = Path::new(&upload.file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(upload.file_name.as_str());
    format!("{}/{}", base_path.trim_end_matches('/'), file_name)
}

/// Inline the image bytes as a `data:` URI so the record is self-contained.
pub fn data_uri(upload: &ImageUpload) -> String {
    let mime = mime_guess::from_path(&upload.file_name).first_or_octet_stream();
    format!("data:{};base64,{}", mime, STANDARD.encode(&upload.data))
}
