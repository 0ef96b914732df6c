//! Project image references and uploads.

use bytes::Bytes;

/// An image file picked in the admin form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name, e.g. `hero.png`.
    pub file_name: String,
    /// Raw image bytes.
    pub data: Bytes,
}

impl ImageUpload {
    /// Create an upload from a file name and its bytes.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// How a project's image should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// A static asset path served with the site.
    Asset(&'a str),
    /// A self-contained `data:` URI.
    Inline(&'a str),
    /// No image; render the category placeholder.
    Placeholder,
}

impl<'a> ImageSource<'a> {
    /// Classify a stored image value.
    pub fn from_stored(image: Option<&'a str>) -> Self {
        match image.map(str::trim) {
            None | Some("") => Self::Placeholder,
            Some(value) if value.starts_with("data:") => Self::Inline(value),
            Some(value) => Self::Asset(value),
        }
    }
}
