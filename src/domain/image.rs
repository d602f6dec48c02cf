use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::new_id;

/// Origin of an image reference as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Remote URL entered by the user.
    Url,
    /// File picked from disk; `url` holds an ephemeral preview reference.
    File,
    /// Normalized form stored by the stores.
    Local,
}

/// Image reference attached to a brand or product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Unique identifier of the image within its record.
    pub id: String,
    /// Remote URL, ephemeral preview URL, or bundled asset reference.
    pub url: String,
    /// Source tag; always [`ImageSource::Local`] once persisted.
    #[serde(rename = "type")]
    pub source: ImageSource,
    /// Path of the picked file, when the image came from the file picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Image entry handed to the stores by the acquisition layer, before
/// normalization. The id is optional; the source tag is whatever the
/// caller chose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewImage {
    pub id: Option<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub source: ImageSource,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl NewImage {
    /// Build an entry for a remote URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
            source: ImageSource::Url,
            file: None,
        }
    }

    /// Build an entry for a picked file with its preview URL.
    pub fn from_file(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: None,
            url: url.into(),
            source: ImageSource::File,
            file: Some(path.into()),
        }
    }
}

impl From<ImageRef> for NewImage {
    fn from(image: ImageRef) -> Self {
        Self {
            id: Some(image.id),
            url: image.url,
            source: image.source,
            file: image.file,
        }
    }
}

/// Normalizes an incoming image list for storage: assigns an id where one
/// is missing and rewrites the source tag to `local`, preserving url and
/// file. Pure and total over any input list; applying it twice yields the
/// same ids and urls as applying it once.
pub fn normalize_images(images: Vec<NewImage>) -> Vec<ImageRef> {
    images
        .into_iter()
        .map(|image| ImageRef {
            id: image.id.unwrap_or_else(new_id),
            url: image.url,
            source: ImageSource::Local,
            file: image.file,
        })
        .collect()
}
