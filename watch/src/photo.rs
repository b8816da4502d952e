//! Photos attached to reports, carried as `data:` URLs.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("not a base64 data URL")]
    NotDataUrl,
    #[error("unsupported media type: {0}")]
    NotAnImage(String),
    #[error("invalid base64 payload")]
    BadPayload,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An encoded image, embeddable directly in a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Photo(String);

impl Photo {
    /// Encode raw image bytes as a data URL.
    pub fn encode(mime: &str, bytes: &[u8]) -> Result<Self, PhotoError> {
        if !mime.starts_with("image/") {
            return Err(PhotoError::NotAnImage(mime.to_string()));
        }
        Ok(Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes))))
    }

    /// Read an image file, guessing its type from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PhotoError> {
        let path = path.as_ref();
        let mime = mime_guess::from_path(path)
            .first()
            .ok_or_else(|| PhotoError::NotAnImage(path.display().to_string()))?;
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(PhotoError::NotAnImage(mime.to_string()));
        }
        let bytes = std::fs::read(path)?;
        Self::encode(mime.essence_str(), &bytes)
    }

    /// Accept a data URL produced elsewhere, e.g. by a browser.
    pub fn from_data_url(url: &str) -> Result<Self, PhotoError> {
        let (mime, payload) = split_data_url(url).ok_or(PhotoError::NotDataUrl)?;
        if !mime.starts_with("image/") {
            return Err(PhotoError::NotAnImage(mime.to_string()));
        }
        STANDARD
            .decode(payload)
            .map_err(|_| PhotoError::BadPayload)?;
        Ok(Self(url.to_string()))
    }

    pub fn mime(&self) -> &str {
        split_data_url(&self.0).map(|(mime, _)| mime).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn split_data_url(url: &str) -> Option<(&str, &str)> {
    let (prefix, data) = url.split_once(',')?;
    let mime = prefix.strip_prefix("data:")?.strip_suffix(";base64")?;
    Some((mime, data))
}
