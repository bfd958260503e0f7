//! Image data URIs as sent by the upload forms: `data:image/<subtype>;base64,<payload>`.

use base64::Engine as _;
use thiserror::Error;

/// Largest decoded image accepted by the upload forms.
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

const IMAGE_PREFIX: &str = "data:image/";

pub const INVALID_IMAGE_MESSAGE: &str = "Please upload a valid image file.";
pub const IMAGE_TOO_LARGE_MESSAGE: &str = "Please upload an image smaller than 4MB.";

#[derive(Debug, Error, PartialEq)]
pub enum MediaError {
    #[error("not an image data URI")]
    NotImage,

    #[error("image payload is not base64")]
    NotBase64,

    #[error("image is {size} bytes, limit is 4 MiB")]
    TooLarge { size: usize },
}

impl MediaError {
    /// Message shown on the upload form.
    pub fn user_message(&self) -> &'static str {
        match self {
            MediaError::NotImage | MediaError::NotBase64 => INVALID_IMAGE_MESSAGE,
            MediaError::TooLarge { .. } => IMAGE_TOO_LARGE_MESSAGE,
        }
    }
}

/// A validated image data URI, split into the parts the Messages API wants.
///
/// `data` is kept in its original base64 form and forwarded untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDataUri {
    pub media_type: String,
    pub data: String,
}

impl ImageDataUri {
    pub fn parse(uri: &str) -> Result<Self, MediaError> {
        let rest = uri.strip_prefix(IMAGE_PREFIX).ok_or(MediaError::NotImage)?;
        let (header, payload) = rest.split_once(',').ok_or(MediaError::NotBase64)?;

        let mut params = header.split(';');
        let subtype = params.next().unwrap_or_default().trim();
        if subtype.is_empty() {
            return Err(MediaError::NotImage);
        }
        if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err(MediaError::NotBase64);
        }

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|_| MediaError::NotBase64)?;
        if decoded.is_empty() {
            return Err(MediaError::NotBase64);
        }
        if decoded.len() > MAX_IMAGE_BYTES {
            return Err(MediaError::TooLarge {
                size: decoded.len(),
            });
        }

        Ok(Self {
            media_type: format!("image/{}", subtype.to_ascii_lowercase()),
            data: payload.trim().to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) fn png_data_uri() -> String {
    // 1x1 transparent PNG
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==".to_string()
}
