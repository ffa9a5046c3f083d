//! Interface to the image acquisition and quantization collaborator
//!
//! Opening an image (from a path, URL or base64 payload) and reducing it to a
//! quantized histogram happens outside this crate. Implementors of
//! [`HistogramSource`] hand back histogram text in the grammar understood by
//! [`HistogramParser`](crate::histogram::HistogramParser), or one of the tagged
//! [`AcquisitionError`]s below.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PaletteConfig;

/// Failure modes of image acquisition and quantization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcquisitionErrorKind {
    /// Local file does not exist
    FileNotFound,
    /// Remote resource could not be found
    UrlNotFound,
    /// Source looked like a URL but could not be parsed as one
    InvalidUrl,
    /// Source looked like base64 but did not decode
    InvalidBase64,
    /// Content was read but is not an image
    NotAnImage,
    /// Source identifier was empty
    EmptySource,
    /// The quantizer could not be run or exited with an error
    ToolFailure,
}

impl AcquisitionErrorKind {
    fn label(self) -> &'static str {
        match self {
            AcquisitionErrorKind::FileNotFound => "File not found",
            AcquisitionErrorKind::UrlNotFound => "URL not found",
            AcquisitionErrorKind::InvalidUrl => "Invalid URL",
            AcquisitionErrorKind::InvalidBase64 => "Invalid base64",
            AcquisitionErrorKind::NotAnImage => "Not an image",
            AcquisitionErrorKind::EmptySource => "Empty source",
            AcquisitionErrorKind::ToolFailure => "Quantizer failed",
        }
    }

    pub(crate) fn user_message(self) -> &'static str {
        match self {
            AcquisitionErrorKind::FileNotFound => "The image file could not be found.",
            AcquisitionErrorKind::UrlNotFound => "The image URL could not be reached.",
            AcquisitionErrorKind::InvalidUrl => "The image URL is not valid.",
            AcquisitionErrorKind::InvalidBase64 => "The image data is not valid base64.",
            AcquisitionErrorKind::NotAnImage => "The source is not an image.",
            AcquisitionErrorKind::EmptySource => "No image source was given.",
            AcquisitionErrorKind::ToolFailure => {
                "The image could not be analyzed. Please try again."
            }
        }
    }
}

impl fmt::Display for AcquisitionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error produced by a [`HistogramSource`], tagged with its failure mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct AcquisitionError {
    pub kind: AcquisitionErrorKind,
    pub message: String,
}

impl AcquisitionError {
    pub fn new(kind: AcquisitionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Produces quantized histogram text for an image source
///
/// `source` is whatever identifier the implementation understands (a path,
/// URL or base64 string). Implementations should run their quantizer with
/// [`PaletteConfig::quantizer_args`] so the output matches the parser.
pub trait HistogramSource {
    fn histogram(
        &self,
        source: &str,
        config: &PaletteConfig,
    ) -> std::result::Result<String, AcquisitionError>;
}

impl<F> HistogramSource for F
where
    F: Fn(&str, &PaletteConfig) -> std::result::Result<String, AcquisitionError>,
{
    fn histogram(
        &self,
        source: &str,
        config: &PaletteConfig,
    ) -> std::result::Result<String, AcquisitionError> {
        self(source, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_uses_kind_label() {
        let err = AcquisitionError::new(AcquisitionErrorKind::NotAnImage, "notes.txt");
        assert_eq!(err.to_string(), "Not an image: notes.txt");
    }

    #[test]
    fn test_closure_is_a_histogram_source() {
        let source = |id: &str, config: &PaletteConfig| {
            if id.is_empty() {
                Err(AcquisitionError::new(AcquisitionErrorKind::EmptySource, "empty"))
            } else {
                Ok(format!("{}:(0,0,0,255)#000000FF", config.colors))
            }
        };

        let config = PaletteConfig::default();
        assert_eq!(
            source.histogram("", &config).unwrap_err().kind,
            AcquisitionErrorKind::EmptySource
        );
        assert_eq!(
            source.histogram("photo.png", &config).unwrap(),
            "5:(0,0,0,255)#000000FF"
        );
    }
}
