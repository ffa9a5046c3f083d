//! Error types for the dominant_colors library

use thiserror::Error;

use crate::source::{AcquisitionError, AcquisitionErrorKind};

/// Result type alias for dominant_colors operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for histogram parsing and palette derivation
#[derive(Error, Debug)]
pub enum PaletteError {
    /// A histogram line did not match the expected grammar
    #[error("Malformed histogram line: {line:?}")]
    MalformedHistogramLine { line: String },

    /// The histogram contained no colors
    #[error("Palette is empty: the histogram contained no colors")]
    EmptyPalette,

    /// The image acquisition or quantization collaborator failed
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration file error: {message}")]
    ConfigIo {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for the expected shape
    #[error("Configuration format error: {message}")]
    ConfigFormat {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PaletteError {
    /// Create a malformed line error for the given raw line
    pub fn malformed(line: impl Into<String>) -> Self {
        Self::MalformedHistogramLine { line: line.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration I/O error with context
    pub fn config_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration format error with context
    pub fn config_format(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigFormat {
            message: message.into(),
            source,
        }
    }

    /// Check if this error indicates a condition worth retrying with a different request
    ///
    /// An empty palette may succeed with another color count, and a failed
    /// quantizer run may be transient. Malformed input never recovers.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PaletteError::EmptyPalette => true,
            PaletteError::Acquisition(err) => err.kind == AcquisitionErrorKind::ToolFailure,
            _ => false,
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::MalformedHistogramLine { .. } => {
                "The color histogram could not be read.".to_string()
            }
            PaletteError::EmptyPalette => {
                "No colors were found in the image. Try requesting a different number of colors."
                    .to_string()
            }
            PaletteError::Acquisition(err) => err.kind.user_message().to_string(),
            PaletteError::InvalidParameter { parameter, value } => {
                format!("The setting '{}' has an unsupported value ({}).", parameter, value)
            }
            _ => "Could not load the palette configuration.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_message_contains_line() {
        let err = PaletteError::malformed("abc");
        assert_eq!(err.to_string(), "Malformed histogram line: \"abc\"");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_empty_palette_is_recoverable() {
        assert!(PaletteError::EmptyPalette.is_recoverable());
    }

    #[test]
    fn test_acquisition_error_passes_message_through() {
        let err: PaletteError =
            AcquisitionError::new(AcquisitionErrorKind::InvalidUrl, "ftp://nope").into();
        assert_eq!(err.to_string(), "Invalid URL: ftp://nope");
        assert!(!err.is_recoverable());

        let tool: PaletteError =
            AcquisitionError::new(AcquisitionErrorKind::ToolFailure, "convert exited 1").into();
        assert!(tool.is_recoverable());
    }

    #[test]
    fn test_invalid_parameter_user_message() {
        let err = PaletteError::invalid_parameter("colors", 0);
        assert_eq!(err.to_string(), "Invalid parameter: colors = 0");
        assert!(err.user_message().contains("colors"));
    }
}
