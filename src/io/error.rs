//! Error types for image construction, rendering and export

use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug, thiserror::Error)]
pub enum AlgebraError {
    /// A scale transform was given a factor it cannot divide by
    #[error("Invalid scale factor {factor}: must be finite and non-zero")]
    InvalidScaleFactor {
        /// The rejected factor
        factor: f64,
    },

    /// A reduction over images received no images
    #[error("Cannot {operation} an empty sequence")]
    EmptySequence {
        /// Name of the reduction
        operation: &'static str,
    },

    /// Failed to load a bitmap from the filesystem
    #[error("Failed to load bitmap '{}': {source}", .path.display())]
    BitmapLoad {
        /// Path to the bitmap file
        path: PathBuf,
        /// Underlying image decoding error
        #[source]
        source: image::ImageError,
    },

    /// A bitmap decoded to zero pixels and cannot be tiled
    #[error("Bitmap '{}' has no pixels", .path.display())]
    EmptyBitmap {
        /// Path to the bitmap file
        path: PathBuf,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An animation driver operation was attempted in the wrong state
    #[error("Animation driver is {found}, expected {expected}")]
    InvalidState {
        /// State the operation requires
        expected: &'static str,
        /// State the driver was in
        found: &'static str,
    },

    /// No demo is registered under the requested name
    #[error("Unknown demo '{name}'")]
    UnknownDemo {
        /// The requested name
        name: String,
    },

    /// Failed to write a rendered image to disk
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, AlgebraError>;

impl From<std::io::Error> for AlgebraError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgebraError {
    AlgebraError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
