use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing or writing a screenshot batch.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// None of the candidate font files could be read and parsed.
    #[error("no usable {role} font (tried: {tried})")]
    FontUnavailable { role: &'static str, tried: String },

    #[error("unknown scene `{0}`")]
    UnknownScene(String),

    #[error("unknown device profile `{0}`")]
    UnknownDevice(String),

    #[error("unknown screenshot id `{0}`")]
    UnknownScreenshot(String),

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
