use std::path::{Path, PathBuf};

/// Convenience result type used across zorrosvg.
pub type ZorroResult<T> = Result<T, ZorroError>;

/// Top-level error taxonomy used by encoder APIs.
#[derive(thiserror::Error, Debug)]
pub enum ZorroError {
    /// Invalid user-provided options.
    #[error("validation error: {0}")]
    Validation(String),

    /// The raster codec (or SVG parser) could not decode the input bytes.
    #[error("decode error: {0}")]
    Decode(String),

    /// Pixel buffer length does not match `width * height * channels`.
    #[error("raster shape mismatch: expected {expected} bytes, got {actual}")]
    ShapeMismatch {
        /// Byte length implied by the raster dimensions.
        expected: usize,
        /// Byte length actually provided.
        actual: usize,
    },

    /// Channel count outside `{3, 4}`.
    #[error("unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(u8),

    /// The raster codec could not encode an output image.
    #[error("{format} compression failed: {source}")]
    Compress {
        /// Output format being written (`jpeg`, `png`).
        format: &'static str,
        /// Underlying codec error.
        #[source]
        source: image::ImageError,
    },

    /// An error tagged with the file that produced it.
    #[error("file `{}`: {source}", .file.display())]
    InFile {
        /// Offending file.
        file: PathBuf,
        /// Error raised while processing the file.
        #[source]
        source: Box<ZorroError>,
    },

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZorroError {
    /// Build a [`ZorroError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ZorroError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Attach the identity of the file being processed.
    ///
    /// Already-tagged errors keep their original file.
    pub fn in_file(self, file: impl AsRef<Path>) -> Self {
        match self {
            Self::InFile { .. } => self,
            other => Self::InFile {
                file: file.as_ref().to_path_buf(),
                source: Box::new(other),
            },
        }
    }

    /// File identity attached with [`ZorroError::in_file`], if any.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::InFile { file, .. } => Some(file.as_path()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
