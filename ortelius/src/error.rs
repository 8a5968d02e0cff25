//! Error types used by the crate.

use thiserror::Error;

/// Viewer engine error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a source file failed.
    #[error("failed to read file")]
    Io(#[from] std::io::Error),
    /// The file contents do not match the expected format.
    #[error("failed to decode data: {0}")]
    Decoding(String),
    /// No reader exists for the file extension.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    /// The transforming reader has no source reader to delegate to.
    #[error("no source reader configured")]
    MissingReader,
    /// The transforming reader has no coordinate converter.
    #[error("no coordinate converter configured")]
    MissingConverter,
    /// A feature point has no finite image under the converter.
    #[error("point projection failed")]
    Projection,
}
