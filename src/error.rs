use dice_grid::GridError;
use thiserror::Error;

/// Unified error type for the diceart pipeline.
///
/// Every fallible operation in the library surfaces one of these; the
/// CLI (or any other host) decides how to present them. The core never
/// substitutes default data on error -- the only documented fallback is
/// the unknown color-scheme name, which is not an error at all.
#[derive(Debug, Error)]
pub enum DiceArtError {
    /// Source image could not be decoded.
    #[error("failed to decode source image: {0}")]
    Decode(#[from] image::ImageError),

    /// Rendered raster could not be encoded for export.
    #[error("failed to encode output image: {0}")]
    Encode(image::ImageError),

    /// An operation was invoked before its precondition was established
    /// (e.g. an export before `generate()`).
    #[error("cannot {operation}: no {missing} available yet")]
    EmptyState {
        /// The operation that was refused
        operation: &'static str,
        /// What the operation needed ("dice grid" or "source image")
        missing: &'static str,
    },

    /// A project file was missing fields or structurally invalid.
    #[error("invalid project file: {0}")]
    Deserialization(String),

    /// Grid data failed validation (shape or value range).
    #[error("invalid grid data: {0}")]
    Grid(#[from] GridError),

    /// Filesystem read/write failure on export, save, or load.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DiceArtError {
    fn from(e: serde_json::Error) -> Self {
        DiceArtError::Deserialization(e.to_string())
    }
}
