//! diceart: turn raster images into buildable six-sided dice mosaics.
//!
//! The quantization core lives in the [`dice_grid`] crate; this crate
//! adds image I/O, rendering, project persistence, and the [`Session`]
//! facade hosts drive.

pub mod adjust;
pub mod error;
pub mod project;
pub mod render;
pub mod sampler;
pub mod session;

pub use error::DiceArtError;
pub use project::ProjectFile;
pub use session::{GenerationParameters, Session, DEFAULT_EXPORT_CELL_SIZE};
