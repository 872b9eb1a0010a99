//! dice-grid: luminance-to-die-face quantization for dice mosaics
//!
//! This crate is the computational core of the dice mosaic pipeline. It
//! knows nothing about image files or pixels on screen; it operates on
//! plain luminance samples and produces a rectangular grid of die faces.
//!
//! # Quick Start
//!
//! ```
//! use dice_grid::DiceGrid;
//!
//! // One luminance sample per cell, row-major, 0 = black, 255 = white.
//! let samples = vec![0, 128, 255, 64, 192, 255];
//! let grid = DiceGrid::from_luminance(&samples, 3, 2);
//!
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.height(), 2);
//! assert_eq!(grid.get(0, 0).get(), 6); // black -> six pips
//! assert_eq!(grid.get(2, 0).get(), 1); // white -> one pip
//! ```
//!
//! # The Quantization Law
//!
//! Each luminance sample `l` in `0..=255` maps to a face value via
//!
//! ```text
//! value = clamp(6 - floor(l * 6 / 256), 1, 6)
//! ```
//!
//! Dark regions get many pips (visually dense), bright regions get few.
//! The law is fixed: downstream consumers (printed build sheets, saved
//! projects) depend on these exact bucket boundaries. See
//! [`FaceValue::from_luminance`].
//!
//! # Grid Sizing
//!
//! [`grid_dimensions`] derives the grid height from the source image's
//! aspect ratio and a requested grid width, rounding to the nearest row
//! and never returning a degenerate zero dimension.
//!
//! # Rendering Support
//!
//! The crate carries the *geometry* of rendering, not the rendering
//! itself: [`FaceValue::pips`] exposes the fixed pip layout for each
//! face, and [`ColorScheme`] the closed set of named (background, pip)
//! color pairs. An unknown scheme name falls back to the default scheme
//! instead of failing; that is the one deliberate fallback in the crate.

pub mod error;
pub mod face;
pub mod grid;
pub mod scheme;


pub use error::GridError;
pub use face::{FaceValue, Pip};
pub use grid::{grid_dimensions, DiceGrid};
pub use scheme::{ColorScheme, Rgb};
