//! Spatial downsampling of the adjusted image to grid luminance samples.
//!
//! The adjusted RGB image is reduced to single-channel luminance and
//! resized to exactly one sample per grid cell. Triangle filtering keeps
//! the reduction deterministic and monotone on average: a brighter
//! source region never averages darker than a dimmer one.

use image::imageops::{self, FilterType};
use image::RgbImage;
use tracing::debug;

/// Downsample an adjusted image to `grid_width x grid_height` luminance
/// samples, row-major, one `u8` per cell.
///
/// Grid dimensions come from
/// [`dice_grid::grid_dimensions`]; both must be at least 1.
pub fn sample_luminance(adjusted: &RgbImage, grid_width: u32, grid_height: u32) -> Vec<u8> {
    debug_assert!(grid_width >= 1 && grid_height >= 1, "degenerate grid");
    debug!(
        source_width = adjusted.width(),
        source_height = adjusted.height(),
        grid_width,
        grid_height,
        "Sampling luminance grid"
    );

    let luma = imageops::grayscale(adjusted);
    let cells = imageops::resize(&luma, grid_width, grid_height, FilterType::Triangle);
    cells.into_raw()
}
