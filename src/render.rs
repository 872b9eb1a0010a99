//! Dice face rendering and full-grid composition.
//!
//! One parameterized primitive, [`render_face`], draws a single die at
//! any origin and size; [`render_grid`] tiles it across the whole grid
//! and [`render_preview`] shrinks that composition into a fixed bounding
//! box for interactive display. Identical inputs produce byte-identical
//! rasters -- exports are diffed in tests and by downstream tooling.

use dice_grid::{ColorScheme, DiceGrid, FaceValue};
use image::imageops;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use tracing::debug;

/// Pip radius as a fraction of the cell size.
const PIP_RADIUS_FRACTION: f32 = 0.15;

/// Border color drawn around each die face.
const FACE_BORDER: Rgb<u8> = Rgb([0x95, 0xa5, 0xa6]);

/// Base fill of the composed canvas. Only visible if cells failed to
/// tile it, which cannot happen for grids built by this crate.
const CANVAS_FILL: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Preview bounding box (both axes), matching the interactive pane the
/// original tool displayed thumbnails in.
const PREVIEW_MAX: u32 = 300;

fn pixel(color: dice_grid::Rgb) -> Rgb<u8> {
    Rgb(color.channels())
}

/// Draw a single die face into `canvas`.
///
/// Fills a `cell x cell` square at `(origin_x, origin_y)` with the
/// scheme's background, outlines it with a 1-px border, then stamps one
/// filled circular pip per layout entry. Pip centers are
/// `origin + coordinate * cell`, pip radius is `0.15 * cell`.
pub fn render_face(
    canvas: &mut RgbImage,
    origin_x: u32,
    origin_y: u32,
    cell: u32,
    face: FaceValue,
    scheme: &ColorScheme,
) {
    let bounds = Rect::at(origin_x as i32, origin_y as i32).of_size(cell, cell);
    draw_filled_rect_mut(canvas, bounds, pixel(scheme.background()));
    draw_hollow_rect_mut(canvas, bounds, FACE_BORDER);

    let radius = (PIP_RADIUS_FRACTION * cell as f32).round() as i32;
    for pip in face.pips() {
        let cx = origin_x as f32 + pip.x * cell as f32;
        let cy = origin_y as f32 + pip.y * cell as f32;
        draw_filled_circle_mut(
            canvas,
            (cx.round() as i32, cy.round() as i32),
            radius,
            pixel(scheme.pip()),
        );
    }
}

/// Compose the full grid into a raster of exactly
/// `(width * cell, height * cell)` pixels.
///
/// Cells are drawn in row-major order; the output is deterministic for
/// identical inputs.
pub fn render_grid(grid: &DiceGrid, cell: u32, scheme: &ColorScheme) -> RgbImage {
    debug_assert!(cell >= 1, "cell size must be at least 1");
    let width = grid.width() * cell;
    let height = grid.height() * cell;
    debug!(
        grid_width = grid.width(),
        grid_height = grid.height(),
        cell,
        scheme = scheme.name(),
        "Rendering dice grid"
    );

    let mut canvas = RgbImage::from_pixel(width, height, CANVAS_FILL);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            render_face(&mut canvas, x * cell, y * cell, cell, grid.get(x, y), scheme);
        }
    }
    canvas
}

/// Render the grid, then shrink the result to fit a 300x300 bounding
/// box while preserving aspect ratio.
///
/// A pure post-processing thumbnail step: the underlying grid and the
/// full-size composition are unchanged. Rasters that already fit are
/// returned as-is.
pub fn render_preview(grid: &DiceGrid, cell: u32, scheme: &ColorScheme) -> RgbImage {
    let full = render_grid(grid, cell, scheme);
    let (w, h) = full.dimensions();
    if w <= PREVIEW_MAX && h <= PREVIEW_MAX {
        return full;
    }

    let scale = (f64::from(PREVIEW_MAX) / f64::from(w)).min(f64::from(PREVIEW_MAX) / f64::from(h));
    let tw = ((f64::from(w) * scale) as u32).max(1);
    let th = ((f64::from(h) * scale) as u32).max(1);
    imageops::thumbnail(&full, tw, th)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_grid::DiceGrid;

    fn grid_of(rows: &[Vec<u8>]) -> DiceGrid {
        DiceGrid::from_rows(rows).expect("valid test grid")
    }

    #[test]
    fn test_render_grid_dimensions() {
        let grid = grid_of(&[vec![1, 2, 3], vec![4, 5, 6]]);
        let raster = render_grid(&grid, 20, &ColorScheme::default());
        assert_eq!(raster.dimensions(), (60, 40));

        let raster = render_grid(&grid, 1, &ColorScheme::default());
        assert_eq!(raster.dimensions(), (3, 2));
    }

    #[test]
    fn test_render_grid_is_deterministic() {
        let grid = grid_of(&[vec![6, 1], vec![3, 4]]);
        let scheme = ColorScheme::from_name("wood");
        let a = render_grid(&grid, 16, &scheme);
        let b = render_grid(&grid, 16, &scheme);
        assert_eq!(a.as_raw(), b.as_raw(), "renders must be byte-identical");
    }

    #[test]
    fn test_face_background_border_and_pip() {
        let grid = grid_of(&[vec![1]]);
        let scheme = ColorScheme::default();
        let raster = render_grid(&grid, 20, &scheme);

        // Corner lies on the border outline.
        assert_eq!(*raster.get_pixel(0, 0), FACE_BORDER);
        // Just inside the border, clear of any pip: background.
        assert_eq!(raster.get_pixel(2, 2).0, scheme.background().channels());
        // Face 1 has a single centered pip at (10, 10).
        assert_eq!(raster.get_pixel(10, 10).0, scheme.pip().channels());
    }

    #[test]
    fn test_faces_render_distinctly() {
        let one = render_grid(&grid_of(&[vec![1]]), 20, &ColorScheme::default());
        let six = render_grid(&grid_of(&[vec![6]]), 20, &ColorScheme::default());
        assert_ne!(one.as_raw(), six.as_raw());

        // Face 6 puts a pip at (0.3, 0.5) * 20 = (6, 10); face 1 leaves
        // that spot as background.
        let scheme = ColorScheme::default();
        assert_eq!(six.get_pixel(6, 10).0, scheme.pip().channels());
        assert_eq!(one.get_pixel(6, 10).0, scheme.background().channels());
    }

    #[test]
    fn test_scheme_colors_show_up() {
        let grid = grid_of(&[vec![1]]);
        let black = render_grid(&grid, 20, &ColorScheme::from_name("black"));
        let scheme = ColorScheme::from_name("black");
        assert_eq!(black.get_pixel(2, 2).0, scheme.background().channels());
        assert_eq!(black.get_pixel(10, 10).0, scheme.pip().channels());
    }

    #[test]
    fn test_preview_fits_bounding_box() {
        let grid = grid_of(&[vec![1; 40], vec![2; 40]]); // 40x2 cells
        let preview = render_preview(&grid, 20, &ColorScheme::default());
        let (w, h) = preview.dimensions();
        assert!(w <= 300 && h <= 300, "preview {}x{} exceeds box", w, h);
        // 800x40 scaled by 300/800 -> 300x15
        assert_eq!((w, h), (300, 15));
    }

    #[test]
    fn test_preview_passthrough_when_small() {
        let grid = grid_of(&[vec![3, 4]]);
        let full = render_grid(&grid, 20, &ColorScheme::default());
        let preview = render_preview(&grid, 20, &ColorScheme::default());
        assert_eq!(preview.as_raw(), full.as_raw());
    }
}
