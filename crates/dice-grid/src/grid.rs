//! The dice grid container and grid sizing math.
//!
//! [`DiceGrid`] stores one [`FaceValue`] per cell in row-major order
//! with frozen dimensions. A grid is built wholesale -- from luminance
//! samples during generation, or from validated rows during project
//! load -- and never mutated cell-by-cell afterwards.

use crate::error::GridError;
use crate::face::FaceValue;

/// Compute grid dimensions from a source image's aspect ratio.
///
/// The height is `round(target_width * source_height / source_width)`,
/// floored at 1 so a very wide source still produces at least one row.
///
/// # Example
///
/// ```
/// use dice_grid::grid_dimensions;
///
/// assert_eq!(grid_dimensions(300, 150, 30), (30, 15));
/// assert_eq!(grid_dimensions(1000, 10, 40), (40, 1));
/// ```
pub fn grid_dimensions(source_width: u32, source_height: u32, target_width: u32) -> (u32, u32) {
    debug_assert!(source_width > 0 && source_height > 0, "empty source image");
    let width = target_width.max(1);
    let height = (f64::from(width) * f64::from(source_height) / f64::from(source_width.max(1)))
        .round() as u32;
    (width, height.max(1))
}

/// A rectangular grid of die face values.
///
/// Cells are stored flat in row-major order (top-to-bottom rows,
/// left-to-right columns) alongside the grid dimensions, mirroring how
/// the renderer walks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceGrid {
    faces: Vec<FaceValue>,
    width: u32,
    height: u32,
}

impl DiceGrid {
    /// Build a grid by quantizing luminance samples cell-wise.
    ///
    /// `samples` holds one luminance value per cell in row-major order.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `samples.len() == width * height`.
    pub fn from_luminance(samples: &[u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            samples.len(),
            (width * height) as usize,
            "sample count ({}) must match grid dimensions ({}x{})",
            samples.len(),
            width,
            height,
        );
        let faces = samples
            .iter()
            .map(|&l| FaceValue::from_luminance(l))
            .collect();
        Self {
            faces,
            width,
            height,
        }
    }

    /// Build a grid from untrusted nested rows (project file path).
    ///
    /// Validates non-emptiness, rectangularity, and the 1..=6 range of
    /// every cell before any value is accepted.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut faces = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::NotRectangular {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, &value) in row.iter().enumerate() {
                faces.push(FaceValue::new(value, y, x)?);
            }
        }

        Ok(Self {
            faces,
            width: width as u32,
            height: height as u32,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of dice (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True for a grid with no cells. Cannot occur for grids built
    /// through the public constructors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The face at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> FaceValue {
        assert!(x < self.width && y < self.height, "cell out of bounds");
        self.faces[(y * self.width + x) as usize]
    }

    /// All faces in row-major order.
    #[inline]
    pub fn faces(&self) -> &[FaceValue] {
        &self.faces
    }

    /// The grid as nested rows of plain integers (project file path).
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.faces
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|f| f.get()).collect())
            .collect()
    }

    /// Count cells per face value, including zero counts.
    ///
    /// Index 0 holds the count for face 1, index 5 for face 6. The
    /// counts always sum to [`len()`](Self::len).
    pub fn count_by_face(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for face in &self.faces {
            counts[(face.get() - 1) as usize] += 1;
        }
        counts
    }

    /// Serialize to plain text: one row per line, values separated by
    /// single spaces, trailing newline after every row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.faces.len() * 2 + self.height as usize);
        for row in self.faces.chunks(self.width as usize) {
            for (i, face) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push((b'0' + face.get()) as char);
            }
            out.push('\n');
        }
        out
    }
}
