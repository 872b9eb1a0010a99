//! The generation session: the surface a host (CLI, GUI, service)
//! drives.
//!
//! A [`Session`] owns the mutable `(parameters, source image, grid)`
//! triple; everything it calls into is a pure function. The grid is
//! replaced wholesale by [`generate`](Session::generate) and never
//! mutated in place, and every export independently checks its own
//! preconditions instead of trusting the caller's state tracking.

use std::path::{Path, PathBuf};

use dice_grid::{grid_dimensions, ColorScheme, DiceGrid};
use image::{DynamicImage, RgbImage};
use tracing::{debug, info};

use crate::adjust::adjust;
use crate::error::DiceArtError;
use crate::project::ProjectFile;
use crate::render;
use crate::sampler::sample_luminance;

/// Default per-die pixel size for image export. Larger than typical
/// interactive sizing so printed output keeps pip detail.
pub const DEFAULT_EXPORT_CELL_SIZE: u32 = 32;

/// Everything that drives one generation pass and its rendering.
///
/// Treated as an immutable value: adjust a copy and hand it back via
/// [`Session::set_parameters`] rather than poking fields on a live
/// session.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParameters {
    /// Path of the source image (persisted in projects; the bytes are
    /// not).
    pub image_path: PathBuf,
    /// Requested grid width in dice, at least 1.
    pub grid_width: u32,
    /// Color scheme name; unknown names render in the default scheme.
    pub color_scheme: String,
    /// Brightness factor, positive, 1.0 = identity.
    pub brightness: f32,
    /// Contrast factor, positive, 1.0 = identity.
    pub contrast: f32,
    /// Per-die pixel size for interactive rendering, at least 1.
    pub cell_size: u32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            image_path: PathBuf::new(),
            grid_width: 30,
            color_scheme: "white".to_string(),
            brightness: 1.0,
            contrast: 1.0,
            cell_size: 20,
        }
    }
}

/// A single-user, single-threaded generation session.
#[derive(Debug, Default)]
pub struct Session {
    params: GenerationParameters,
    source: Option<DynamicImage>,
    grid: Option<DiceGrid>,
}

impl Session {
    /// Create a session with default parameters and no image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given parameters.
    pub fn with_parameters(params: GenerationParameters) -> Self {
        Self {
            params,
            source: None,
            grid: None,
        }
    }

    /// Current generation parameters.
    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    /// Replace the generation parameters.
    ///
    /// An existing grid stays in place until the next
    /// [`generate`](Self::generate); exports keep reflecting the grid
    /// that was actually generated.
    pub fn set_parameters(&mut self, params: GenerationParameters) {
        self.params = params;
    }

    /// The current grid, if one has been generated or loaded.
    pub fn grid(&self) -> Option<&DiceGrid> {
        self.grid.as_ref()
    }

    /// Decode a source image from disk and remember its path.
    pub fn load_image(&mut self, path: &Path) -> Result<(), DiceArtError> {
        let image = image::open(path)?;
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Loaded source image"
        );
        self.params.image_path = path.to_path_buf();
        self.source = Some(image);
        Ok(())
    }

    /// Run the full quantization pipeline and replace the grid.
    ///
    /// adjustment -> grayscale -> downsample -> face mapping. Fails with
    /// [`DiceArtError::EmptyState`] when no source image is loaded.
    pub fn generate(&mut self) -> Result<&DiceGrid, DiceArtError> {
        let source = self.source.as_ref().ok_or(DiceArtError::EmptyState {
            operation: "generate dice art",
            missing: "source image",
        })?;

        let (grid_w, grid_h) =
            grid_dimensions(source.width(), source.height(), self.params.grid_width);
        let adjusted = adjust(source, self.params.brightness, self.params.contrast);
        let samples = sample_luminance(&adjusted, grid_w, grid_h);
        let grid = DiceGrid::from_luminance(&samples, grid_w, grid_h);

        info!(
            grid_width = grid_w,
            grid_height = grid_h,
            total_dice = grid.len(),
            "Generated dice grid"
        );
        Ok(&*self.grid.insert(grid))
    }

    fn require_grid(&self, operation: &'static str) -> Result<&DiceGrid, DiceArtError> {
        self.grid.as_ref().ok_or(DiceArtError::EmptyState {
            operation,
            missing: "dice grid",
        })
    }

    fn scheme(&self) -> ColorScheme {
        ColorScheme::from_name(&self.params.color_scheme)
    }

    /// Render the grid at the interactive cell size, shrunk to the
    /// preview bounding box.
    pub fn render_preview(&self) -> Result<RgbImage, DiceArtError> {
        let grid = self.require_grid("render preview")?;
        Ok(render::render_preview(
            grid,
            self.params.cell_size.max(1),
            &self.scheme(),
        ))
    }

    /// Render the grid at an export cell size (default
    /// [`DEFAULT_EXPORT_CELL_SIZE`]).
    pub fn export_image(&self, cell_size: Option<u32>) -> Result<RgbImage, DiceArtError> {
        let grid = self.require_grid("export image")?;
        let cell = cell_size.unwrap_or(DEFAULT_EXPORT_CELL_SIZE).max(1);
        Ok(render::render_grid(grid, cell, &self.scheme()))
    }

    /// Render and write the grid to `path`; the raster format (PNG or
    /// JPEG) follows the file extension.
    pub fn export_image_to(
        &self,
        path: &Path,
        cell_size: Option<u32>,
    ) -> Result<(), DiceArtError> {
        let raster = self.export_image(cell_size)?;
        raster.save(path).map_err(|e| match e {
            image::ImageError::IoError(io) => DiceArtError::Io(io),
            other => DiceArtError::Encode(other),
        })?;
        info!(path = %path.display(), "Exported dice art image");
        Ok(())
    }

    /// The grid as plain text, one row per line.
    pub fn export_grid(&self) -> Result<String, DiceArtError> {
        Ok(self.require_grid("export grid")?.to_text())
    }

    /// The bill-of-materials listing: per-face counts plus the total.
    pub fn export_report(&self) -> Result<String, DiceArtError> {
        let grid = self.require_grid("generate dice list")?;
        let counts = grid.count_by_face();

        let mut report = String::from("Dice Requirements:\n");
        report.push_str("------------------\n");
        for (i, count) in counts.iter().enumerate() {
            report.push_str(&format!("Dice {}: {}\n", i + 1, count));
        }
        report.push_str("------------------\n");
        report.push_str(&format!("Total Dice: {}\n", grid.len()));
        Ok(report)
    }

    /// Persist parameters and grid as a project file.
    pub fn save_project(&self, path: &Path) -> Result<(), DiceArtError> {
        let grid = self.require_grid("save project")?;
        ProjectFile::new(&self.params, grid).save(path)
    }

    /// Restore a session from a project file, atomically.
    ///
    /// All parsing and validation happens before any field of `self`
    /// changes; a malformed file leaves the session exactly as it was.
    /// The source image is not decoded -- projects store only its path,
    /// so call [`load_image`](Self::load_image) again before
    /// regenerating.
    pub fn load_project(&mut self, path: &Path) -> Result<(), DiceArtError> {
        let (mut params, grid, _total) = ProjectFile::load(path)?.into_session_state()?;

        // Render size is a live display choice, not project data.
        params.cell_size = self.params.cell_size;
        self.params = params;
        self.grid = Some(grid);
        self.source = None;
        Ok(())
    }
}
