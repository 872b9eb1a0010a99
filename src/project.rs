//! Project file persistence (`.diceproj`).
//!
//! A project captures the generation parameters and the resulting grid
//! as a JSON document, keyed exactly like the format's first
//! implementation so existing files stay readable:
//! `image_path`, `dice_width`, `dice_color`, `brightness`, `contrast`,
//! `dice_grid`, `total_dice`. The source image itself is referenced by
//! path, never embedded.
//!
//! Loading is strict and atomic: the whole document is parsed and
//! validated into a [`ProjectFile`] before any session state changes
//! hands. The per-die render size is a display choice and is not part
//! of the format.

use std::fs;
use std::path::{Path, PathBuf};

use dice_grid::DiceGrid;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DiceArtError;
use crate::session::GenerationParameters;

/// Conventional project file extension. Any file matching the schema
/// loads regardless of its name.
pub const PROJECT_EXTENSION: &str = "diceproj";

/// The serialized form of a generation session.
///
/// All fields are required; a document missing any of them fails to
/// load with [`DiceArtError::Deserialization`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Filesystem path of the source image (not the image bytes).
    pub image_path: String,
    /// Requested grid width in dice.
    pub dice_width: u32,
    /// Color scheme name.
    pub dice_color: String,
    /// Brightness factor used at generation time.
    pub brightness: f32,
    /// Contrast factor used at generation time.
    pub contrast: f32,
    /// The generated grid as nested rows of face values.
    pub dice_grid: Vec<Vec<u8>>,
    /// Total die count; must equal the grid's cell count.
    pub total_dice: u64,
}

impl ProjectFile {
    /// Capture the current session state into a serializable project.
    pub fn new(params: &GenerationParameters, grid: &DiceGrid) -> Self {
        Self {
            image_path: params.image_path.to_string_lossy().into_owned(),
            dice_width: params.grid_width,
            dice_color: params.color_scheme.clone(),
            brightness: params.brightness,
            contrast: params.contrast,
            dice_grid: grid.rows(),
            total_dice: grid.len() as u64,
        }
    }

    /// Serialize to the on-disk JSON form.
    pub fn to_json(&self) -> Result<String, DiceArtError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and fully validate a JSON document.
    ///
    /// Field presence and types are checked by the deserializer; grid
    /// shape, value ranges, and cross-field consistency are checked
    /// here. No partially-valid project ever escapes this function.
    pub fn from_json(json: &str) -> Result<Self, DiceArtError> {
        let project: ProjectFile = serde_json::from_str(json)?;
        project.validate()?;
        Ok(project)
    }

    fn validate(&self) -> Result<(), DiceArtError> {
        if self.dice_width < 1 {
            return Err(DiceArtError::Deserialization(
                "dice_width must be at least 1".to_string(),
            ));
        }
        if !(self.brightness > 0.0) {
            return Err(DiceArtError::Deserialization(format!(
                "brightness must be positive, got {}",
                self.brightness
            )));
        }
        if !(self.contrast > 0.0) {
            return Err(DiceArtError::Deserialization(format!(
                "contrast must be positive, got {}",
                self.contrast
            )));
        }

        // Rectangularity and 1..=6 range.
        let grid = DiceGrid::from_rows(&self.dice_grid)?;

        if self.total_dice != grid.len() as u64 {
            return Err(DiceArtError::Deserialization(format!(
                "total_dice is {} but the grid holds {} dice",
                self.total_dice,
                grid.len()
            )));
        }
        Ok(())
    }

    /// Reconstruct the in-memory session state.
    ///
    /// The per-die render size is not persisted, so the returned
    /// parameters carry the default; callers keep their current value
    /// if they have one.
    pub fn into_session_state(self) -> Result<(GenerationParameters, DiceGrid, usize), DiceArtError> {
        let grid = DiceGrid::from_rows(&self.dice_grid)?;
        let total = grid.len();
        let params = GenerationParameters {
            image_path: PathBuf::from(self.image_path),
            grid_width: self.dice_width,
            color_scheme: self.dice_color,
            brightness: self.brightness,
            contrast: self.contrast,
            ..GenerationParameters::default()
        };
        Ok((params, grid, total))
    }

    /// Write the project to disk.
    pub fn save(&self, path: &Path) -> Result<(), DiceArtError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        info!(path = %path.display(), dice = self.total_dice, "Saved project");
        Ok(())
    }

    /// Read and validate a project from disk.
    pub fn load(path: &Path) -> Result<Self, DiceArtError> {
        let json = fs::read_to_string(path)?;
        let project = Self::from_json(&json)?;
        info!(path = %path.display(), dice = project.total_dice, "Loaded project");
        Ok(project)
    }
}
