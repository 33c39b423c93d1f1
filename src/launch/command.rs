//! Preset definitions and argument construction for the external tool

use crate::io::configuration::{HOLD_SECONDS, PRESETS, TOOL_PREFIX, VERBOSITY_FLAG};
use crate::io::error::{LauncherError, Result};
use std::path::PathBuf;

/// A single demo target: a sample image plus the tile size used to cut it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Path to the sample image fed to the tool
    pub image_path: PathBuf,
    /// Edge length of the square tiles cut from the image
    pub tile_size: u32,
}

// Equivalent of `i64::div_ceil`, which this toolchain gates behind the
// unstable `int_roundings` feature for signed integers
const fn div_ceil(lhs: i64, rhs: i64) -> i64 {
    let quotient = lhs / rhs;
    let remainder = lhs % rhs;
    if (remainder > 0 && rhs > 0) || (remainder < 0 && rhs < 0) {
        quotient + 1
    } else {
        quotient
    }
}

impl Preset {
    /// Create a preset from an image path and tile size
    pub fn new(image_path: impl Into<PathBuf>, tile_size: u32) -> Self {
        Self {
            image_path: image_path.into(),
            tile_size,
        }
    }

    /// Build the demo preset list from the built-in table
    pub fn builtin() -> Vec<Self> {
        PRESETS
            .iter()
            .map(|(image, size)| Self::new(*image, *size))
            .collect()
    }

    /// Output grid dimensions for the requested window size
    ///
    /// Columns and rows are the requested width and height divided by the
    /// tile size, rounded up so the grid covers the full window.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::ZeroTileSize`] if the preset's tile size is
    /// zero.
    pub fn grid_size(&self, width: i64, height: i64) -> Result<(i64, i64)> {
        if self.tile_size == 0 {
            return Err(LauncherError::ZeroTileSize {
                image: self.image_path.clone(),
            });
        }

        let tile = i64::from(self.tile_size);
        Ok((div_ceil(width, tile), div_ceil(height, tile)))
    }

    /// Assemble the base invocation tokens for this preset
    ///
    /// The tokens select the tool, set its verbosity, name the input image
    /// and tile size, pass the computed output grid as `<cols>x<rows>`, and
    /// ask the tool to hold the finished image briefly. Display flags are
    /// appended separately by the scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::ZeroTileSize`] if the preset's tile size is
    /// zero.
    // The tile size print is an incidental diagnostic kept from the demo
    #[allow(clippy::print_stdout)]
    pub fn command_tokens(&self, width: i64, height: i64) -> Result<Vec<String>> {
        println!("{}", self.tile_size);

        let (cols, rows) = self.grid_size(width, height)?;

        let mut tokens: Vec<String> =
            TOOL_PREFIX.iter().map(|token| (*token).to_string()).collect();
        tokens.push(VERBOSITY_FLAG.to_string());
        tokens.push("-i".to_string());
        tokens.push(self.tile_size.to_string());
        tokens.push(self.image_path.display().to_string());
        tokens.push("-o".to_string());
        tokens.push(format!("{cols}x{rows}"));
        tokens.push("--hold".to_string());
        tokens.push(HOLD_SECONDS.to_string());

        Ok(tokens)
    }
}
