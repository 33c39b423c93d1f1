//! Demo-mode launcher for a wave function collapse image generator
//!
//! The launcher holds a fixed table of presets, each naming a sample image and
//! a tile size. It shuffles the table into a random order and invokes the
//! external generation tool once per preset, forwarding display flags and a
//! computed output grid size, then starts the next round.

#![forbid(unsafe_code)]

/// Input/output operations, configuration constants, and error handling
pub mod io;
/// Command construction and the repeating demo schedule
pub mod launch;

pub use io::error::{LauncherError, Result};
