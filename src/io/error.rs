//! Error types for launcher operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all launcher operations
#[derive(Debug)]
pub enum LauncherError {
    /// A preset declares a tile size of zero, which defines no grid
    ZeroTileSize {
        /// Image the offending preset points at
        image: PathBuf,
    },

    /// Failed to spawn or wait on the external tool
    Spawn {
        /// Program name taken from the invocation tokens
        program: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to register the stop-signal handler
    SignalHandler {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LauncherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTileSize { image } => {
                write!(
                    f,
                    "Preset for '{}' has a tile size of zero",
                    image.display()
                )
            }
            Self::Spawn { program, source } => {
                write!(f, "Failed to run '{program}': {source}")
            }
            Self::SignalHandler { source } => {
                write!(f, "Failed to register signal handler: {source}")
            }
        }
    }
}

impl std::error::Error for LauncherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } | Self::SignalHandler { source } => Some(source),
            Self::ZeroTileSize { .. } => None,
        }
    }
}

/// Convenience type alias for launcher results
pub type Result<T> = std::result::Result<T, LauncherError>;
