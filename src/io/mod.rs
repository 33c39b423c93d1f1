//! Input/output operations and error handling

/// Command-line argument definitions
pub mod cli;
/// Launcher constants and the built-in preset table
pub mod configuration;
/// Error types and result alias
pub mod error;
