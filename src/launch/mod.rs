//! Command construction and the repeating demo schedule

/// Preset definitions and tool argument construction
pub mod command;
/// Shuffled, unbounded execution loop with signal-aware shutdown
pub mod scheduler;
