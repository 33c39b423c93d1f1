//! Launcher constants and the built-in preset table

/// Invocation prefix that launches the external generation tool
pub const TOOL_PREFIX: [&str; 4] = ["cargo", "run", "--release", "--"];

/// Verbosity level forwarded to the tool
pub const VERBOSITY_FLAG: &str = "-Vvv";

/// Seconds the tool holds the finished image on screen before exiting
pub const HOLD_SECONDS: u32 = 5;

/// Built-in demo presets as (image path, tile size) pairs
pub const PRESETS: &[(&str, u32)] = &[("images/circuit-1-57x30.png", 14)];
