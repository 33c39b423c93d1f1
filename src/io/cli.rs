//! Command-line interface for the demo launcher

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "wfc-demo")]
#[command(author, version, about = "WFC demo mode")]
/// Command-line arguments for the demo launcher
// Display toggles are independent booleans forwarded verbatim to the tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Run in slow mode
    #[arg(short, long)]
    pub slow: bool,

    /// Entropy debug
    #[arg(short, long)]
    pub debug: bool,

    /// Full screen mode
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Width
    #[arg(short = 'W', long, allow_negative_numbers = true)]
    pub width: i64,

    /// Height
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub height: i64,
}
