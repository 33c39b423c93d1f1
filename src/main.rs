//! CLI entry point for the wave function collapse demo launcher

use clap::Parser;
use wfc_demo::io::cli::Cli;
use wfc_demo::launch::scheduler::Scheduler;

fn main() -> wfc_demo::Result<()> {
    let cli = Cli::parse();
    Scheduler::new(cli)?.run()
}
