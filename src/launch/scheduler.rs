//! Shuffled, unbounded execution loop for the demo presets

use crate::io::cli::Cli;
use crate::io::error::{LauncherError, Result};
use crate::launch::command::Preset;
use rand::seq::SliceRandom;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag;
use std::process::Command;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Copy the preset list into a fresh random order
pub fn shuffle_round(presets: &[Preset]) -> Vec<Preset> {
    let mut round = presets.to_vec();
    round.shuffle(&mut rand::rng());
    round
}

/// Assemble the full invocation for one preset, display flags included
///
/// # Errors
///
/// Returns [`LauncherError::ZeroTileSize`] if the preset's tile size is zero.
pub fn build_invocation(preset: &Preset, cli: &Cli) -> Result<Vec<String>> {
    let mut tokens = preset.command_tokens(cli.width, cli.height)?;

    if cli.slow {
        tokens.push("--slow".to_string());
    }
    if cli.debug {
        tokens.push("--debug".to_string());
    }
    if cli.fullscreen {
        tokens.push("-f".to_string());
    }

    Ok(tokens)
}

/// Runs the demo presets in shuffled rounds until stopped
///
/// Each round shuffles the built-in preset list and invokes the external
/// tool once per preset, blocking on each invocation. SIGINT or SIGTERM
/// lets the in-flight invocation finish, then the loop exits cleanly.
pub struct Scheduler {
    cli: Cli,
    presets: Vec<Preset>,
    stop: Arc<AtomicBool>,
}

impl Scheduler {
    /// Create a scheduler for the built-in presets and register its
    /// stop-signal handlers
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::SignalHandler`] if a signal handler cannot
    /// be registered.
    pub fn new(cli: Cli) -> Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));

        for signal in [SIGINT, SIGTERM] {
            flag::register(signal, Arc::clone(&stop))
                .map_err(|source| LauncherError::SignalHandler { source })?;
        }

        Ok(Self {
            cli,
            presets: Preset::builtin(),
            stop,
        })
    }

    /// Run shuffled rounds of presets until a stop signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if a preset has a zero tile size or if the external
    /// tool cannot be spawned. Tool exit codes are not inspected.
    // The printed command line is the demo's only progress output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        while !self.stop.load(Ordering::Relaxed) {
            for preset in shuffle_round(&self.presets) {
                if self.stop.load(Ordering::Relaxed) {
                    return Ok(());
                }

                let tokens = build_invocation(&preset, &self.cli)?;
                println!("{}", tokens.join(" "));
                wait_for_tool(&tokens)?;
            }
        }

        Ok(())
    }
}

/// Spawn the tool and block until it exits, discarding its exit status
fn wait_for_tool(tokens: &[String]) -> Result<()> {
    let Some((program, args)) = tokens.split_first() else {
        return Ok(());
    };

    Command::new(program)
        .args(args)
        .status()
        .map_err(|source| LauncherError::Spawn {
            program: program.clone(),
            source,
        })?;

    Ok(())
}
