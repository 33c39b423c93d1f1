//! Validates grid arithmetic, command construction, and preset shuffling

use clap::Parser;
use wfc_demo::LauncherError;
use wfc_demo::io::cli::Cli;
use wfc_demo::io::configuration::PRESETS;
use wfc_demo::launch::command::Preset;
use wfc_demo::launch::scheduler::{build_invocation, shuffle_round};

fn cli_from(args: &[&str]) -> Cli {
    Cli::parse_from(args)
}

// Tests the ceiling division bounds for every small width and tile size
// Verified by switching grid_size to truncating division
#[test]
fn test_grid_size_covers_requested_dimensions() {
    for tile_size in 1..=20_u32 {
        for width in 1..=100_i64 {
            let preset = Preset::new("sample.png", tile_size);
            let (cols, rows) = preset.grid_size(width, width).unwrap();
            let tile = i64::from(tile_size);

            assert!(cols * tile >= width, "grid narrower than request");
            assert!((cols - 1) * tile < width, "grid has a spare column");
            assert_eq!(rows, cols);
        }
    }
}

// Tests the documented circuit preset: 57x30 at tile size 14 is a 5x3 grid
// Verified by changing the expected token
#[test]
fn test_circuit_preset_size_token() {
    let preset = Preset::new("images/circuit-1-57x30.png", 14);

    let (cols, rows) = preset.grid_size(57, 30).unwrap();
    assert_eq!((cols, rows), (5, 3));

    let tokens = preset.command_tokens(57, 30).unwrap();
    assert!(tokens.contains(&"5x3".to_string()));
}

// Tests the full token ordering of a base invocation
// Verified by reordering the builder's pushes
#[test]
fn test_command_token_order() {
    let preset = Preset::new("images/circuit-1-57x30.png", 14);
    let tokens = preset.command_tokens(57, 30).unwrap();

    let expected = [
        "cargo",
        "run",
        "--release",
        "--",
        "-Vvv",
        "-i",
        "14",
        "images/circuit-1-57x30.png",
        "-o",
        "5x3",
        "--hold",
        "5",
    ];
    assert_eq!(tokens, expected);
}

// Tests that active display flags land at the tail in declaration order
// Verified by enabling the debug flag as well
#[test]
fn test_invocation_appends_active_flags() {
    let cli = cli_from(&["wfc-demo", "--slow", "--fullscreen", "-W", "57", "-H", "30"]);
    let preset = Preset::new("images/circuit-1-57x30.png", 14);

    let tokens = build_invocation(&preset, &cli).unwrap();
    let tail: Vec<&str> = tokens.iter().rev().take(4).rev().map(String::as_str).collect();

    assert_eq!(tail, ["--hold", "5", "--slow", "-f"]);
    assert!(!tokens.contains(&"--debug".to_string()));
}

// Tests that an unflagged invocation ends with the hold duration
// Verified by appending a flag unconditionally
#[test]
fn test_invocation_without_flags_ends_with_hold() {
    let cli = cli_from(&["wfc-demo", "-W", "57", "-H", "30"]);
    let preset = Preset::new("images/circuit-1-57x30.png", 14);

    let tokens = build_invocation(&preset, &cli).unwrap();
    let tail: Vec<&str> = tokens.iter().rev().take(2).rev().map(String::as_str).collect();

    assert_eq!(tail, ["--hold", "5"]);
}

// Tests that a zero tile size fails before any invocation is assembled
// Verified by removing the guard in grid_size
#[test]
fn test_zero_tile_size_is_fatal() {
    let cli = cli_from(&["wfc-demo", "-W", "57", "-H", "30"]);
    let preset = Preset::new("broken.png", 0);

    let err = build_invocation(&preset, &cli).unwrap_err();
    assert!(matches!(err, LauncherError::ZeroTileSize { .. }));
}

// Tests that shuffling yields a permutation of the original list
// Verified by making shuffle_round drop an element
#[test]
fn test_shuffle_round_is_a_permutation() {
    let presets: Vec<Preset> = (1..=8_u32)
        .map(|size| Preset::new(format!("image-{size}.png"), size))
        .collect();

    for _ in 0..20 {
        let mut round = shuffle_round(&presets);
        assert_eq!(round.len(), presets.len());

        round.sort_by_key(|preset| preset.tile_size);
        assert_eq!(round, presets);
    }
}

// Tests that the built-in presets mirror the configuration table
// Verified by editing the PRESETS table
#[test]
fn test_builtin_presets_match_table() {
    let presets = Preset::builtin();
    assert_eq!(presets.len(), PRESETS.len());

    for (preset, (image, size)) in presets.iter().zip(PRESETS) {
        assert_eq!(preset.image_path.to_str(), Some(*image));
        assert_eq!(preset.tile_size, *size);
    }
}
