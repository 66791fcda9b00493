//! Pixelpad - A terminal pixel-art editor.
//!
//! # Usage
//!
//! ```bash
//! pixelpad
//! pixelpad --size 16 --mode flood
//! pixelpad --palette "#000,#fff,#f00" --save
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pixelpad::app::App;
use pixelpad::config::{
    ConfigFlags, ModeArg, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use pixelpad::editor::{DEFAULT_INITIAL_SIZE, EditorOptions, PaintMode, Palette};
use pixelpad::perf;

/// A terminal pixel-art editor
#[derive(Parser, Debug)]
#[command(name = "pixelpad", version, about, long_about = None)]
struct Cli {
    /// Starting (and clear-to) canvas side length, at most 1024
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    size: Option<u16>,

    /// Comma-separated palette, e.g. "#ffffff,#ff0000,#000000"; the first
    /// color is the canvas background
    #[arg(long, value_name = "COLORS")]
    palette: Option<String>,

    /// Paint mode to start in
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Keyboard only; do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Print startup and frame timing
    #[arg(long)]
    perf: bool,

    /// Write dispatched messages and frame timings to a file
    #[arg(long, value_name = "PATH")]
    event_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn editor_options(flags: &ConfigFlags) -> Result<EditorOptions> {
    let palette = match flags.palette.as_deref() {
        Some(list) => Palette::parse_list(list).context("Invalid --palette")?,
        None => Palette::default(),
    };
    let size = flags.size.unwrap_or(DEFAULT_INITIAL_SIZE);
    EditorOptions::new(size, palette).context("Invalid --size")
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
        eprintln!("Saved defaults to {}", global_path.display());
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "effective flags");

    perf::set_enabled(effective.perf);
    let event_log_path = effective
        .event_log
        .clone()
        .or_else(|| std::env::var_os("PIXELPAD_EVENT_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_event_log_path(event_log_path.as_deref()) {
        tracing::warn!(
            path = ?event_log_path,
            %err,
            "failed to open event log"
        );
    }

    let options = editor_options(&effective)?;
    let mode = effective.mode.map_or(PaintMode::Single, PaintMode::from);

    let mut app = App::new(options)
        .with_paint_mode(mode)
        .with_mouse(!effective.no_mouse);

    app.run().context("Application error")
}
