//! Saved defaults for command-line flags.
//!
//! Defaults live in a plain text file holding the same tokens as the
//! command line (`--size 16`, `--mode=flood`, ...), one or more per line,
//! with `#` comments. A global file is overridden by a local `.pixelpadrc`,
//! and both are overridden by the actual command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::PaintMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Single,
    Flood,
}

impl From<ModeArg> for PaintMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => Self::Single,
            ModeArg::Flood => Self::Flood,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub size: Option<usize>,
    pub palette: Option<String>,
    pub mode: Option<ModeArg>,
    pub no_mouse: bool,
    pub perf: bool,
    pub event_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: options from `other` win, booleans OR.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            size: other.size.or(self.size),
            palette: other.palette.clone().or_else(|| self.palette.clone()),
            mode: other.mode.or(self.mode),
            no_mouse: self.no_mouse || other.no_mouse,
            perf: self.perf || other.perf,
            event_log: other.event_log.clone().or_else(|| self.event_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("pixelpad").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("pixelpad")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("pixelpad").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("pixelpad")
                .join("config");
        }
    }

    PathBuf::from(".pixelpadrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".pixelpadrc")
}

/// Load flags from a config file. A missing file yields empty flags.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    let flags = parse_flag_tokens(&tokens);
    tracing::debug!(path = %path.display(), ?flags, "loaded config");
    Ok(flags)
}

/// # Errors
/// Returns an error if the config directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# pixelpad defaults (saved with --save)".to_string());
    if let Some(size) = flags.size {
        lines.push(format!("--size {size}"));
    }
    if let Some(palette) = &flags.palette {
        lines.push(format!("--palette {palette}"));
    }
    if let Some(mode) = flags.mode {
        let mode_str = match mode {
            ModeArg::Single => "single",
            ModeArg::Flood => "flood",
        };
        lines.push(format!("--mode {mode_str}"));
    }
    if flags.no_mouse {
        lines.push("--no-mouse".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.event_log {
        lines.push(format!("--event-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// # Errors
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of a token list, ignoring everything else.
///
/// Palette lists must not contain spaces (`#fff,#000`, not `#fff, #000`).
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        let takes_value = matches!(name, "--size" | "--palette" | "--mode" | "--event-log");
        let value = if takes_value && inline.is_none() {
            i += 1;
            tokens.get(i).map(String::as_str)
        } else {
            inline
        };

        match (name, value) {
            ("--size", Some(v)) => {
                flags.size = v
                    .parse::<u16>()
                    .ok()
                    .filter(|n| *n > 0)
                    .map(usize::from);
            }
            ("--palette", Some(v)) => flags.palette = Some(v.to_string()),
            ("--mode", Some(v)) => flags.mode = parse_mode(v),
            ("--event-log", Some(v)) => flags.event_log = Some(PathBuf::from(v)),
            ("--no-mouse", None) => flags.no_mouse = true,
            ("--perf", None) => flags.perf = true,
            _ => {}
        }
        i += 1;
    }
    flags
}

fn parse_mode(s: &str) -> Option<ModeArg> {
    match s {
        "single" => Some(ModeArg::Single),
        "flood" => Some(ModeArg::Flood),
        _ => None,
    }
}
