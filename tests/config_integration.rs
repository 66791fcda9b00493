use std::path::PathBuf;

use pixelpad::config::{
    ConfigFlags, ModeArg, clear_config_flags, load_config_flags, parse_flag_tokens,
    save_config_flags,
};
use pixelpad::editor::{EditorOptions, OptionsError, Palette};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".pixelpadrc");
    let content = r"
# comment
--no-mouse

--mode flood

--event-log=events.log
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_mouse);
    assert_eq!(flags.mode, Some(ModeArg::Flood));
    assert_eq!(flags.event_log, Some(PathBuf::from("events.log")));
    assert_eq!(flags.size, None);
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".pixelpadrc");
    let content = "--no-mouse\n--size 12 --mode flood\n--palette #000,#fff\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "pixelpad".to_string(),
        "--mode".to_string(),
        "single".to_string(),
        "--perf".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_mouse, "file flags should remain enabled");
    assert!(effective.perf, "cli flags should be applied");
    assert_eq!(effective.mode, Some(ModeArg::Single), "cli should override mode");
    assert_eq!(
        effective.size,
        Some(12),
        "file config should be preserved when CLI does not override"
    );
    assert_eq!(effective.palette.as_deref(), Some("#000,#fff"));
}

#[test]
fn test_local_file_overrides_global_file() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".pixelpadrc");
    std::fs::write(&global, "--size 8\n--mode flood\n").unwrap();
    std::fs::write(&local, "--size 32\n").unwrap();

    let effective = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(effective.size, Some(32));
    assert_eq!(effective.mode, Some(ModeArg::Flood));
}

#[test]
fn test_missing_config_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("absent")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}

#[test]
fn test_saved_cli_flags_reload_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pixelpad").join("config");
    let cli_args = ["pixelpad", "--size=16", "--palette", "#123456,#abcdef", "--save"]
        .map(String::from);
    let flags = parse_flag_tokens(&cli_args);

    save_config_flags(&path, &flags).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# pixelpad defaults"));
    assert!(!content.contains("--save"));
    assert_eq!(load_config_flags(&path).unwrap(), flags);

    clear_config_flags(&path).unwrap();
    assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
    // Clearing twice is fine.
    clear_config_flags(&path).unwrap();
}

#[test]
fn test_oversized_size_in_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".pixelpadrc");
    std::fs::write(&path, "--size 4294967296\n--mode flood\n").unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.size, None, "sizes outside u16 are dropped like on the CLI");
    assert_eq!(flags.mode, Some(ModeArg::Flood));

    std::fs::write(&path, "--size 65535\n").unwrap();
    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.size, Some(65535));
    let err = EditorOptions::new(65535, Palette::default()).unwrap_err();
    assert_eq!(err, OptionsError::TooLarge(65535));
}
