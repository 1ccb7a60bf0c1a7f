mod common;
use common::temp_config;
use packmybag::config::Config;
use std::fs;
use std::path::Path;

#[test]
fn test_partial_yaml_uses_defaults() {
    let cfg = Config::from_yaml("show_icons: false\nprogress_bar_width: 10\n").unwrap();
    assert!(!cfg.show_icons);
    assert_eq!(cfg.progress_bar_width, 10);
    assert!(cfg.show_essential_badge);
    assert_eq!(cfg.separator_char, "-");
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(Config::from_yaml("show_icons: [not, a, bool]").is_err());
}

#[test]
fn test_missing_file_loads_defaults() {
    let path = temp_config("missing_file");
    assert_eq!(Config::load_from(Path::new(&path)).unwrap(), Config::default());
}

#[test]
fn test_init_writes_once_unless_forced() {
    let path = temp_config("init_once");
    let path = Path::new(&path);

    assert!(Config::init_at(path, false).unwrap());
    assert!(!Config::init_at(path, false).unwrap());

    fs::write(path, "show_icons: false\n").unwrap();
    assert!(!Config::load_from(path).unwrap().show_icons);

    assert!(Config::init_at(path, true).unwrap());
    assert_eq!(Config::load_from(path).unwrap(), Config::default());

    fs::remove_file(path).ok();
}
