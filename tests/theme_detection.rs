use std::fs;
use std::path::Path;

use lynx_watcher::themes::detect_themes;

#[test]
fn lists_subdirectories_joined_with_base() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir(base.path().join("theme-alpha")).unwrap();
    fs::create_dir(base.path().join("theme-beta")).unwrap();
    fs::write(base.path().join("README.md"), "not a theme").unwrap();

    let mut themes = detect_themes(base.path());
    themes.sort();

    let expected_prefix = base.path().to_string_lossy().replace('\\', "/");
    assert_eq!(themes.len(), 2);
    assert_eq!(themes[0], format!("{expected_prefix}/theme-alpha"));
    assert_eq!(themes[1], format!("{expected_prefix}/theme-beta"));
}

#[test]
fn empty_base_yields_empty_list() {
    let base = tempfile::tempdir().unwrap();
    assert!(detect_themes(base.path()).is_empty());
}

#[test]
fn missing_base_yields_empty_list_without_panicking() {
    let themes = detect_themes(Path::new("does/not/exist/vendor/vaimo"));
    assert!(themes.is_empty());
}
