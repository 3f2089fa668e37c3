use std::time::Duration;

use lynx_watcher::config::WatchConfig;
use lynx_watcher::paths::{resolve_watch_patterns, theme_patterns, DEFAULT_PATTERNS};
use lynx_watcher::watch::WatchProfile;

fn config(path_override: Option<&str>, themes: &[&str]) -> WatchConfig {
    WatchConfig {
        path_override: path_override.map(String::from),
        cache_types: "block_html layout full_page".to_string(),
        themes: themes.iter().map(|t| t.to_string()).collect(),
        debounce: Duration::from_millis(300),
    }
}

#[test]
fn defaults_plus_detected_themes_when_no_overrides() {
    let detected = vec!["vendor/vaimo/base".to_string()];
    let patterns = resolve_watch_patterns(&config(None, &[]), &detected);

    assert_eq!(patterns.len(), DEFAULT_PATTERNS.len() + 4);
    assert_eq!(&patterns[..DEFAULT_PATTERNS.len()], DEFAULT_PATTERNS);
    assert_eq!(
        &patterns[DEFAULT_PATTERNS.len()..],
        &[
            "vendor/vaimo/base/**/*.js",
            "vendor/vaimo/base/**/*.phtml",
            "vendor/vaimo/base/**/*.xml",
            "vendor/vaimo/base/**/*.less",
        ]
    );
}

#[test]
fn path_override_replaces_the_entire_set() {
    let detected = vec!["vendor/vaimo/base".to_string()];
    let patterns = resolve_watch_patterns(
        &config(Some("foo/**/*.js"), &["vendor/custom/themeA"]),
        &detected,
    );

    assert_eq!(patterns, vec!["foo/**/*.js".to_string()]);
}

#[test]
fn detected_themes_come_before_explicit_themes() {
    let detected = vec!["vendor/vaimo/base".to_string()];
    let patterns = resolve_watch_patterns(
        &config(None, &["vendor/custom/themeA", "vendor/custom/themeB"]),
        &detected,
    );

    let tail = &patterns[DEFAULT_PATTERNS.len()..];
    assert_eq!(tail.len(), 12);
    assert!(tail[..4].iter().all(|p| p.starts_with("vendor/vaimo/base/")));
    assert!(tail[4..8]
        .iter()
        .all(|p| p.starts_with("vendor/custom/themeA/")));
    assert!(tail[8..]
        .iter()
        .all(|p| p.starts_with("vendor/custom/themeB/")));
}

#[test]
fn theme_patterns_cover_the_four_categories() {
    assert_eq!(
        theme_patterns("vendor/custom/themeA/"),
        vec![
            "vendor/custom/themeA/**/*.js",
            "vendor/custom/themeA/**/*.phtml",
            "vendor/custom/themeA/**/*.xml",
            "vendor/custom/themeA/**/*.less",
        ]
    );
}

#[test]
fn profile_matches_default_paths_and_skips_node_modules() {
    let patterns: Vec<String> = DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect();
    let profile = WatchProfile::compile(&patterns).unwrap();

    assert!(profile.matches("app/code/Foo/view.phtml"));
    assert!(profile.matches("app/design/frontend/Acme/default/web/css/styles.less"));
    assert!(profile.matches("vendor/magento/module-catalog/etc/di.xml"));

    assert!(!profile.matches("node_modules/leftpad/index.js"));
    assert!(!profile.matches("app/code/node_modules/leftpad/index.js"));
    assert!(!profile.matches("var/log/system.log"));
}

#[test]
fn invalid_glob_is_a_compile_error() {
    let patterns = vec!["app/code/[".to_string()];
    assert!(WatchProfile::compile(&patterns).is_err());
}
