//! Tests for host services.

use super::*;
use folio_types::config::TerminalConfig;
use folio_types::error::FolioError;

// -- Clock --

#[test]
fn desktop_clock_now_is_plausible() {
    let t = DesktopClock::new().now().unwrap();
    assert!(t.year >= 2024);
    assert!((1..=12).contains(&t.month));
    assert!((1..=31).contains(&t.day));
    assert!(t.hour < 24);
}

#[test]
fn local_time_formats() {
    let t = LocalTime {
        year: 2026,
        month: 2,
        day: 7,
        hour: 9,
        minute: 5,
        second: 3,
    };
    assert_eq!(t.date_string(), "2026-02-07");
    assert_eq!(t.time_string(), "09:05:03");
    assert_eq!(t.to_string(), "2026-02-07 09:05:03");
}

#[test]
fn breakdown_epoch() {
    let t = DesktopClock::breakdown(0);
    assert_eq!(t.to_string(), "1970-01-01 00:00:00");
}

#[test]
fn breakdown_leap_day() {
    // 2024-02-29 12:00:00 UTC
    let t = DesktopClock::breakdown(1_709_208_000);
    assert_eq!(t.date_string(), "2024-02-29");
    assert_eq!(t.time_string(), "12:00:00");
}

#[test]
fn breakdown_negative_clamps_to_epoch() {
    assert_eq!(DesktopClock::breakdown(-50).year, 1970);
}

#[test]
fn days_to_ymd_end_of_year() {
    // 1970 has 365 days; day 364 is Dec 31.
    assert_eq!(services::days_to_ymd(364), (1970, 12, 31));
    assert_eq!(services::days_to_ymd(365), (1971, 1, 1));
}

#[test]
fn leap_rules() {
    assert!(services::is_leap(2000));
    assert!(services::is_leap(2024));
    assert!(!services::is_leap(1900));
    assert!(!services::is_leap(2023));
}

// -- MemoryPage --

#[test]
fn missing_element_is_error() {
    let mut page = MemoryPage::new();
    match page.scroll_to("about") {
        Err(FolioError::MissingElement(id)) => assert_eq!(id, "about"),
        other => panic!("expected MissingElement, got {other:?}"),
    }
    assert!(page.effects().is_empty());
}

#[test]
fn display_state_starts_unset() {
    let mut page = MemoryPage::with_elements(["sidebar"]);
    assert_eq!(page.display_state("sidebar").unwrap(), None);
    page.set_display("sidebar", true).unwrap();
    assert_eq!(page.display_state("sidebar").unwrap(), Some(true));
}

#[test]
fn text_set_and_append() {
    let mut page = MemoryPage::with_elements(["header"]);
    page.set_text("header", "Hel").unwrap();
    page.append_text("header", "lo").unwrap();
    assert_eq!(page.text("header").unwrap(), "Hello");
    assert_eq!(
        page.effects().last(),
        Some(&PageEffect::Text {
            id: "header".into(),
            text: "Hello".into()
        })
    );
}

#[test]
fn effects_are_logged_in_order() {
    let mut page = MemoryPage::with_elements(["a", "b"]);
    page.scroll_to("a").unwrap();
    page.scroll_to_top().unwrap();
    page.focus("b").unwrap();
    let effects = page.take_effects();
    assert_eq!(
        effects,
        vec![
            PageEffect::ScrollTo("a".into()),
            PageEffect::ScrollTop,
            PageEffect::Focus("b".into()),
        ]
    );
    assert!(page.effects().is_empty());
}

#[test]
fn theme_tracks_last_value() {
    let mut page = MemoryPage::new();
    page.set_theme(Some("light")).unwrap();
    assert_eq!(page.theme(), Some("light"));
    page.set_theme(None).unwrap();
    assert_eq!(page.theme(), None);
}

#[test]
fn page_from_config_has_all_targets() {
    let config = TerminalConfig::default();
    let page = MemoryPage::from_config(&config);
    assert!(page.has_element("terminal-content"));
    assert!(page.has_element("terminal-input"));
    assert!(page.has_element("sidebar"));
    assert!(page.has_element("header-text"));
    assert!(page.has_element("projects"));
    assert!(page.has_element("about"));
}

#[test]
fn removed_element_disappears() {
    let mut page = MemoryPage::with_elements(["x"]);
    page.remove_element("x");
    assert!(!page.has_element("x"));
    assert!(page.text("x").is_err());
}

// -- Preferences --

#[test]
fn memory_preferences_roundtrip() {
    let mut prefs = MemoryPreferences::new();
    assert_eq!(prefs.get("websiteTheme").unwrap(), None);
    prefs.set("websiteTheme", "light").unwrap();
    assert_eq!(prefs.get("websiteTheme").unwrap().as_deref(), Some("light"));
}

#[test]
fn file_preferences_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");
    {
        let mut prefs = FilePreferences::open(&path).unwrap();
        prefs.set("websiteTheme", "yildiz").unwrap();
    }
    let prefs = FilePreferences::open(&path).unwrap();
    assert_eq!(prefs.get("websiteTheme").unwrap().as_deref(), Some("yildiz"));
    assert_eq!(prefs.path(), path.as_path());
}

#[test]
fn file_preferences_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = FilePreferences::open(dir.path().join("absent.json")).unwrap();
    assert_eq!(prefs.get("anything").unwrap(), None);
}

#[test]
fn file_preferences_corrupt_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = FilePreferences::open(&path).unwrap_err();
    assert!(matches!(err, FolioError::Json(_)));
}

// -- Services bundle --

#[test]
fn services_bundle_borrows_everything() {
    let mut page = MemoryPage::with_elements(["out"]);
    let mut prefs = MemoryPreferences::new();
    let clock = DesktopClock::new();
    let mut services = Services::new(&mut page, &mut prefs, Some(&clock));
    assert!(services.time.is_some());
    services.page.scroll_to_end("out").unwrap();
    services.prefs.set("k", "v").unwrap();
    assert_eq!(page.effects(), &[PageEffect::ScrollEnd("out".into())]);
}
