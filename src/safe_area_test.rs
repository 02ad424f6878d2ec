use super::*;

const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";
const MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko)";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Mobile";

// --- Platform detection ---

#[test]
fn detects_iphone() {
    assert!(is_apple_touch(IPHONE_UA, "iPhone", 5));
}

#[test]
fn detects_ipados_desktop_mode() {
    assert!(is_apple_touch(MAC_UA, "MacIntel", 5));
}

#[test]
fn rejects_desktop_mac() {
    assert!(!is_apple_touch(MAC_UA, "MacIntel", 0));
}

#[test]
fn rejects_android() {
    assert!(!is_apple_touch(ANDROID_UA, "Linux armv8l", 5));
}

// --- Height ---

#[test]
fn inset_height_uses_fallback() {
    assert_eq!(inset_height("44px"), "env(safe-area-inset-top, 44px)");
}

// --- Tracker ---

#[test]
fn tracker_starts_uncovered() {
    assert!(!CoverTracker::new(50.0).is_covered());
}

#[test]
fn tracker_reports_only_crossings() {
    let mut t = CoverTracker::new(50.0);
    assert_eq!(t.update(0.0), None);
    assert_eq!(t.update(50.0), None);
    assert_eq!(t.update(51.0), Some(true));
    assert_eq!(t.update(300.0), None);
    assert_eq!(t.update(10.0), Some(false));
    assert_eq!(t.update(0.0), None);
}

#[test]
fn tracker_initial_deep_scroll_covers() {
    let mut t = CoverTracker::new(50.0);
    assert_eq!(t.update(900.0), Some(true));
    assert!(t.is_covered());
}

// --- Created cover ---

fn style<'a>(styles: &'a [(&'static str, String)], property: &str) -> Option<&'a str> {
    styles.iter().find(|(p, _)| *p == property).map(|(_, v)| v.as_str())
}

#[test]
fn created_cover_is_opaque_and_stacked() {
    let styles = created_cover_styles(&SafeAreaConfig::default());
    assert_eq!(style(&styles, "position"), Some("fixed"));
    assert_eq!(style(&styles, "top"), Some("0"));
    assert_eq!(style(&styles, "background"), Some("inherit"));
    assert_eq!(style(&styles, "z-index"), Some("1000"));
}

#[test]
fn created_cover_uses_configured_background() {
    let config = SafeAreaConfig { background: "#101014".into(), ..SafeAreaConfig::default() };
    let styles = created_cover_styles(&config);
    assert_eq!(style(&styles, "background"), Some("#101014"));
}
