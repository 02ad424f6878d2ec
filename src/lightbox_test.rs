use super::*;

fn gallery(names: &[&str]) -> LightboxState {
    let items = names
        .iter()
        .map(|n| ImageDescriptor::new(format!("{n}.jpg"), format!("photo {n}")))
        .collect();
    LightboxState::new(items, CounterFormat::Plain)
}

fn shown(action: &LightboxAction) -> Option<&LightboxView> {
    match action {
        LightboxAction::Show(view) | LightboxAction::Render(view) => Some(view),
        LightboxAction::None | LightboxAction::Hide => None,
    }
}

// =============================================================
// ImageDescriptor
// =============================================================

#[test]
fn resolve_prefers_full_source() {
    let d = ImageDescriptor::resolve(Some("big.jpg".into()), "thumb.jpg".into(), "alt".into());
    assert_eq!(d.source, "big.jpg");
    assert_eq!(d.alt_text, "alt");
}

#[test]
fn resolve_falls_back_to_current_source() {
    let d = ImageDescriptor::resolve(None, "thumb.jpg".into(), String::new());
    assert_eq!(d.source, "thumb.jpg");
}

#[test]
fn resolve_ignores_empty_full_source() {
    let d = ImageDescriptor::resolve(Some(String::new()), "thumb.jpg".into(), String::new());
    assert_eq!(d.source, "thumb.jpg");
}

// =============================================================
// Counter formatting
// =============================================================

#[test]
fn plain_counter() {
    assert_eq!(CounterFormat::Plain.format(1, 3), "1 / 3");
    assert_eq!(CounterFormat::Plain.format(12, 40), "12 / 40");
}

#[test]
fn padded_counter() {
    assert_eq!(CounterFormat::Padded.format(1, 3), "01 / 03");
    assert_eq!(CounterFormat::Padded.format(10, 120), "10 / 120");
}

// =============================================================
// Keys
// =============================================================

#[test]
fn key_mapping() {
    assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Escape));
    assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::ArrowLeft));
    assert_eq!(LightboxKey::from_key("ArrowRight"), Some(LightboxKey::ArrowRight));
    assert_eq!(LightboxKey::from_key("Enter"), None);
    assert_eq!(LightboxKey::from_key("escape"), None);
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn starts_closed_at_zero() {
    let lb = gallery(&["a", "b"]);
    assert!(!lb.is_open());
    assert_eq!(lb.cursor(), 0);
    assert_eq!(lb.len(), 2);
}

#[test]
fn open_shows_item_at_index() {
    let mut lb = gallery(&["a", "b", "c"]);
    for i in 0..3 {
        let action = lb.open(i);
        assert!(matches!(action, LightboxAction::Show(_)));
        let view = shown(&action).unwrap();
        assert_eq!(view.source, lb.items()[i].source);
        assert_eq!(view.alt_text, lb.items()[i].alt_text);
        assert!(lb.is_open());
        assert_eq!(lb.cursor(), i);
    }
}

#[test]
fn open_while_open_jumps_cursor() {
    let mut lb = gallery(&["a", "b", "c"]);
    lb.open(0);
    let action = lb.open(2);
    assert_eq!(shown(&action).unwrap().source, "c.jpg");
    assert!(lb.is_open());
}

#[test]
fn open_out_of_range_is_noop() {
    let mut lb = gallery(&["a", "b"]);
    lb.open(1);
    assert_eq!(lb.open(5), LightboxAction::None);
    assert_eq!(lb.cursor(), 1);
}

#[test]
fn close_hides() {
    let mut lb = gallery(&["a"]);
    lb.open(0);
    assert_eq!(lb.close(), LightboxAction::Hide);
    assert!(!lb.is_open());
}

#[test]
fn close_is_idempotent() {
    let mut lb = gallery(&["a", "b"]);
    lb.open(1);
    lb.close();
    let cursor = lb.cursor();
    assert_eq!(lb.close(), LightboxAction::None);
    assert!(!lb.is_open());
    assert_eq!(lb.cursor(), cursor);
}

#[test]
fn close_when_never_opened_is_noop() {
    let mut lb = gallery(&["a"]);
    assert_eq!(lb.close(), LightboxAction::None);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn three_image_walkthrough_wraps() {
    let mut lb = gallery(&["A", "B", "C"]);

    let v = lb.open(0);
    assert_eq!(shown(&v).unwrap().source, "A.jpg");
    assert_eq!(shown(&v).unwrap().counter, "1 / 3");

    let v = lb.next();
    assert_eq!(shown(&v).unwrap().source, "B.jpg");
    assert_eq!(shown(&v).unwrap().counter, "2 / 3");

    let v = lb.next();
    assert_eq!(shown(&v).unwrap().source, "C.jpg");
    assert_eq!(shown(&v).unwrap().counter, "3 / 3");

    let v = lb.next();
    assert_eq!(shown(&v).unwrap().source, "A.jpg");
    assert_eq!(shown(&v).unwrap().counter, "1 / 3");
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut lb = gallery(&["A", "B", "C"]);
    lb.open(0);
    let v = lb.previous();
    assert_eq!(shown(&v).unwrap().source, "C.jpg");
    assert_eq!(lb.cursor(), 2);
}

#[test]
fn navigation_renders_without_changing_visibility() {
    let mut lb = gallery(&["A", "B"]);
    lb.open(0);
    assert!(matches!(lb.next(), LightboxAction::Render(_)));
    assert!(matches!(lb.previous(), LightboxAction::Render(_)));
    assert!(lb.is_open());
}

#[test]
fn next_len_times_is_identity() {
    for len in 1..=6 {
        let names: Vec<String> = (0..len).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        for start in 0..len {
            let mut lb = gallery(&refs);
            lb.open(start);
            for _ in 0..len {
                lb.next();
            }
            assert_eq!(lb.cursor(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn previous_inverts_next() {
    for len in 1..=5 {
        let names: Vec<String> = (0..len).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        for start in 0..len {
            let mut lb = gallery(&refs);
            lb.open(start);
            lb.next();
            lb.previous();
            assert_eq!(lb.cursor(), start);
            lb.previous();
            lb.next();
            assert_eq!(lb.cursor(), start);
        }
    }
}

#[test]
fn single_image_navigation_stays_put() {
    let mut lb = gallery(&["only"]);
    lb.open(0);
    lb.next();
    assert_eq!(lb.cursor(), 0);
    lb.previous();
    assert_eq!(lb.cursor(), 0);
}

// =============================================================
// Empty gallery
// =============================================================

#[test]
fn empty_gallery_transitions_are_noops() {
    let mut lb = gallery(&[]);
    assert!(lb.is_empty());
    assert_eq!(lb.open(0), LightboxAction::None);
    assert_eq!(lb.next(), LightboxAction::None);
    assert_eq!(lb.previous(), LightboxAction::None);
    assert_eq!(lb.handle_key(LightboxKey::ArrowRight), LightboxAction::None);
    assert!(!lb.is_open());
    assert_eq!(lb.cursor(), 0);
    assert_eq!(lb.view(), None);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn keys_ignored_while_closed() {
    let mut lb = gallery(&["A", "B", "C"]);
    assert_eq!(lb.handle_key(LightboxKey::ArrowRight), LightboxAction::None);
    assert_eq!(lb.handle_key(LightboxKey::ArrowLeft), LightboxAction::None);
    assert_eq!(lb.handle_key(LightboxKey::Escape), LightboxAction::None);
    assert_eq!(lb.cursor(), 0);
}

#[test]
fn keys_navigate_and_close_while_open() {
    let mut lb = gallery(&["A", "B", "C"]);
    lb.open(1);
    lb.handle_key(LightboxKey::ArrowRight);
    assert_eq!(lb.cursor(), 2);
    lb.handle_key(LightboxKey::ArrowLeft);
    lb.handle_key(LightboxKey::ArrowLeft);
    assert_eq!(lb.cursor(), 0);
    assert_eq!(lb.handle_key(LightboxKey::Escape), LightboxAction::Hide);
    assert!(!lb.is_open());
}

#[test]
fn padded_format_flows_into_view() {
    let mut lb = LightboxState::new(
        vec![ImageDescriptor::new("a.jpg", ""), ImageDescriptor::new("b.jpg", "")],
        CounterFormat::Padded,
    );
    let v = lb.open(1);
    assert_eq!(shown(&v).unwrap().counter, "02 / 02");
}
