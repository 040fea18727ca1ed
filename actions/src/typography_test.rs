#![allow(clippy::float_cmp)]

use scene::doc::{Drawable, ElementKind};
use scene::text::TextMetrics;

use super::*;
use crate::action::DynAction;
use crate::labels::EnglishLabels;

struct FixedMetrics;

impl MeasureText for FixedMetrics {
    fn measure(&self, _text: &str, font: &Font) -> TextMetrics {
        TextMetrics { width: font.size * 10.0, height: font.size, baseline: font.size / 2.0 }
    }
}

fn text(font: &str, selected: bool) -> Arc<Element> {
    let app_state = AppState { current_item_font: font.parse().unwrap(), ..AppState::default() };
    let mut el = Element::new_text("hello", 0.0, 0.0, &app_state, &ApproximateMetrics);
    el.shape = Some(Drawable { path: "M0 0".to_owned() });
    el.is_selected = selected;
    Arc::new(el)
}

fn rectangle(selected: bool) -> Arc<Element> {
    let mut el = Element::new(ElementKind::Rectangle, 0.0, 0.0, 10.0, 10.0, &AppState::default());
    el.is_selected = selected;
    Arc::new(el)
}

fn font_of(el: &Element) -> String {
    el.text_props().unwrap().font.to_string()
}

fn selected_value(panel: &Panel) -> Option<Value> {
    match &panel.rows[0][0] {
        Control::ButtonSelect { selected, .. } => selected.clone(),
        other => panic!("unexpected control {other:?}"),
    }
}

// =============================================================
// Font size
// =============================================================

#[test]
fn size_change_keeps_family() {
    let elements = vec![text("20px Virgil", true)];
    let next = ChangeFontSize::default()
        .perform(&elements, &AppState::default(), 28.0)
        .elements
        .unwrap();
    assert_eq!(font_of(&next[0]), "28px Virgil");
}

#[test]
fn size_change_remeasures_and_clears_shape() {
    let elements = vec![text("20px Virgil", true)];
    let next = ChangeFontSize::default()
        .perform(&elements, &AppState::default(), 28.0)
        .elements
        .unwrap();
    let expected = ApproximateMetrics.measure("hello", &Font::new(28.0, "Virgil"));
    assert_eq!(next[0].width, expected.width);
    assert_eq!(next[0].height, expected.height);
    assert_eq!(next[0].text_props().unwrap().baseline, expected.baseline);
    assert!(next[0].shape.is_none());
}

#[test]
fn size_change_uses_injected_measurer() {
    let elements = vec![text("20px Virgil", true)];
    let next = ChangeFontSize::new(Arc::new(FixedMetrics))
        .perform(&elements, &AppState::default(), 36.0)
        .elements
        .unwrap();
    assert_eq!(next[0].width, 360.0);
    assert_eq!(next[0].height, 36.0);
}

#[test]
fn non_text_elements_pass_through() {
    let elements = vec![rectangle(true), text("20px Virgil", false)];
    let next = ChangeFontSize::default()
        .perform(&elements, &AppState::default(), 28.0)
        .elements
        .unwrap();
    assert!(Arc::ptr_eq(&next[0], &elements[0]));
    assert!(Arc::ptr_eq(&next[1], &elements[1]));
}

#[test]
fn size_panel_shows_shared_size() {
    let elements = vec![text("28px Virgil", true), text("28px Cascadia", true)];
    let panel = ChangeFontSize::default().panel(&elements, &AppState::default(), &EnglishLabels);
    assert_eq!(panel.heading, "Font size");
    assert_eq!(selected_value(&panel), Some(Value::from(28.0)));
    assert_eq!(panel.rows[0][0].selected_index(), Some(2));
}

#[test]
fn size_panel_is_indeterminate_for_mixed_selection() {
    let elements = vec![text("28px Virgil", true), rectangle(true)];
    let panel = ChangeFontSize::default().panel(&elements, &AppState::default(), &EnglishLabels);
    assert_eq!(selected_value(&panel), None);
}

// =============================================================
// Font family
// =============================================================

#[test]
fn family_change_keeps_size() {
    let elements = vec![text("20px Virgil", true)];
    let next = ChangeFontFamily::default()
        .perform(&elements, &AppState::default(), "Helvetica".to_owned())
        .elements
        .unwrap();
    assert_eq!(font_of(&next[0]), "20px Helvetica");
    assert!(next[0].shape.is_none());
}

#[test]
fn family_panel_prefers_editing_element() {
    let editing = text("20px Cascadia", false);
    let elements = vec![text("20px Virgil", true)];
    let app_state = AppState { editing_element: Some(editing), ..AppState::default() };
    let panel = ChangeFontFamily::default().panel(&elements, &app_state, &EnglishLabels);
    assert_eq!(panel.heading, "Font family");
    assert_eq!(selected_value(&panel), Some(Value::from("Cascadia")));
}

#[test]
fn family_panel_without_selection_is_indeterminate() {
    let panel = ChangeFontFamily::default().panel(&[], &AppState::default(), &EnglishLabels);
    assert_eq!(selected_value(&panel), None);
    let Control::ButtonSelect { options, .. } = &panel.rows[0][0] else {
        panic!("expected button select");
    };
    let texts: Vec<_> = options.iter().map(|o| o.text.as_str()).collect();
    assert_eq!(texts, ["Hand-drawn", "Normal", "Code"]);
}

// =============================================================
// Saved scenes stay loadable
// =============================================================

fn reloaded(el: &Element) -> Element {
    let saved = serde_json::to_string(el).unwrap();
    serde_json::from_str(&saved).unwrap()
}

#[test]
fn unusable_size_keeps_current_size_and_reloads() {
    let elements = vec![text("20px Virgil", true)];
    for size in [-5.0, f64::NAN, f64::INFINITY] {
        let next = ChangeFontSize::default()
            .perform(&elements, &AppState::default(), size)
            .elements
            .unwrap();
        assert_eq!(font_of(&next[0]), "20px Virgil");
        assert!(next[0].width >= 0.0);
        assert_eq!(font_of(&reloaded(&next[0])), "20px Virgil");
    }
}

#[test]
fn negative_size_through_json_reloads() {
    let elements = vec![text("20px Virgil", true)];
    let next = ChangeFontSize::default()
        .perform_json(&elements, &AppState::default(), serde_json::json!(-5))
        .unwrap()
        .elements
        .unwrap();
    assert_eq!(font_of(&reloaded(&next[0])), "20px Virgil");
}

#[test]
fn blank_family_keeps_current_family_and_reloads() {
    let elements = vec![text("28px Cascadia", true)];
    for family in ["", "  "] {
        let next = ChangeFontFamily::default()
            .perform(&elements, &AppState::default(), family.to_owned())
            .elements
            .unwrap();
        assert_eq!(font_of(&next[0]), "28px Cascadia");
        assert_eq!(font_of(&reloaded(&next[0])), "28px Cascadia");
    }
}
