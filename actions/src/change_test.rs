use scene::doc::{ElementKind, TextProps};

use super::*;

fn element(stroke: &str, selected: bool) -> Arc<Element> {
    let mut el = Element::new(ElementKind::Rectangle, 0.0, 0.0, 10.0, 10.0, &AppState::default());
    el.stroke_color = stroke.to_owned();
    el.is_selected = selected;
    Arc::new(el)
}

fn stroke(el: &Element) -> Option<String> {
    Some(el.stroke_color.clone())
}

// =============================================================
// change_property
// =============================================================

#[test]
fn change_property_edits_only_selected() {
    let elements = vec![element("#000", true), element("#000", false)];
    let next = change_property(&elements, |el| el.edited(|e| e.stroke_color = "#fff".to_owned()));
    assert_eq!(next[0].stroke_color, "#fff");
    assert_eq!(next[1].stroke_color, "#000");
}

#[test]
fn change_property_passes_unselected_through_by_identity() {
    let elements = vec![element("#000", false), element("#000", true), element("#000", false)];
    let next = change_property(&elements, |el| el.edited(|_| {}));
    assert!(Arc::ptr_eq(&next[0], &elements[0]));
    assert!(!Arc::ptr_eq(&next[1], &elements[1]));
    assert!(Arc::ptr_eq(&next[2], &elements[2]));
}

#[test]
fn change_property_preserves_length_and_order() {
    let elements = vec![element("#1", true), element("#2", false), element("#3", true)];
    let next = change_property(&elements, |el| el.edited(|_| {}));
    let ids: Vec<_> = next.iter().map(|el| el.id).collect();
    let expected: Vec<_> = elements.iter().map(|el| el.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn change_property_with_empty_selection_is_identity() {
    let elements = vec![element("#000", false), element("#111", false)];
    let next = change_property(&elements, |el| el.edited(|e| e.stroke_color = "#fff".to_owned()));
    assert!(next.iter().zip(&elements).all(|(a, b)| Arc::ptr_eq(a, b)));
}

#[test]
fn change_property_on_empty_collection() {
    let next = change_property(&[], |el| Arc::clone(el));
    assert!(next.is_empty());
}

// =============================================================
// common_attribute
// =============================================================

#[test]
fn common_attribute_returns_unanimous_value() {
    let elements = vec![element("#fff", true), element("#fff", true)];
    assert_eq!(common_attribute(&elements, stroke), Some("#fff".to_owned()));
}

#[test]
fn common_attribute_is_none_when_values_differ() {
    let elements = vec![element("#fff", true), element("#000", true)];
    assert_eq!(common_attribute(&elements, stroke), None);
}

#[test]
fn common_attribute_ignores_unselected() {
    let elements = vec![element("#fff", true), element("#000", false)];
    assert_eq!(common_attribute(&elements, stroke), Some("#fff".to_owned()));
}

#[test]
fn common_attribute_is_none_without_selection() {
    let elements = vec![element("#fff", false)];
    assert_eq!(common_attribute(&elements, stroke), None);
}

#[test]
fn common_attribute_is_none_when_attribute_missing_on_some() {
    let mut text = Element::new(
        ElementKind::Text(TextProps { text: "a".to_owned(), font: "20px Virgil".parse().unwrap(), baseline: 0.0 }),
        0.0,
        0.0,
        1.0,
        1.0,
        &AppState::default(),
    );
    text.is_selected = true;
    let elements = vec![Arc::new(text), element("#000", true)];
    let size = |el: &Element| el.text_props().map(|p| p.font.size);
    assert_eq!(common_attribute(&elements, size), None);
}

// =============================================================
// form_value
// =============================================================

#[test]
fn form_value_prefers_editing_element() {
    let elements = vec![element("#fff", true), element("#fff", true)];
    let app_state = AppState { editing_element: Some(element("#123456", false)), ..AppState::default() };
    assert_eq!(form_value(&app_state, &elements, stroke, None), Some("#123456".to_owned()));
}

#[test]
fn form_value_falls_back_to_selection() {
    let elements = vec![element("#fff", true), element("#fff", true)];
    let value = form_value(&AppState::default(), &elements, stroke, Some("#default".to_owned()));
    assert_eq!(value, Some("#fff".to_owned()));
}

#[test]
fn form_value_falls_back_to_default() {
    let elements = vec![element("#fff", true), element("#000", true)];
    let value = form_value(&AppState::default(), &elements, stroke, Some("#default".to_owned()));
    assert_eq!(value, Some("#default".to_owned()));
}

#[test]
fn form_value_is_none_without_any_source() {
    let elements = vec![element("#fff", true), element("#000", true)];
    assert_eq!(form_value(&AppState::default(), &elements, stroke, None), None);
}

#[test]
fn form_value_skips_editing_element_without_attribute() {
    let elements = vec![element("#fff", true)];
    let app_state = AppState { editing_element: Some(element("#000", false)), ..AppState::default() };
    let never = |_: &Element| -> Option<String> { None };
    assert_eq!(form_value(&app_state, &elements, never, Some("#d".to_owned())), Some("#d".to_owned()));
}
