//! Selection-wide element edits and shared value resolution.
//!
//! Every action funnels through [`change_property`], which rebuilds the
//! collection slot by slot: selected elements go through the edit, the rest
//! are the same `Arc` they were. Panels read their displayed value through
//! [`form_value`].

#[cfg(test)]
#[path = "change_test.rs"]
mod change_test;

use std::sync::Arc;

use scene::app_state::AppState;
use scene::doc::Element;

/// Map `edit` over the selected elements, passing unselected ones through.
///
/// The result has the same length and order as `elements`. `edit` may return
/// the element it was given (via `Arc::clone`) to leave it untouched.
pub fn change_property<F>(elements: &[Arc<Element>], mut edit: F) -> Vec<Arc<Element>>
where
    F: FnMut(&Arc<Element>) -> Arc<Element>,
{
    elements
        .iter()
        .map(|el| if el.is_selected { edit(el) } else { Arc::clone(el) })
        .collect()
}

/// The attribute value all selected elements agree on.
///
/// Returns `None` when nothing is selected, when any two selected elements
/// disagree, or when the attribute does not apply to a selected element.
pub fn common_attribute<T, F>(elements: &[Arc<Element>], get: F) -> Option<T>
where
    T: PartialEq,
    F: Fn(&Element) -> Option<T>,
{
    let mut values = elements.iter().filter(|el| el.is_selected).map(|el| get(el));
    let first = values.next()??;
    values.all(|value| value.as_ref() == Some(&first)).then_some(first)
}

/// Resolve the value a panel control should display.
///
/// In priority order: the attribute of the element being edited in place,
/// the value shared by the whole selection, then `default`. `None` means the
/// control is shown indeterminate.
pub fn form_value<T, F>(app_state: &AppState, elements: &[Arc<Element>], get: F, default: Option<T>) -> Option<T>
where
    T: PartialEq,
    F: Fn(&Element) -> Option<T>,
{
    app_state
        .editing_element
        .as_deref()
        .and_then(&get)
        .or_else(|| common_attribute(elements, &get))
        .or(default)
}
