//! Font size and font family actions for text elements.
//!
//! Only selected text elements change; other selected elements pass through
//! untouched. A font change alters the text's rendered extent, so the
//! bounding box is remeasured along with dropping the cached shape.

#[cfg(test)]
#[path = "typography_test.rs"]
mod typography_test;

use std::sync::Arc;

use scene::app_state::AppState;
use scene::doc::Element;
use scene::font::Font;
use scene::text::{ApproximateMetrics, MeasureText, redraw_text_bounding_box};
use serde_json::Value;

use crate::action::{ActionName, ActionResult, PropertyAction};
use crate::change::{change_property, form_value};
use crate::labels::{self, Translate};
use crate::panel::{Control, Panel, SelectOption};

/// Font sizes offered by the panel, in pixels.
pub const FONT_SIZES: [(f64, &str); 4] = [
    (16.0, labels::SMALL),
    (20.0, labels::MEDIUM),
    (28.0, labels::LARGE),
    (36.0, labels::VERY_LARGE),
];

/// Font families offered by the panel.
pub const FONT_FAMILIES: [(&str, &str); 3] =
    [("Virgil", labels::HAND_DRAWN), ("Helvetica", labels::NORMAL), ("Cascadia", labels::CODE)];

/// Rebuild the font of a selected text element and remeasure it.
fn refont(el: &Arc<Element>, measure: &dyn MeasureText, rebuild: impl FnOnce(&Font) -> Font) -> Arc<Element> {
    let Some(props) = el.text_props() else {
        return Arc::clone(el);
    };
    let font = rebuild(&props.font);
    el.edited(|e| {
        if let Some(props) = e.text_props_mut() {
            props.font = font;
        }
        e.invalidate_shape();
        redraw_text_bounding_box(e, measure);
    })
}

/// Sets the font size of selected text elements, keeping their family.
#[derive(Clone)]
pub struct ChangeFontSize {
    measure: Arc<dyn MeasureText>,
}

impl ChangeFontSize {
    #[must_use]
    pub fn new(measure: Arc<dyn MeasureText>) -> Self {
        Self { measure }
    }
}

impl Default for ChangeFontSize {
    fn default() -> Self {
        Self::new(Arc::new(ApproximateMetrics))
    }
}

impl PropertyAction for ChangeFontSize {
    type Value = f64;

    fn name(&self) -> ActionName {
        ActionName::ChangeFontSize
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: f64) -> ActionResult {
        let next = change_property(elements, |el| refont(el, self.measure.as_ref(), |font| font.with_size(value)));
        ActionResult::elements(next)
    }

    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        let options = FONT_SIZES
            .iter()
            .map(|&(size, key)| SelectOption::new(size, t.t(key)))
            .collect();
        let selected = form_value(app_state, elements, |el| el.text_props().map(|p| p.font.size), None);
        Panel::single(
            self.name(),
            t.t(labels::FONT_SIZE),
            Control::ButtonSelect { options, selected: selected.map(Value::from) },
        )
    }
}

/// Sets the font family of selected text elements, keeping their size.
#[derive(Clone)]
pub struct ChangeFontFamily {
    measure: Arc<dyn MeasureText>,
}

impl ChangeFontFamily {
    #[must_use]
    pub fn new(measure: Arc<dyn MeasureText>) -> Self {
        Self { measure }
    }
}

impl Default for ChangeFontFamily {
    fn default() -> Self {
        Self::new(Arc::new(ApproximateMetrics))
    }
}

impl PropertyAction for ChangeFontFamily {
    type Value = String;

    fn name(&self) -> ActionName {
        ActionName::ChangeFontFamily
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: String) -> ActionResult {
        let next = change_property(elements, |el| {
            refont(el, self.measure.as_ref(), |font| font.with_family(value.as_str()))
        });
        ActionResult::elements(next)
    }

    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        let options = FONT_FAMILIES
            .iter()
            .map(|&(family, key)| SelectOption::new(family, t.t(key)))
            .collect();
        let selected = form_value(app_state, elements, |el| el.text_props().map(|p| p.font.family.clone()), None);
        Panel::single(
            self.name(),
            t.t(labels::FONT_FAMILY),
            Control::ButtonSelect { options, selected: selected.map(Value::from) },
        )
    }
}
