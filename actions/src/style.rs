//! Stroke, fill, and opacity actions.
//!
//! Each one sets a single visual attribute on every selected element and
//! drops the element's cached shape. The two color actions also move the
//! matching current-item default, so the next element drawn picks up the
//! color the user just chose.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::sync::Arc;

use scene::app_state::{AppState, AppStatePatch};
use scene::consts::{DEFAULT_OPACITY, OPACITY_MAX, OPACITY_MIN};
use scene::doc::{Element, FillStyle};
use serde_json::Value;

use crate::action::{ActionName, ActionResult, PropertyAction};
use crate::change::{change_property, form_value};
use crate::labels::{self, Translate};
use crate::panel::{ColorTarget, Control, Panel, SelectOption};

/// Stroke widths offered by the panel, in pixels.
pub const STROKE_WIDTHS: [(f64, &str); 3] = [(1.0, labels::THIN), (2.0, labels::BOLD), (4.0, labels::EXTRA_BOLD)];

/// Roughness levels offered by the panel.
pub const SLOPPINESS_LEVELS: [(f64, &str); 3] =
    [(0.0, labels::ARCHITECT), (1.0, labels::ARTIST), (3.0, labels::CARTOONIST)];

/// Fill styles offered by the panel, in button order.
pub const FILL_STYLES: [(FillStyle, &str); 3] = [
    (FillStyle::Solid, labels::SOLID),
    (FillStyle::Hachure, labels::HACHURE),
    (FillStyle::CrossHatch, labels::CROSS_HATCH),
];

/// Copy `el` with `edit` applied and its cached shape dropped.
fn restyled(el: &Element, edit: impl FnOnce(&mut Element)) -> Arc<Element> {
    el.edited(|e| {
        edit(e);
        e.invalidate_shape();
    })
}

fn number_options(levels: &[(f64, &str)], t: &dyn Translate) -> Vec<SelectOption> {
    levels
        .iter()
        .map(|&(value, key)| SelectOption::new(value, t.t(key)))
        .collect()
}

// =============================================================================
// COLORS
// =============================================================================

/// Sets the stroke color of the selection and the current-item stroke color.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeStrokeColor;

impl PropertyAction for ChangeStrokeColor {
    type Value = String;

    fn name(&self) -> ActionName {
        ActionName::ChangeStrokeColor
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: String) -> ActionResult {
        let next = change_property(elements, |el| restyled(el, |e| e.stroke_color.clone_from(&value)));
        let patch = AppStatePatch { current_item_stroke_color: Some(value), ..AppStatePatch::default() };
        ActionResult::with_app_state(next, patch)
    }

    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        let color = form_value(
            app_state,
            elements,
            |el| Some(el.stroke_color.clone()),
            Some(app_state.current_item_stroke_color.clone()),
        );
        Panel::single(
            self.name(),
            t.t(labels::STROKE),
            Control::ColorPicker { target: ColorTarget::ElementStroke, color },
        )
    }
}

/// Sets the background color of the selection and the current-item background color.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeBackgroundColor;

impl PropertyAction for ChangeBackgroundColor {
    type Value = String;

    fn name(&self) -> ActionName {
        ActionName::ChangeBackgroundColor
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: String) -> ActionResult {
        let next = change_property(elements, |el| restyled(el, |e| e.background_color.clone_from(&value)));
        let patch = AppStatePatch { current_item_background_color: Some(value), ..AppStatePatch::default() };
        ActionResult::with_app_state(next, patch)
    }

    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        let color = form_value(
            app_state,
            elements,
            |el| Some(el.background_color.clone()),
            Some(app_state.current_item_background_color.clone()),
        );
        Panel::single(
            self.name(),
            t.t(labels::BACKGROUND),
            Control::ColorPicker { target: ColorTarget::ElementBackground, color },
        )
    }
}

// =============================================================================
// STROKE AND FILL
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeFillStyle;

impl PropertyAction for ChangeFillStyle {
    type Value = FillStyle;

    fn name(&self) -> ActionName {
        ActionName::ChangeFillStyle
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: FillStyle) -> ActionResult {
        ActionResult::elements(change_property(elements, |el| restyled(el, |e| e.fill_style = value)))
    }

    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        let options = FILL_STYLES
            .iter()
            .map(|&(fill, key)| SelectOption::new(fill.as_str(), t.t(key)))
            .collect();
        let selected = form_value(app_state, elements, |el| Some(el.fill_style), None);
        Panel::single(
            self.name(),
            t.t(labels::FILL),
            Control::ButtonSelect { options, selected: selected.map(|fill| Value::from(fill.as_str())) },
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeStrokeWidth;

impl PropertyAction for ChangeStrokeWidth {
    type Value = f64;

    fn name(&self) -> ActionName {
        ActionName::ChangeStrokeWidth
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: f64) -> ActionResult {
        ActionResult::elements(change_property(elements, |el| restyled(el, |e| e.stroke_width = value)))
    }

    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        let selected = form_value(app_state, elements, |el| Some(el.stroke_width), None);
        Panel::single(
            self.name(),
            t.t(labels::STROKE_WIDTH),
            Control::ButtonSelect { options: number_options(&STROKE_WIDTHS, t), selected: selected.map(Value::from) },
        )
    }
}

/// Sets roughness, shown to users as sloppiness.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeSloppiness;

impl PropertyAction for ChangeSloppiness {
    type Value = f64;

    fn name(&self) -> ActionName {
        ActionName::ChangeSloppiness
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: f64) -> ActionResult {
        ActionResult::elements(change_property(elements, |el| restyled(el, |e| e.roughness = value)))
    }

    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        let selected = form_value(app_state, elements, |el| Some(el.roughness), None);
        Panel::single(
            self.name(),
            t.t(labels::SLOPPINESS),
            Control::ButtonSelect {
                options: number_options(&SLOPPINESS_LEVELS, t),
                selected: selected.map(Value::from),
            },
        )
    }
}

// =============================================================================
// OPACITY
// =============================================================================

/// Sets opacity, clamped to 0..=100.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeOpacity;

impl PropertyAction for ChangeOpacity {
    type Value = f64;

    fn name(&self) -> ActionName {
        ActionName::ChangeOpacity
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: f64) -> ActionResult {
        let opacity = if value.is_nan() { DEFAULT_OPACITY } else { value.clamp(OPACITY_MIN, OPACITY_MAX) };
        ActionResult::elements(change_property(elements, |el| restyled(el, |e| e.opacity = opacity)))
    }

    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        let value = form_value(app_state, elements, |el| Some(el.opacity), Some(DEFAULT_OPACITY));
        Panel::single(
            self.name(),
            t.t(labels::OPACITY),
            Control::Range { min: OPACITY_MIN, max: OPACITY_MAX, value },
        )
    }
}
