//! Declarative panel model.
//!
//! A [`Panel`] describes the controls an action offers for the current
//! selection and the value each control currently shows. The host renders it
//! however it likes; when the user touches a control, the host passes the raw
//! input to [`Control::resolve_input`] and forwards the resulting value to the
//! action. That round trip is the panel's `updateData` path.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::ActionName;
use crate::input::{DimensionField, DimensionPatch, parse_dimension_input};

/// Which element color a color picker edits. Hosts use it to pick a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorTarget {
    ElementStroke,
    ElementBackground,
}

/// One choice of a button group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    /// Value forwarded to the action when chosen.
    pub value: Value,
    /// Display text.
    pub text: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<Value>, text: String) -> Self {
        Self { value: value.into(), text }
    }
}

/// A single input widget inside a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "camelCase")]
pub enum Control {
    /// Integer text field for one geometry field.
    NumberInput {
        label: String,
        field: DimensionField,
        /// `None` renders an empty field.
        value: Option<f64>,
        disabled: bool,
    },
    /// Color swatch picker.
    ColorPicker {
        target: ColorTarget,
        /// `None` renders no swatch as current.
        color: Option<String>,
    },
    /// Mutually exclusive button group.
    ButtonSelect {
        options: Vec<SelectOption>,
        /// `None` renders no button as pressed.
        selected: Option<Value>,
    },
    /// Slider over `min..=max`.
    Range { min: f64, max: f64, value: Option<f64> },
}

/// Raw input from a rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlInput {
    /// Text typed into a field, a picked color, or a slider position.
    Text(String),
    /// Index of the chosen button in a button group.
    Choose(usize),
}

impl Control {
    /// Convert raw input into the value the owning action consumes.
    ///
    /// Returns `None` when the control is disabled, when the input kind does
    /// not fit the control, or when the input carries no usable value.
    #[must_use]
    pub fn resolve_input(&self, input: &ControlInput) -> Option<Value> {
        match (self, input) {
            (Self::NumberInput { disabled: true, .. }, _) => None,
            (Self::NumberInput { field, value, .. }, ControlInput::Text(raw)) => {
                let next = parse_dimension_input(raw, value.unwrap_or_default());
                Some(dimension_value(DimensionPatch::single(*field, next)))
            }
            (Self::ColorPicker { .. }, ControlInput::Text(color)) => Some(Value::from(color.trim())),
            (Self::ButtonSelect { options, .. }, ControlInput::Choose(index)) => {
                options.get(*index).map(|option| option.value.clone())
            }
            (Self::Range { min, max, .. }, ControlInput::Text(raw)) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Some(Value::from(v.clamp(*min, *max))),
                _ => None,
            },
            _ => None,
        }
    }

    /// Index of the pressed button, for button groups with a resolved value.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::ButtonSelect { options, selected: Some(selected) } => {
                options.iter().position(|option| &option.value == selected)
            }
            _ => None,
        }
    }
}

fn dimension_value(patch: DimensionPatch) -> Value {
    let mut map = serde_json::Map::new();
    let fields = [("x", patch.x), ("y", patch.y), ("width", patch.width), ("height", patch.height)];
    for (key, value) in fields {
        if let Some(value) = value {
            map.insert(key.to_owned(), Value::from(value));
        }
    }
    Value::Object(map)
}

/// Editor panel for one action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    /// Action that values from this panel are forwarded to.
    pub action: ActionName,
    /// Translated heading.
    pub heading: String,
    /// Controls laid out in rows.
    pub rows: Vec<Vec<Control>>,
}

impl Panel {
    /// Panel with a single control.
    #[must_use]
    pub fn single(action: ActionName, heading: String, control: Control) -> Self {
        Self { action, heading, rows: vec![vec![control]] }
    }

    /// Controls in reading order (row by row). Indices into this sequence
    /// address controls for [`Panel::control`].
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.rows.iter().flatten()
    }

    /// Control at `index` in reading order.
    #[must_use]
    pub fn control(&self, index: usize) -> Option<&Control> {
        self.controls().nth(index)
    }
}
