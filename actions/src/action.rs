//! The property-action contract: a named transform plus a panel description.
//!
//! Each action is written against [`PropertyAction`] with a typed value. The
//! shell only ever sees actions as [`DynAction`] trait objects, which take the
//! value as JSON (the shape a panel control hands back) and decode it into the
//! action's own type.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use scene::app_state::{AppState, AppStatePatch};
use scene::doc::Element;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::labels::Translate;
use crate::panel::Panel;

/// Error returned at the dynamic dispatch boundary.
///
/// The actions themselves never fail; these only arise when a caller names an
/// action that is not registered or sends a value of the wrong shape.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// No action with this name exists or is registered.
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    /// The JSON value could not be decoded into the action's value type.
    #[error("invalid value for {action}: {source}")]
    InvalidValue {
        action: ActionName,
        #[source]
        source: serde_json::Error,
    },
    /// The action's panel has no control at this index.
    #[error("{action} has no control at index {index}")]
    NoSuchControl { action: ActionName, index: usize },
}

/// Stable identifier for each property action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionName {
    ChangeDimensions,
    ChangeStrokeColor,
    ChangeBackgroundColor,
    ChangeFillStyle,
    ChangeStrokeWidth,
    ChangeSloppiness,
    ChangeOpacity,
    ChangeFontSize,
    ChangeFontFamily,
}

impl ActionName {
    /// Every property action, in panel order.
    pub const ALL: [Self; 9] = [
        Self::ChangeDimensions,
        Self::ChangeStrokeColor,
        Self::ChangeBackgroundColor,
        Self::ChangeFillStyle,
        Self::ChangeStrokeWidth,
        Self::ChangeSloppiness,
        Self::ChangeOpacity,
        Self::ChangeFontSize,
        Self::ChangeFontFamily,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChangeDimensions => "changeDimensions",
            Self::ChangeStrokeColor => "changeStrokeColor",
            Self::ChangeBackgroundColor => "changeBackgroundColor",
            Self::ChangeFillStyle => "changeFillStyle",
            Self::ChangeStrokeWidth => "changeStrokeWidth",
            Self::ChangeSloppiness => "changeSloppiness",
            Self::ChangeOpacity => "changeOpacity",
            Self::ChangeFontSize => "changeFontSize",
            Self::ChangeFontFamily => "changeFontFamily",
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionName {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ActionError::UnknownAction(s.to_owned()))
    }
}

/// What an action hands back to the shell. Absent fields mean "unchanged".
#[derive(Debug, Clone, Default)]
pub struct ActionResult {
    /// Replacement element collection, same length and order as the input.
    pub elements: Option<Vec<Arc<Element>>>,
    /// Update for the editor state.
    pub app_state: Option<AppStatePatch>,
}

impl ActionResult {
    /// Result that only replaces the elements.
    #[must_use]
    pub fn elements(elements: Vec<Arc<Element>>) -> Self {
        Self { elements: Some(elements), app_state: None }
    }

    /// Result that replaces the elements and patches the editor state.
    #[must_use]
    pub fn with_app_state(elements: Vec<Arc<Element>>, patch: AppStatePatch) -> Self {
        Self { elements: Some(elements), app_state: Some(patch) }
    }

    /// Number of slots whose element is a different `Arc` than in `before`.
    #[must_use]
    pub fn changed_count(&self, before: &[Arc<Element>]) -> usize {
        self.elements.as_ref().map_or(0, |after| {
            after
                .iter()
                .zip(before)
                .filter(|(a, b)| !Arc::ptr_eq(a, b))
                .count()
        })
    }
}

/// A property action with a typed input value.
pub trait PropertyAction: Send + Sync {
    /// Value the transform consumes (a color string, a number, a patch, ...).
    type Value: DeserializeOwned;

    fn name(&self) -> ActionName;

    /// Apply `value` to every selected element.
    fn perform(&self, elements: &[Arc<Element>], app_state: &AppState, value: Self::Value) -> ActionResult;

    /// Describe the editor panel for the current selection.
    fn panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel;
}

/// Object-safe form of [`PropertyAction`] that takes its value as JSON.
pub trait DynAction: Send + Sync {
    fn action_name(&self) -> ActionName;

    /// Decode `value` and perform the action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidValue`] if `value` does not decode into the
    /// action's value type.
    fn perform_json(
        &self,
        elements: &[Arc<Element>],
        app_state: &AppState,
        value: serde_json::Value,
    ) -> Result<ActionResult, ActionError>;

    fn render_panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel;
}

impl<A: PropertyAction> DynAction for A {
    fn action_name(&self) -> ActionName {
        self.name()
    }

    fn perform_json(
        &self,
        elements: &[Arc<Element>],
        app_state: &AppState,
        value: serde_json::Value,
    ) -> Result<ActionResult, ActionError> {
        let value = serde_json::from_value::<A::Value>(value)
            .map_err(|source| ActionError::InvalidValue { action: self.name(), source })?;
        Ok(self.perform(elements, app_state, value))
    }

    fn render_panel(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Panel {
        self.panel(elements, app_state, t)
    }
}
