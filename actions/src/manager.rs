//! Registry that dispatches property actions by name.
//!
//! The shell holds one [`ActionManager`]. It renders every panel for the
//! current selection, performs actions from JSON values, and routes raw
//! control input through a panel back into its action.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::Arc;

use scene::app_state::AppState;
use scene::doc::Element;
use scene::text::{ApproximateMetrics, MeasureText};
use tracing::{debug, warn};

use crate::action::{ActionError, ActionName, ActionResult, DynAction};
use crate::dimensions::ChangeDimensions;
use crate::labels::{EnglishLabels, Translate};
use crate::panel::{ControlInput, Panel};
use crate::style::{
    ChangeBackgroundColor, ChangeFillStyle, ChangeOpacity, ChangeSloppiness, ChangeStrokeColor, ChangeStrokeWidth,
};
use crate::typography::{ChangeFontFamily, ChangeFontSize};

/// Ordered set of registered actions, at most one per [`ActionName`].
pub struct ActionManager {
    actions: Vec<Box<dyn DynAction>>,
}

impl ActionManager {
    /// Create a manager with nothing registered.
    #[must_use]
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    /// Create a manager with every property action, in panel order.
    /// Font actions measure text with `measure`.
    #[must_use]
    pub fn with_property_actions(measure: Arc<dyn MeasureText>) -> Self {
        let mut manager = Self::new();
        manager.register(ChangeDimensions);
        manager.register(ChangeStrokeColor);
        manager.register(ChangeBackgroundColor);
        manager.register(ChangeFillStyle);
        manager.register(ChangeStrokeWidth);
        manager.register(ChangeSloppiness);
        manager.register(ChangeOpacity);
        manager.register(ChangeFontSize::new(Arc::clone(&measure)));
        manager.register(ChangeFontFamily::new(measure));
        manager
    }

    /// Register an action. Replaces any action already registered under the same name.
    pub fn register(&mut self, action: impl DynAction + 'static) {
        let name = action.action_name();
        if let Some(slot) = self.actions.iter_mut().find(|a| a.action_name() == name) {
            *slot = Box::new(action);
        } else {
            self.actions.push(Box::new(action));
        }
    }

    /// Look up a registered action.
    #[must_use]
    pub fn get(&self, name: ActionName) -> Option<&dyn DynAction> {
        self.actions
            .iter()
            .find(|a| a.action_name() == name)
            .map(|a| &**a)
    }

    /// Registered action names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<ActionName> {
        self.actions.iter().map(|a| a.action_name()).collect()
    }

    fn require(&self, name: ActionName) -> Result<&dyn DynAction, ActionError> {
        self.get(name)
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))
    }

    /// Perform `name` with a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownAction`] if `name` is not registered, or
    /// [`ActionError::InvalidValue`] if `value` has the wrong shape.
    pub fn perform(
        &self,
        name: ActionName,
        elements: &[Arc<Element>],
        app_state: &AppState,
        value: serde_json::Value,
    ) -> Result<ActionResult, ActionError> {
        let action = self.require(name)?;
        let result = action.perform_json(elements, app_state, value).inspect_err(|e| {
            warn!(action = %name, error = %e, "action rejected value");
        })?;
        debug!(action = %name, changed = result.changed_count(elements), "action performed");
        Ok(result)
    }

    /// Panel for one action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownAction`] if `name` is not registered.
    pub fn render_panel(
        &self,
        name: ActionName,
        elements: &[Arc<Element>],
        app_state: &AppState,
        t: &dyn Translate,
    ) -> Result<Panel, ActionError> {
        Ok(self.require(name)?.render_panel(elements, app_state, t))
    }

    /// Panels for every registered action, in registration order.
    #[must_use]
    pub fn render_panels(&self, elements: &[Arc<Element>], app_state: &AppState, t: &dyn Translate) -> Vec<Panel> {
        self.actions
            .iter()
            .map(|a| a.render_panel(elements, app_state, t))
            .collect()
    }

    /// Feed raw input into control `control` of the action's panel and perform
    /// the action with the resolved value.
    ///
    /// Returns `Ok(None)` when the control resolves no value (disabled, wrong
    /// input kind, unusable text), leaving the scene as it is.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownAction`] if `name` is not registered, or
    /// [`ActionError::NoSuchControl`] if the panel has no such control.
    pub fn update_data(
        &self,
        name: ActionName,
        control: usize,
        input: &ControlInput,
        elements: &[Arc<Element>],
        app_state: &AppState,
    ) -> Result<Option<ActionResult>, ActionError> {
        let panel = self.render_panel(name, elements, app_state, &EnglishLabels)?;
        let Some(target) = panel.control(control) else {
            return Err(ActionError::NoSuchControl { action: name, index: control });
        };
        let Some(value) = target.resolve_input(input) else {
            debug!(action = %name, control, "control input resolved no value");
            return Ok(None);
        };
        self.perform(name, elements, app_state, value).map(Some)
    }
}

impl Default for ActionManager {
    fn default() -> Self {
        Self::with_property_actions(Arc::new(ApproximateMetrics))
    }
}
