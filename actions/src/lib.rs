//! Property-editing actions for selected elements.
//!
//! Each action pairs a pure transform over the element collection with a
//! declarative panel bound to the current selection. Actions never mutate
//! elements in place and never fail on user input: bad input is normalized,
//! and a selection that disagrees on a value shows an indeterminate control.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`action`] | [`action::PropertyAction`] contract, dynamic dispatch, results, errors |
//! | [`change`] | Selection-wide copy-on-write edits and shared value resolution |
//! | [`dimensions`] | Position/size action |
//! | [`style`] | Color, fill, stroke width, sloppiness, and opacity actions |
//! | [`typography`] | Font size and family actions |
//! | [`input`] | Dimension fields, patches, and number-input parsing |
//! | [`panel`] | Panel and control model, input resolution |
//! | [`labels`] | Label keys, [`labels::Translate`], built-in English labels |
//! | [`manager`] | [`manager::ActionManager`] registry |

pub mod action;
pub mod change;
pub mod dimensions;
pub mod input;
pub mod labels;
pub mod manager;
pub mod panel;
pub mod style;
pub mod typography;

pub use action::{ActionError, ActionName, ActionResult, DynAction, PropertyAction};
pub use manager::ActionManager;
