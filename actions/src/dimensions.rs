//! Position and size editing for a single selected element.

#[cfg(test)]
#[path = "dimensions_test.rs"]
mod dimensions_test;

use std::sync::Arc;

use scene::app_state::AppState;
use scene::doc::{Element, selected_shapes};

use crate::action::{ActionName, ActionResult, PropertyAction};
use crate::change::change_property;
use crate::input::{DimensionField, DimensionPatch};
use crate::labels::{self, Translate};
use crate::panel::{Control, Panel};

/// Sets x, y, width, and height from a [`DimensionPatch`].
///
/// The panel only offers input when exactly one shape is selected: a single
/// number field cannot show several differing values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeDimensions;

impl PropertyAction for ChangeDimensions {
    type Value = DimensionPatch;

    fn name(&self) -> ActionName {
        ActionName::ChangeDimensions
    }

    fn perform(&self, elements: &[Arc<Element>], _app_state: &AppState, value: DimensionPatch) -> ActionResult {
        ActionResult::elements(change_property(elements, |el| el.edited(|e| value.apply_to(e))))
    }

    fn panel(&self, elements: &[Arc<Element>], _app_state: &AppState, t: &dyn Translate) -> Panel {
        let selected = selected_shapes(elements);
        let only = match selected.as_slice() {
            [one] => Some(one),
            _ => None,
        };
        let input = |field: DimensionField| Control::NumberInput {
            label: field.label().to_owned(),
            field,
            value: only.map(|el| field.read(el)),
            disabled: only.is_none(),
        };
        Panel {
            action: self.name(),
            heading: t.t(labels::DIMENSIONS),
            rows: vec![
                vec![input(DimensionField::X), input(DimensionField::Y)],
                vec![input(DimensionField::Width), input(DimensionField::Height)],
            ],
        }
    }
}
