//! Dimension fields, sparse dimension updates, and number-input parsing.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use scene::doc::Element;
use serde::{Deserialize, Serialize};

/// One of the four editable geometry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionField {
    X,
    Y,
    Width,
    Height,
}

impl DimensionField {
    /// Input label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Width => "Width",
            Self::Height => "Height",
        }
    }

    /// Current value of this field on `element`.
    #[must_use]
    pub fn read(self, element: &Element) -> f64 {
        match self {
            Self::X => element.x,
            Self::Y => element.y,
            Self::Width => element.width,
            Self::Height => element.height,
        }
    }
}

/// Sparse geometry update. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl DimensionPatch {
    /// Patch that sets a single field.
    #[must_use]
    pub fn single(field: DimensionField, value: f64) -> Self {
        let mut patch = Self::default();
        match field {
            DimensionField::X => patch.x = Some(value),
            DimensionField::Y => patch.y = Some(value),
            DimensionField::Width => patch.width = Some(value),
            DimensionField::Height => patch.height = Some(value),
        }
        patch
    }

    /// Whether the patch resizes, which invalidates the cached shape.
    /// Moving alone does not.
    #[must_use]
    pub fn changes_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Write the present fields into `element`.
    pub fn apply_to(&self, element: &mut Element) {
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if self.changes_size() {
            element.invalidate_shape();
        }
    }
}

/// Parse the leading base-10 integer of `raw`, ignoring anything after it.
///
/// Leading whitespace and a single sign are accepted. Returns `None` when no
/// digit follows, or when the digits overflow `i64`.
#[must_use]
pub fn parse_integer_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    // Accumulate toward the sign so i64::MIN stays representable.
    let sign = if negative { -1 } else { 1 };
    unsigned[..end]
        .bytes()
        .try_fold(0i64, |acc, b| acc.checked_mul(10)?.checked_add(sign * i64::from(b - b'0')))
}

/// Turn number-input text into a dimension value.
///
/// Blank input becomes 0. Text with no leading integer keeps `current`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parse_dimension_input(raw: &str, current: f64) -> f64 {
    if raw.trim().is_empty() {
        return 0.0;
    }
    parse_integer_input(raw).map_or(current, |n| n as f64)
}
