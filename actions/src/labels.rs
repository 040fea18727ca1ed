//! Label keys and translation.
//!
//! Panels never carry display text directly; they ask a [`Translate`] for it.
//! [`EnglishLabels`] is the built-in table. Any `Fn(&str) -> String` also
//! works, which keeps tests and alternative locales cheap to write.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

pub const DIMENSIONS: &str = "labels.dimensions";
pub const STROKE: &str = "labels.stroke";
pub const BACKGROUND: &str = "labels.background";
pub const FILL: &str = "labels.fill";
pub const SOLID: &str = "labels.solid";
pub const HACHURE: &str = "labels.hachure";
pub const CROSS_HATCH: &str = "labels.crossHatch";
pub const STROKE_WIDTH: &str = "labels.strokeWidth";
pub const THIN: &str = "labels.thin";
pub const BOLD: &str = "labels.bold";
pub const EXTRA_BOLD: &str = "labels.extraBold";
pub const SLOPPINESS: &str = "labels.sloppiness";
pub const ARCHITECT: &str = "labels.architect";
pub const ARTIST: &str = "labels.artist";
pub const CARTOONIST: &str = "labels.cartoonist";
pub const OPACITY: &str = "labels.opacity";
pub const FONT_SIZE: &str = "labels.fontSize";
pub const SMALL: &str = "labels.small";
pub const MEDIUM: &str = "labels.medium";
pub const LARGE: &str = "labels.large";
pub const VERY_LARGE: &str = "labels.veryLarge";
pub const FONT_FAMILY: &str = "labels.fontFamily";
pub const HAND_DRAWN: &str = "labels.handDrawn";
pub const NORMAL: &str = "labels.normal";
pub const CODE: &str = "labels.code";

/// Maps a label key to display text.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn t(&self, key: &str) -> String {
        self(key)
    }
}

/// Built-in English labels. Unknown keys translate to themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl Translate for EnglishLabels {
    fn t(&self, key: &str) -> String {
        english(key).unwrap_or(key).to_owned()
    }
}

/// English text for `key`, if there is one.
#[must_use]
pub fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        DIMENSIONS => "Dimensions",
        STROKE => "Stroke",
        BACKGROUND => "Background",
        FILL => "Fill",
        SOLID => "Solid",
        HACHURE => "Hachure",
        CROSS_HATCH => "Cross-hatch",
        STROKE_WIDTH => "Stroke width",
        THIN => "Thin",
        BOLD => "Bold",
        EXTRA_BOLD => "Extra bold",
        SLOPPINESS => "Sloppiness",
        ARCHITECT => "Architect",
        ARTIST => "Artist",
        CARTOONIST => "Cartoonist",
        OPACITY => "Opacity",
        FONT_SIZE => "Font size",
        SMALL => "Small",
        MEDIUM => "Medium",
        LARGE => "Large",
        VERY_LARGE => "Very large",
        FONT_FAMILY => "Font family",
        HAND_DRAWN => "Hand-drawn",
        NORMAL => "Normal",
        CODE => "Code",
        _ => return None,
    };
    Some(text)
}
