//! Typed element locators
//!
//! Scenarios and page objects talk about elements through these variants; the
//! concrete selector syntax stays in one place.

use serde::{Deserialize, Serialize};

/// How an element on the target page is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum Locator {
    /// An input carrying a stable `id` attribute.
    InputId { id: String },

    /// The first input of a given `type` on the page.
    FirstInputOfType { kind: String },

    /// An input whose visible label (its `value`) matches exactly.
    InputLabeled { label: String },

    /// A raw CSS selector.
    Css { css: String },
}

impl Locator {
    pub fn input_id(id: impl Into<String>) -> Self {
        Self::InputId { id: id.into() }
    }

    pub fn first_input_of_type(kind: impl Into<String>) -> Self {
        Self::FirstInputOfType { kind: kind.into() }
    }

    pub fn input_labeled(label: impl Into<String>) -> Self {
        Self::InputLabeled { label: label.into() }
    }

    pub fn css(css: impl Into<String>) -> Self {
        Self::Css { css: css.into() }
    }

    /// Renders the Playwright selector for this locator.
    pub fn selector(&self) -> String {
        match self {
            Self::InputId { id } => format!("input[id=\"{id}\"]"),
            Self::FirstInputOfType { kind } => format!("input[type=\"{kind}\"] >> nth=0"),
            Self::InputLabeled { label } => format!("input[value=\"{label}\"]"),
            Self::Css { css } => css.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_input_id_selector() {
        assert_eq!(
            Locator::input_id("username").selector(),
            "input[id=\"username\"]"
        );
    }

    #[test]
    fn renders_first_of_type_selector() {
        assert_eq!(
            Locator::first_input_of_type("email").selector(),
            "input[type=\"email\"] >> nth=0"
        );
    }

    #[test]
    fn renders_labeled_input_selector() {
        assert_eq!(
            Locator::input_labeled("Create Account").selector(),
            "input[value=\"Create Account\"]"
        );
    }

    #[test]
    fn css_passes_through_untouched() {
        assert_eq!(
            Locator::css(".notification.active.error p").selector(),
            ".notification.active.error p"
        );
    }
}
