//! Declarative browser steps and the page-driver seam
//!
//! A scenario is recorded as a list of [`Step`]s and executed in one browser
//! session. Page objects reach the recorder only through [`PageDriver`], so
//! element interaction never goes through a global query function.

use serde::{Deserialize, Serialize};

use crate::locator::Locator;

/// A single browser action. Steps execute strictly in issue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Navigate to the configured base URL.
    Visit,

    /// Type text into an element, appending to any existing content.
    Type { target: Locator, text: String },

    /// Click an element.
    Click { target: Locator },

    /// Assert an element's rendered text equals `expected` exactly.
    ExpectText { target: Locator, expected: String },
}

impl Step {
    /// Short name used in logs and reports.
    pub fn name(&self) -> String {
        match self {
            Step::Visit => "visit".to_string(),
            Step::Type { target, .. } => format!("type:{}", target.selector()),
            Step::Click { target } => format!("click:{}", target.selector()),
            Step::ExpectText { target, .. } => format!("expect_text:{}", target.selector()),
        }
    }

    /// Whether this step is a terminal assertion.
    pub fn is_assertion(&self) -> bool {
        matches!(self, Step::ExpectText { .. })
    }
}

/// Capabilities a page object needs from the browser.
pub trait PageDriver {
    /// Open the target page fresh.
    fn visit(&mut self);

    /// Type into an element, appending to existing content.
    fn type_text(&mut self, target: Locator, text: &str);

    /// Click an element.
    fn click(&mut self, target: Locator);

    /// Assert an element's whole rendered text equals `expected`.
    fn expect_text(&mut self, target: Locator, expected: &str);
}

/// Records steps in issue order for later execution in the browser.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl PageDriver for StepRecorder {
    fn visit(&mut self) {
        self.steps.push(Step::Visit);
    }

    fn type_text(&mut self, target: Locator, text: &str) {
        self.steps.push(Step::Type {
            target,
            text: text.to_string(),
        });
    }

    fn click(&mut self, target: Locator) {
        self.steps.push(Step::Click { target });
    }

    fn expect_text(&mut self, target: Locator, expected: &str) {
        self.steps.push(Step::ExpectText {
            target,
            expected: expected.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_preserves_issue_order() {
        let mut rec = StepRecorder::new();
        rec.visit();
        rec.type_text(Locator::input_id("username"), "alice");
        rec.click(Locator::input_labeled("Create Account"));
        rec.expect_text(Locator::css("h1"), "hello");

        let steps = rec.into_steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], Step::Visit);
        assert_eq!(
            steps[1],
            Step::Type {
                target: Locator::input_id("username"),
                text: "alice".to_string(),
            }
        );
        assert!(steps[3].is_assertion());
    }

    #[test]
    fn step_names_carry_the_selector() {
        let step = Step::Click {
            target: Locator::input_labeled("Create Account"),
        };
        assert_eq!(step.name(), "click:input[value=\"Create Account\"]");
        assert_eq!(Step::Visit.name(), "visit");
    }

    #[test]
    fn steps_serialize_with_an_action_tag() {
        let step = Step::Type {
            target: Locator::input_id("password"),
            text: "secret".to_string(),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["action"], "type");
        assert_eq!(json["target"]["by"], "input_id");
    }
}
