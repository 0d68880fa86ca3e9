//! Reusable scenario vocabulary beyond the base page actions
//!
//! The counterpart of a runner's custom-command registry: the value
//! generators re-exported from [`crate::data`], plus assertion verbs shared
//! by every scenario.

use crate::data::{ValidationFailure, SUCCESS_HEADING};
use crate::locator::Locator;
use crate::step::PageDriver;

pub use crate::data::{random_email, random_username, random_username_with_space};

/// The active error notification paragraph shown after a failed submit.
fn error_notification() -> Locator {
    Locator::css(".notification.active.error p")
}

fn success_heading() -> Locator {
    Locator::css("h1")
}

/// Assertion verbs available on any page driver.
pub trait SignupAssertions {
    /// Asserts the active error notification renders exactly `expected`.
    ///
    /// Whole-text equality, not substring match: concatenated multi-field
    /// messages must match verbatim.
    fn verify_error_message(&mut self, expected: &str);

    /// [`SignupAssertions::verify_error_message`] keyed by the
    /// expected-message table.
    fn verify_failure(&mut self, failure: ValidationFailure);

    /// Asserts the welcome heading after a completed sign-up.
    fn verify_success_heading(&mut self);
}

impl<D: PageDriver> SignupAssertions for D {
    fn verify_error_message(&mut self, expected: &str) {
        self.expect_text(error_notification(), expected);
    }

    fn verify_failure(&mut self, failure: ValidationFailure) {
        self.verify_error_message(failure.message());
    }

    fn verify_success_heading(&mut self) {
        self.expect_text(success_heading(), SUCCESS_HEADING);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Step, StepRecorder};

    #[test]
    fn verify_failure_records_the_exact_table_entry() {
        let mut rec = StepRecorder::new();
        rec.verify_failure(ValidationFailure::PasswordTooShort);

        assert_eq!(
            rec.steps(),
            [Step::ExpectText {
                target: Locator::css(".notification.active.error p"),
                expected: "Your password must be at least 6 characters long.".to_string(),
            }]
        );
    }

    #[test]
    fn verify_success_heading_targets_the_h1() {
        let mut rec = StepRecorder::new();
        rec.verify_success_heading();

        assert_eq!(
            rec.steps(),
            [Step::ExpectText {
                target: Locator::css("h1"),
                expected: SUCCESS_HEADING.to_string(),
            }]
        );
    }
}
