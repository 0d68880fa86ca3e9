//! The sign-up scenario suite, one scenario per input equivalence class

use crate::commands::SignupAssertions;
use crate::data::{
    random_email, random_username, random_username_with_space, ValidationFailure, INVALID_EMAIL,
    PASSWORD, SHORT_PASSWORD, SPECIAL_CHAR, TAKEN_EMAIL, TAKEN_USERNAME,
};
use crate::error::E2eResult;
use crate::page::SignupPage;
use crate::runner::Scenario;

/// Builds every scenario in suite order.
pub fn all() -> E2eResult<Vec<Scenario>> {
    let mut suite = Vec::new();

    suite.push(Scenario::record("sign up with valid data", |rec| {
        let username = random_username();
        let email = random_email();
        let mut page = SignupPage::new(rec);
        page.fill_username(&username);
        page.fill_email(&email);
        page.fill_password(PASSWORD);
        page.submit_form();
        rec.verify_success_heading();
    })?);

    suite.push(Scenario::record("only username filled", |rec| {
        let username = random_username();
        let mut page = SignupPage::new(rec);
        page.fill_username(&username);
        page.submit_form();
        rec.verify_failure(ValidationFailure::EmailAndPasswordRequired);
    })?);

    suite.push(Scenario::record("only email filled", |rec| {
        let email = random_email();
        let mut page = SignupPage::new(rec);
        page.fill_email(&email);
        page.submit_form();
        rec.verify_failure(ValidationFailure::UsernameAndPasswordRequired);
    })?);

    suite.push(Scenario::record("only password filled", |rec| {
        let mut page = SignupPage::new(rec);
        page.fill_password(PASSWORD);
        page.submit_form();
        rec.verify_failure(ValidationFailure::UsernameAndEmailRequired);
    })?);

    suite.push(Scenario::record("all fields blank", |rec| {
        let mut page = SignupPage::new(rec);
        page.submit_form();
        rec.verify_failure(ValidationFailure::AllFieldsRequired);
    })?);

    suite.push(Scenario::record("special character in username", |rec| {
        let username = format!("{}{}", random_username(), SPECIAL_CHAR);
        let email = random_email();
        let mut page = SignupPage::new(rec);
        page.fill_username(&username);
        page.fill_email(&email);
        page.fill_password(PASSWORD);
        page.submit_form();
        rec.verify_failure(ValidationFailure::UsernameNotAlphanumeric);
    })?);

    suite.push(Scenario::record("invalid email format", |rec| {
        let username = random_username();
        let mut page = SignupPage::new(rec);
        page.fill_username(&username);
        page.fill_email(INVALID_EMAIL);
        page.fill_password(PASSWORD);
        page.submit_form();
        rec.verify_failure(ValidationFailure::InvalidEmail);
    })?);

    suite.push(Scenario::record("email already registered", |rec| {
        let username = random_username();
        let mut page = SignupPage::new(rec);
        page.fill_username(&username);
        page.fill_email(TAKEN_EMAIL);
        page.fill_password(PASSWORD);
        page.submit_form();
        rec.verify_failure(ValidationFailure::EmailTaken);
    })?);

    suite.push(Scenario::record("password below minimum length", |rec| {
        let username = random_username();
        let email = random_email();
        let mut page = SignupPage::new(rec);
        page.fill_username(&username);
        page.fill_email(&email);
        page.fill_password(SHORT_PASSWORD);
        page.submit_form();
        rec.verify_failure(ValidationFailure::PasswordTooShort);
    })?);

    suite.push(Scenario::record("username already registered", |rec| {
        let email = random_email();
        let mut page = SignupPage::new(rec);
        page.fill_username(TAKEN_USERNAME);
        page.fill_email(&email);
        page.fill_password(PASSWORD);
        page.submit_form();
        rec.verify_failure(ValidationFailure::UsernameTaken);
    })?);

    suite.push(Scenario::record("trailing space in username", |rec| {
        let username = random_username_with_space();
        let email = random_email();
        let mut page = SignupPage::new(rec);
        page.fill_username(&username);
        page.fill_email(&email);
        page.fill_password(PASSWORD);
        page.submit_form();
        rec.verify_failure(ValidationFailure::UsernameNotAlphanumeric);
    })?);

    Ok(suite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn suite_covers_every_equivalence_class_once() {
        let suite = all().unwrap();
        assert_eq!(suite.len(), 11);

        let mut names: Vec<_> = suite.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn every_scenario_visits_the_page_fresh() {
        for scenario in all().unwrap() {
            assert_eq!(scenario.steps()[0], Step::Visit, "{}", scenario.name);
        }
    }
}
