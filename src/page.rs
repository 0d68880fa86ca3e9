//! Page object for the sign-up form
//!
//! All element lookups for the page live here; scenarios only speak in
//! semantic actions.

use crate::locator::Locator;
use crate::step::PageDriver;

/// The hosted sign-up page.
pub struct SignupPage<'d, D: PageDriver> {
    driver: &'d mut D,
}

impl<'d, D: PageDriver> SignupPage<'d, D> {
    pub fn new(driver: &'d mut D) -> Self {
        Self { driver }
    }

    fn username_input() -> Locator {
        Locator::input_id("username")
    }

    fn email_input() -> Locator {
        Locator::first_input_of_type("email")
    }

    fn password_input() -> Locator {
        Locator::input_id("password")
    }

    fn submit_button() -> Locator {
        Locator::input_labeled("Create Account")
    }

    /// Types into the username field, appending to any existing content.
    /// Call at most once per scenario.
    pub fn fill_username(&mut self, username: &str) {
        self.driver.type_text(Self::username_input(), username);
    }

    /// Types into the first email input on the page.
    pub fn fill_email(&mut self, email: &str) {
        self.driver.type_text(Self::email_input(), email);
    }

    pub fn fill_password(&mut self, password: &str) {
        self.driver.type_text(Self::password_input(), password);
    }

    /// Activates the primary call-to-action.
    pub fn submit_form(&mut self) {
        self.driver.click(Self::submit_button());
    }
}
