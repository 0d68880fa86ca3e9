//! Test data: generators, fixed probes, and the expected-message table

use chrono::Utc;
use rand::Rng;

const USERNAME_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every generated username.
pub const USERNAME_LEN: usize = 20;

/// Known-good password for scenarios not probing the password rules.
pub const PASSWORD: &str = "Password123!";

/// Below the six-character minimum.
pub const SHORT_PASSWORD: &str = "pas";

/// Syntactically invalid: no top-level domain.
pub const INVALID_EMAIL: &str = "test@test";

/// Account that already exists on the hosted page.
pub const TAKEN_USERNAME: &str = "sjsalvador";

/// Email already registered on the hosted page.
pub const TAKEN_EMAIL: &str = "sjsalvador.it@gmail.com";

/// A character the username rules reject.
pub const SPECIAL_CHAR: char = '!';

/// Heading rendered after a successful sign-up.
pub const SUCCESS_HEADING: &str = "Welcome to RotoGrinders! Thanks for signing up!";

/// Twenty characters drawn uniformly from letters and digits.
///
/// Collision with an existing account is possible in principle but negligible
/// at this alphabet size and length; no uniqueness check is made.
pub fn random_username() -> String {
    let mut rng = rand::thread_rng();
    (0..USERNAME_LEN)
        .map(|_| USERNAME_ALPHABET[rng.gen_range(0..USERNAME_ALPHABET.len())] as char)
        .collect()
}

/// [`random_username`] with exactly one trailing space, for the whitespace
/// rejection scenario.
pub fn random_username_with_space() -> String {
    format!("{} ", random_username())
}

/// `user<epoch-millis>@example.com`. Unregistered within a single host's
/// account namespace as long as the clock moves forward.
pub fn random_email() -> String {
    format!("user{}@example.com", Utc::now().timestamp_millis())
}

/// The validation outcomes the sign-up page renders after a failed submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationFailure {
    UsernameRequired,
    EmailRequired,
    PasswordRequired,
    EmailAndPasswordRequired,
    UsernameAndPasswordRequired,
    UsernameAndEmailRequired,
    AllFieldsRequired,
    /// Spaces and special characters trigger the same rule on the page.
    UsernameNotAlphanumeric,
    InvalidEmail,
    UsernameTaken,
    EmailTaken,
    PasswordTooShort,
}

impl ValidationFailure {
    /// Exact text the page renders for this failure.
    ///
    /// Multi-field messages are the per-field sentences concatenated with no
    /// separator, matching the page's error paragraph verbatim.
    pub const fn message(self) -> &'static str {
        match self {
            Self::UsernameRequired => "A username is required.",
            Self::EmailRequired => "An email is required.",
            Self::PasswordRequired => "A password is required.",
            Self::EmailAndPasswordRequired => "An email is required.A password is required.",
            Self::UsernameAndPasswordRequired => "A username is required.A password is required.",
            Self::UsernameAndEmailRequired => "A username is required.An email is required.",
            Self::AllFieldsRequired => {
                "A username is required.An email is required.A password is required."
            }
            Self::UsernameNotAlphanumeric => "Your username may only contain letters and numbers.",
            Self::InvalidEmail => "Your email must be valid.",
            Self::UsernameTaken => "That username is already taken.",
            Self::EmailTaken => "That email is already taken.",
            Self::PasswordTooShort => "Your password must be at least 6 characters long.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn usernames_are_twenty_alphanumeric_chars() {
        for _ in 0..50 {
            let username = random_username();
            assert_eq!(username.len(), USERNAME_LEN);
            assert!(username.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn spaced_username_is_base_plus_one_trailing_space() {
        for _ in 0..50 {
            let username = random_username_with_space();
            assert_eq!(username.len(), USERNAME_LEN + 1);
            assert!(username.ends_with(' '));
            let base = &username[..USERNAME_LEN];
            assert!(base.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn emails_use_the_timestamp_local_part_and_fixed_domain() {
        let email = random_email();
        let local = email.strip_suffix("@example.com").expect("fixed domain");
        let digits = local.strip_prefix("user").expect("user prefix");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn emails_at_distinct_timestamps_differ() {
        let first = random_email();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = random_email();
        assert_ne!(first, second);
    }

    #[test]
    fn message_lookup_is_idempotent() {
        let failure = ValidationFailure::AllFieldsRequired;
        assert_eq!(failure.message(), failure.message());
    }

    #[test_case(
        ValidationFailure::AllFieldsRequired,
        "A username is required.An email is required.A password is required."
    )]
    #[test_case(
        ValidationFailure::EmailAndPasswordRequired,
        "An email is required.A password is required."
    )]
    #[test_case(
        ValidationFailure::UsernameAndPasswordRequired,
        "A username is required.A password is required."
    )]
    #[test_case(
        ValidationFailure::UsernameAndEmailRequired,
        "A username is required.An email is required."
    )]
    #[test_case(
        ValidationFailure::UsernameNotAlphanumeric,
        "Your username may only contain letters and numbers."
    )]
    #[test_case(ValidationFailure::InvalidEmail, "Your email must be valid.")]
    #[test_case(ValidationFailure::UsernameTaken, "That username is already taken.")]
    #[test_case(ValidationFailure::EmailTaken, "That email is already taken.")]
    #[test_case(
        ValidationFailure::PasswordTooShort,
        "Your password must be at least 6 characters long."
    )]
    fn messages_match_the_page_verbatim(failure: ValidationFailure, expected: &str) {
        assert_eq!(failure.message(), expected);
    }

    #[test]
    fn concatenated_messages_have_no_separator() {
        let all = ValidationFailure::AllFieldsRequired.message();
        let parts = [
            ValidationFailure::UsernameRequired.message(),
            ValidationFailure::EmailRequired.message(),
            ValidationFailure::PasswordRequired.message(),
        ];
        assert_eq!(all, parts.concat());
    }
}
