//! Login and registration form validation.
//!
//! These checks run on already collected field values, before anything is
//! sent to the chat backend. Error messages are the texts shown to the user.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;
use thiserror::Error;

use crate::coarse::evaluate_password_coarse;
use crate::sections::{password_length, CharClasses, MIN_LENGTH};
use crate::types::CoarseMessage;

/// Lowest coarse score accepted at registration ("Fair").
pub const MIN_REGISTRATION_SCORE: u8 = 2;

/// Character classes the password policy requires out of four.
const MIN_CLASSES: usize = 3;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Password must meet at least {required} of the 4 requirements")]
    InsufficientVariety { required: usize },
    #[error("Password is too weak: {0}")]
    PasswordTooWeak(CoarseMessage),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Login form values.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

/// Registration form values.
#[derive(Debug)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Trims form input the way browsers do: Unicode whitespace plus the byte
/// order mark, but not NEL (U+0085).
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}')
}

/// Returns `true` for `something@domain.tld` shaped addresses.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Password field rule: present, at least 8 characters, and at least 3 of the
/// 4 character classes.
pub fn check_password_policy(password: &SecretString) -> Result<(), ValidationError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password_length(pwd) < MIN_LENGTH {
        return Err(ValidationError::PasswordTooShort { min: MIN_LENGTH });
    }
    if CharClasses::detect(pwd).count() < MIN_CLASSES {
        return Err(ValidationError::InsufficientVariety {
            required: MIN_CLASSES,
        });
    }
    Ok(())
}

/// Validates a login submission. Fields are trimmed first.
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    let email = trim_field(&form.email);
    if email.is_empty() || trim_field(form.password.expose_secret()).is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if !validate_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validates a registration submission. Fields are trimmed first.
///
/// Checks run in order and the first failure wins: all fields present, email
/// shape, coarse strength of at least "Fair", confirmation match.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    let name = trim_field(&form.name);
    let email = trim_field(&form.email);
    let password = trim_field(form.password.expose_secret());
    let confirm = trim_field(form.confirm_password.expose_secret());

    if name.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if !validate_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let strength = evaluate_password_coarse(&SecretString::new(password.to_string().into()));
    if strength.score < MIN_REGISTRATION_SCORE {
        #[cfg(feature = "tracing")]
        tracing::warn!("registration rejected: password strength {}", strength.message);
        return Err(ValidationError::PasswordTooWeak(strength.message));
    }

    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn registration(name: &str, email: &str, pwd: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            email: email.to_string(),
            password: secret(pwd),
            confirm_password: secret(confirm),
        }
    }

    #[test]
    fn test_email_pattern_compiles() {
        let re = LazyLock::force(&EMAIL_RE);
        assert_eq!(re.as_str(), r"^[^\s@]+@[^\s@]+\.[^\s@]+$");
    }

    #[test]
    fn test_trim_field_matches_browser_trim() {
        assert_eq!(trim_field("\u{FEFF} user@example.com\u{FEFF}"), "user@example.com");
        assert_eq!(trim_field("\u{00A0}\u{3000}x\t\n"), "x");
        assert_eq!(trim_field("\u{0085}x"), "\u{0085}x");
    }

    #[test]
    fn test_login_strips_byte_order_mark() {
        let form = LoginForm {
            email: "\u{FEFF}user@example.com".to_string(),
            password: secret("\u{FEFF}"),
        };
        assert_eq!(validate_login(&form), Err(ValidationError::MissingCredentials));

        let form = LoginForm {
            email: "\u{FEFF}user@example.com".to_string(),
            password: secret("x"),
        };
        assert!(validate_login(&form).is_ok());
    }

    #[test]
    fn test_registration_strips_byte_order_mark() {
        let form = registration("Ada", "ada@example.com", "\u{FEFF}abcdefg1", "abcdefg1\u{FEFF}");
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a.b+c@sub.domain.org"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user example@test.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_password_policy_required() {
        assert_eq!(
            check_password_policy(&secret("")),
            Err(ValidationError::PasswordRequired)
        );
    }

    #[test]
    fn test_password_policy_too_short() {
        let err = check_password_policy(&secret("Ab1!")).unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooShort { min: 8 });
        assert_eq!(err.to_string(), "Password must be at least 8 characters");
    }

    #[test]
    fn test_password_policy_variety() {
        let err = check_password_policy(&secret("abcdefg1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must meet at least 3 of the 4 requirements"
        );
        assert!(check_password_policy(&secret("abcdefG1")).is_ok());
        assert!(check_password_policy(&secret("Abcdefgh1!")).is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            email: "  ".to_string(),
            password: secret("hunter2"),
        };
        assert_eq!(validate_login(&form), Err(ValidationError::MissingCredentials));

        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: secret("   "),
        };
        assert_eq!(validate_login(&form), Err(ValidationError::MissingCredentials));
    }

    #[test]
    fn test_login_invalid_email() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: secret("whatever"),
        };
        let err = validate_login(&form).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_login_valid() {
        let form = LoginForm {
            email: " user@example.com ".to_string(),
            password: secret("x"),
        };
        assert!(validate_login(&form).is_ok());
    }

    #[test]
    fn test_registration_missing_fields() {
        let form = registration("", "user@example.com", "Abcdefgh1!", "Abcdefgh1!");
        assert_eq!(validate_registration(&form), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_registration_invalid_email() {
        let form = registration("Ada", "ada.example.com", "Abcdefgh1!", "Abcdefgh1!");
        assert_eq!(validate_registration(&form), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_registration_weak_password() {
        let form = registration("Ada", "ada@example.com", "abcdefgh", "abcdefgh");
        let err = validate_registration(&form).unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooWeak(CoarseMessage::Weak));
        assert_eq!(err.to_string(), "Password is too weak: Weak");
    }

    #[test]
    fn test_registration_strength_checked_before_match() {
        let form = registration("Ada", "ada@example.com", "abc", "xyz");
        assert!(matches!(
            validate_registration(&form),
            Err(ValidationError::PasswordTooWeak(_))
        ));
    }

    #[test]
    fn test_registration_mismatch() {
        let form = registration("Ada", "ada@example.com", "Abcdefgh1!", "Abcdefgh1?");
        assert_eq!(validate_registration(&form), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_registration_trims_fields() {
        let form = registration(" Ada ", " ada@example.com ", " abcdefg1 ", "abcdefg1");
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn test_form_debug_hides_password() {
        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: secret("topsecret"),
        };
        assert!(!format!("{:?}", form).contains("topsecret"));
    }
}
