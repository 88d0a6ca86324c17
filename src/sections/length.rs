//! Length section - rewards length up to a cap.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Minimum length for the checklist and the registration policy.
pub const MIN_LENGTH: usize = 8;

const POINTS_PER_CHAR: usize = 2;
const MAX_LENGTH_POINTS: usize = 25;

/// Length in UTF-16 code units, the way browser input fields count it.
///
/// Characters outside the Basic Multilingual Plane (most emoji) count twice.
pub fn password_length(pwd: &str) -> usize {
    pwd.encode_utf16().count()
}

/// Awards two points per character, capped at 25.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password_length(password.expose_secret());
    (len.saturating_mul(POINTS_PER_CHAR)).min(MAX_LENGTH_POINTS) as SectionResult
}
