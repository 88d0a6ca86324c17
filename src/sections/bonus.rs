//! Combined bonus section - rewards long passwords that use every class.

use secrecy::{ExposeSecret, SecretString};
use super::{password_length, CharClasses, SectionResult};

const BONUS_MIN_LENGTH: usize = 12;
const COMBINED_BONUS: SectionResult = 20;

/// Awards 20 points when the password has 12+ characters and all four classes.
pub fn combined_bonus_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if password_length(pwd) >= BONUS_MIN_LENGTH && CharClasses::detect(pwd).all() {
        return COMBINED_BONUS;
    }
    0
}
