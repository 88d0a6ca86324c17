//! Character variety section - rewards lowercase, uppercase, digits and specials.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const LOWER_POINTS: SectionResult = 5;
const UPPER_POINTS: SectionResult = 5;
const DIGIT_POINTS: SectionResult = 5;
const SPECIAL_POINTS: SectionResult = 10;

/// Which ASCII character classes appear in a password.
///
/// Anything that is not an ASCII letter or digit counts as special, including
/// whitespace and non-ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharClasses {
    pub fn detect(pwd: &str) -> Self {
        pwd.chars().fold(Self::default(), |mut classes, c| {
            if c.is_ascii_lowercase() {
                classes.lower = true;
            } else if c.is_ascii_uppercase() {
                classes.upper = true;
            } else if c.is_ascii_digit() {
                classes.digit = true;
            } else {
                classes.special = true;
            }
            classes
        })
    }

    /// Number of classes present, 0 to 4.
    pub fn count(&self) -> usize {
        [self.lower, self.upper, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    pub fn all(&self) -> bool {
        self.count() == 4
    }
}

/// Awards 5 points each for lowercase, uppercase and digits, 10 for specials.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let classes = CharClasses::detect(password.expose_secret());
    let mut points = 0;
    if classes.lower {
        points += LOWER_POINTS;
    }
    if classes.upper {
        points += UPPER_POINTS;
    }
    if classes.digit {
        points += DIGIT_POINTS;
    }
    if classes.special {
        points += SPECIAL_POINTS;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_section_lowercase_only() {
        assert_eq!(character_variety_section(&secret("lowercase")), 5);
    }

    #[test]
    fn test_variety_section_special_weighs_double() {
        assert_eq!(character_variety_section(&secret("!!!")), 10);
        assert_eq!(character_variety_section(&secret("a1!")), 20);
    }

    #[test]
    fn test_variety_section_all_categories() {
        assert_eq!(character_variety_section(&secret("HasAll123!@#")), 25);
    }

    #[test]
    fn test_detect_non_ascii_is_special() {
        let classes = CharClasses::detect("café");
        assert!(classes.lower);
        assert!(classes.special);
        assert!(!classes.upper);
        assert_eq!(classes.count(), 2);
    }

    #[test]
    fn test_detect_space_is_special() {
        assert!(CharClasses::detect("two words").special);
    }

    #[test]
    fn test_detect_empty() {
        assert_eq!(CharClasses::detect(""), CharClasses::default());
        assert_eq!(CharClasses::default().count(), 0);
    }
}
