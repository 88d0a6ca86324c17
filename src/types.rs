//! Result types produced by the scorers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Qualitative label for a fine-grained (0-100) score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrengthLabel {
    /// Empty input, nothing to evaluate.
    None,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a final score onto its label.
    ///
    /// Thresholds: >=90 Very Strong, >=70 Strong, >=50 Medium, >=30 Weak,
    /// anything lower Very Weak. `None` is reserved for empty input and is
    /// never produced from a score.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => StrengthLabel::VeryStrong,
            70..=89 => StrengthLabel::Strong,
            50..=69 => StrengthLabel::Medium,
            30..=49 => StrengthLabel::Weak,
            _ => StrengthLabel::VeryWeak,
        }
    }

    /// Human readable text shown next to the meter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "None",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }

    /// Styling key for the meter. Empty input shares the `very-weak` style.
    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthLabel::None | StrengthLabel::VeryWeak => "very-weak",
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single checklist rule shown under the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RequirementKind {
    MinLength,
    HasLowercase,
    HasUppercase,
    HasDigit,
    HasSpecialChar,
}

impl RequirementKind {
    /// All rules in checklist order.
    pub const ALL: [RequirementKind; 5] = [
        RequirementKind::MinLength,
        RequirementKind::HasLowercase,
        RequirementKind::HasUppercase,
        RequirementKind::HasDigit,
        RequirementKind::HasSpecialChar,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            RequirementKind::MinLength => "At least 8 characters",
            RequirementKind::HasLowercase => "At least 1 lowercase letter",
            RequirementKind::HasUppercase => "At least 1 uppercase letter",
            RequirementKind::HasDigit => "At least 1 number",
            RequirementKind::HasSpecialChar => "At least 1 special character",
        }
    }
}

/// Satisfied/unsatisfied flag for every [`RequirementKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Requirements {
    pub min_length: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special_char: bool,
}

impl Requirements {
    pub fn get(&self, kind: RequirementKind) -> bool {
        match kind {
            RequirementKind::MinLength => self.min_length,
            RequirementKind::HasLowercase => self.has_lowercase,
            RequirementKind::HasUppercase => self.has_uppercase,
            RequirementKind::HasDigit => self.has_digit,
            RequirementKind::HasSpecialChar => self.has_special_char,
        }
    }

    /// Iterates `(kind, met)` pairs in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (RequirementKind, bool)> + '_ {
        RequirementKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    pub fn all_met(&self) -> bool {
        self.iter().all(|(_, met)| met)
    }
}

/// Fine-grained evaluation: score in `0..=100`, label and checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PasswordStrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
    pub requirements: Requirements,
}

impl PasswordStrengthResult {
    /// Result for an empty password.
    pub fn empty() -> Self {
        Self {
            score: 0,
            label: StrengthLabel::None,
            requirements: Requirements::default(),
        }
    }
}

/// Message attached to a coarse (0-4) score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoarseMessage {
    /// Empty input.
    Required,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl CoarseMessage {
    /// Message for a normalized score. Values above 4 saturate to `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => CoarseMessage::VeryWeak,
            1 => CoarseMessage::Weak,
            2 => CoarseMessage::Fair,
            3 => CoarseMessage::Good,
            _ => CoarseMessage::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoarseMessage::Required => "Password is required",
            CoarseMessage::VeryWeak => "Very weak",
            CoarseMessage::Weak => "Weak",
            CoarseMessage::Fair => "Fair",
            CoarseMessage::Good => "Good",
            CoarseMessage::Strong => "Strong",
        }
    }
}

impl fmt::Display for CoarseMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse evaluation for the compact meter: score in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoarseStrength {
    pub score: u8,
    pub message: CoarseMessage,
}
