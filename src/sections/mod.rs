//! Password scoring sections
//!
//! Each section scores a single aspect of a password. Sections return signed
//! point contributions; penalties are negative.

mod bonus;
mod length;
mod pattern;
mod variety;

pub use bonus::combined_bonus_section;
pub use length::{length_section, password_length, MIN_LENGTH};
pub use pattern::pattern_analysis_section;
pub use variety::{character_variety_section, CharClasses};

/// Points contributed by a section.
pub type SectionResult = i32;
