//! Pattern analysis section - penalizes ascending runs and repeated characters.

use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;
use super::SectionResult;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const RUN_LENGTH: usize = 3;
const REPEAT_LENGTH: usize = 3;
const PATTERN_PENALTY: SectionResult = -10;

/// Line terminators never take part in a repetition.
const LINE_TERMINATORS: [u16; 4] = [0x000A, 0x000D, 0x2028, 0x2029];

/// Every 3-character ascending window of the alphabet and of the digits:
/// "abc" through "xyz" and "012" through "789". No wrap-around.
static ASCENDING_RUNS: LazyLock<Vec<String>> = LazyLock::new(|| {
    [ALPHABET, DIGITS]
        .iter()
        .flat_map(|seq| {
            let chars: Vec<char> = seq.chars().collect();
            chars
                .windows(RUN_LENGTH)
                .map(|w| w.iter().collect::<String>())
                .collect::<Vec<_>>()
        })
        .collect()
});

/// Returns `true` if the password contains any run from the table, ignoring case.
pub fn has_ascending_run(pwd: &str) -> bool {
    let lowered = pwd.to_ascii_lowercase();
    ASCENDING_RUNS.iter().any(|run| lowered.contains(run.as_str()))
}

/// Case-folds a UTF-16 unit to its single-unit uppercase form.
///
/// Units whose uppercase spans several units, and non-ASCII units whose
/// uppercase is ASCII (`ſ` to `S`), are left alone. Surrogate halves fold to
/// themselves.
fn fold_unit(unit: u16) -> u16 {
    let Some(c) = char::from_u32(u32::from(unit)) else {
        return unit;
    };
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => match u16::try_from(u32::from(u)) {
            Ok(folded) if unit < 0x80 || folded >= 0x80 => folded,
            _ => unit,
        },
        _ => unit,
    }
}

/// Returns `true` if any UTF-16 unit appears 3+ times in a row, ignoring case.
///
/// Works on UTF-16 units, so a repeated emoji (a surrogate pair) is not a
/// repetition. Line terminators break a run.
pub fn has_repetition(pwd: &str) -> bool {
    let mut prev: Option<u16> = None;
    let mut repeated = 0;
    for unit in pwd.encode_utf16() {
        if LINE_TERMINATORS.contains(&unit) {
            prev = None;
            continue;
        }
        let folded = fold_unit(unit);
        repeated = if prev == Some(folded) { repeated + 1 } else { 1 };
        if repeated >= REPEAT_LENGTH {
            return true;
        }
        prev = Some(folded);
    }
    false
}

/// Subtracts 10 points for an ascending run and 10 for a repetition.
pub fn pattern_analysis_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let mut penalty = 0;
    if has_ascending_run(pwd) {
        penalty += PATTERN_PENALTY;
    }
    if has_repetition(pwd) {
        penalty += PATTERN_PENALTY;
    }
    penalty
}
