//! Coarse password strength (0-4) for the compact registration meter.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{password_length, CharClasses, MIN_LENGTH};
use crate::types::{CoarseMessage, CoarseStrength};

const LONG_LENGTH: usize = 12;
const MAX_COARSE_SCORE: usize = 4;

/// Evaluates password strength on the 0-4 scale.
///
/// One point each for 8+ characters, 12+ characters, and every character
/// class present, for a raw sum of 0 to 6. The sum is normalized with
/// `min(4, floor(sum / 1.5))`.
///
/// Empty input short-circuits to score 0 with [`CoarseMessage::Required`].
pub fn evaluate_password_coarse(password: &SecretString) -> CoarseStrength {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return CoarseStrength {
            score: 0,
            message: CoarseMessage::Required,
        };
    }

    let len = password_length(pwd);
    let mut sum = CharClasses::detect(pwd).count();
    if len >= MIN_LENGTH {
        sum += 1;
    }
    if len >= LONG_LENGTH {
        sum += 1;
    }

    // floor(sum / 1.5) in integer arithmetic
    let score = ((sum * 2) / 3).min(MAX_COARSE_SCORE) as u8;

    #[cfg(feature = "tracing")]
    tracing::debug!("coarse password score={} (raw {})", score, sum);

    CoarseStrength {
        score,
        message: CoarseMessage::from_score(score),
    }
}
