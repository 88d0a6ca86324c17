//! Password strength evaluator - fine-grained (0-100) scoring.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    character_variety_section, combined_bonus_section, length_section, password_length,
    pattern_analysis_section, CharClasses, SectionResult, MIN_LENGTH,
};
use crate::types::{PasswordStrengthResult, Requirements, StrengthLabel};

const MAX_SCORE: SectionResult = 100;

#[cfg(feature = "async")]
const DEBOUNCE_MS: u64 = 300;

/// Evaluates password strength on the 0-100 scale.
///
/// Scoring, in order:
/// 1. length: 2 points per character, max 25
/// 2. variety: +5 lowercase, +5 uppercase, +5 digit, +10 special
/// 3. patterns: -10 for an ascending run ("abc", "789"), -10 for a character
///    repeated 3+ times; the running total never drops below 0
/// 4. bonus: +20 for 12+ characters using all four classes, capped at 100
///
/// The checklist flags are computed from the password alone and do not
/// depend on the score. Empty input yields score 0, label `None` and no
/// satisfied requirements.
///
/// Never fails: every string, however long, produces a result.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordStrengthResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return PasswordStrengthResult::empty();
    }

    // Orchestrator: additive sections, then the combined bonus
    let sections: [(&str, fn(&SecretString) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_analysis_section),
    ];

    let mut score: SectionResult = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!("section {} contributed {} points", _section_name, points);
        score += points;
    }
    score = score.max(0);

    let bonus = combined_bonus_section(password);
    if bonus > 0 {
        score = (score + bonus).min(MAX_SCORE);
    }

    let score = score.clamp(0, MAX_SCORE) as u8;
    let label = StrengthLabel::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluated: score={} label={}", score, label);

    PasswordStrengthResult {
        score,
        label,
        requirements: password_requirements(pwd),
    }
}

/// Checklist flags for a password, independent of its score.
pub fn password_requirements(pwd: &str) -> Requirements {
    let classes = CharClasses::detect(pwd);
    Requirements {
        min_length: password_length(pwd) >= MIN_LENGTH,
        has_lowercase: classes.lower,
        has_uppercase: classes.upper,
        has_digit: classes.digit,
        has_special_char: classes.special,
    }
}

/// Debounced evaluation for keystroke-driven meters.
///
/// Waits 300 ms, then evaluates and sends the result through `tx`. Cancelling
/// `token` during the wait (typically because a newer keystroke arrived)
/// drops the evaluation and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordStrengthResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("evaluation cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use std::time::Duration;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = secret("TestPass123!");
        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation, evaluate_password_strength(&pwd));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = secret("SomePassword123!");
        evaluate_password_strength_tx(&pwd, token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let canceller = token.clone();

        let handle = tokio::spawn(async move {
            let pwd = secret("SomePassword123!");
            evaluate_password_strength_tx(&pwd, token, tx).await;
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
        handle.await.expect("task should finish");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_receiver_is_not_fatal() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let token = CancellationToken::new();

        let pwd = secret("TestPass123!");
        evaluate_password_strength_tx(&pwd, token, tx).await;
    }
}
