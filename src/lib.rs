//! Password strength scoring for the chat client
//!
//! Two independent scorers back the two password meters of the client:
//!
//! - [`evaluate_password_strength`]: fine-grained 0-100 score with a label
//!   and a requirement checklist, recomputed on every keystroke
//! - [`evaluate_password_coarse`]: compact 0-4 score used by the
//!   registration form
//!
//! The [`validation`] module holds the login and registration form rules.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize`/`Deserialize` on result types
//!
//! # Example
//!
//! ```rust
//! use chat_pwd_strength::{evaluate_password_coarse, evaluate_password_strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {}/100 ({})", evaluation.score, evaluation.label);
//! for (kind, met) in evaluation.requirements.iter() {
//!     println!("[{}] {}", if met { "x" } else { " " }, kind.description());
//! }
//!
//! let coarse = evaluate_password_coarse(&password);
//! println!("Meter: {}/4 {}", coarse.score, coarse.message);
//! ```

// Internal modules
mod coarse;
mod evaluator;
mod sections;
mod types;

pub mod validation;

// Public API
pub use coarse::evaluate_password_coarse;
pub use evaluator::{evaluate_password_strength, password_requirements};
pub use types::{
    CoarseMessage, CoarseStrength, PasswordStrengthResult, RequirementKind, Requirements,
    StrengthLabel,
};
pub use validation::ValidationError;

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
