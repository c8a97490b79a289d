//! Severity indicator selection
//!
//! The indicator is the emoji shown as the webhook's avatar:
//! - `:rage:` when any failure was reported
//! - `:neutral_face:` when only warnings were reported
//! - `:blush:` otherwise

use crate::danger::Violation;

/// Status emoji summarizing a Danger run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Angry,
    Neutral,
    Happy,
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Indicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Angry => ":rage:",
            Indicator::Neutral => ":neutral_face:",
            Indicator::Happy => ":blush:",
        }
    }
}

/// Pick the indicator for a run; first match wins: failures, then warnings.
pub fn select_indicator(failures: &[Violation], warnings: &[Violation]) -> Indicator {
    if !failures.is_empty() {
        Indicator::Angry
    } else if !warnings.is_empty() {
        Indicator::Neutral
    } else {
        Indicator::Happy
    }
}
