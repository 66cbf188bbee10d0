//! The problems system is how translators deal with invalid input configuration.
//!
//! Out-of-range numbers are clamped and overlong texts are dropped instead of
//! failing the whole write. Every such correction is recorded as a
//! [`HandledProblem`], together with the action that was taken. Callers that
//! don't care can simply discard the problems.

use crate::Range;

pub type Problems = Vec<HandledProblem>;

/// A recoverable problem in an input configuration and the action taken to
/// recover from it.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{p}; {action}")]
pub struct HandledProblem {
    p: Problem,
    pub action: String,
}

/// A recoverable kind of problem in an input configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Problem {
    #[error("value {value} of '{key}' is outside of {range}")]
    ValueOutOfRange {
        key: String,
        value: f64,
        range: Range<f64>,
    },
    #[error("'{key}' has {length} characters, but at most {max} are allowed")]
    TextTooLong {
        key: String,
        length: usize,
        max: usize,
    },
    #[error("'{key}' can't be interpreted as {expected}")]
    UnexpectedType { key: String, expected: &'static str },
}

impl Problem {
    /// Specify what action was taken to resolve the problem and then push it
    /// onto the problems.
    pub fn handled_by<T: Into<String>>(self, action: T, problems: &mut Problems) {
        let handled = HandledProblem {
            p: self,
            action: action.into(),
        };
        tracing::debug!(problem = %handled, "handled configuration problem");
        problems.push(handled);
    }

    /// The configuration key the problem occurred at.
    pub fn key(&self) -> &str {
        match self {
            Problem::ValueOutOfRange { key, .. }
            | Problem::TextTooLong { key, .. }
            | Problem::UnexpectedType { key, .. } => key,
        }
    }
}

impl HandledProblem {
    pub fn problem(&self) -> &Problem {
        &self.p
    }
}
