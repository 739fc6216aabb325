use thiserror::Error;

/// Errors raised by the quiz core.
///
/// Out-of-protocol calls (answering twice, advancing before answering) are
/// not errors; the engine ignores them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// A question index past the end of the bank. Always a logic defect.
    #[error("question index {index} out of range (bank has {len} questions)")]
    OutOfRange { index: usize, len: usize },

    #[error("question bank is empty")]
    EmptyBank,

    #[error("invalid question '{prompt}': {reason}")]
    InvalidQuestion { prompt: String, reason: String },

    #[error("invalid quiz configuration: {0}")]
    InvalidConfig(String),
}
