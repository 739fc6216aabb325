use crate::error::QuizError;

pub const DEFAULT_TOTAL_SECONDS: u32 = 120;
pub const DEFAULT_QUESTION_COUNT: usize = 12;
pub const DEFAULT_LOW_TIME_THRESHOLD: u32 = 10;
pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Length of the whole quiz, not per question.
    pub total_seconds: u32,
    pub question_count: usize,
    /// The clock switches to its alert style at or below this many seconds.
    pub low_time_threshold: u32,
    pub log_file: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            total_seconds: DEFAULT_TOTAL_SECONDS,
            question_count: DEFAULT_QUESTION_COUNT,
            low_time_threshold: DEFAULT_LOW_TIME_THRESHOLD,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.total_seconds == 0 {
            return Err(QuizError::InvalidConfig(
                "total_seconds must be greater than zero".to_string(),
            ));
        }
        if self.question_count == 0 {
            return Err(QuizError::InvalidConfig(
                "question_count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
