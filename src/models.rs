use crate::error::QuizError;
use chrono::{DateTime, Utc};

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_option: String,
}

impl Question {
    /// Build a question, checking that the options are distinct and that
    /// exactly one of them is the correct answer.
    pub fn new(
        prompt: &str,
        options: [&str; OPTIONS_PER_QUESTION],
        correct_option: &str,
    ) -> Result<Self, QuizError> {
        let invalid = |reason: &str| QuizError::InvalidQuestion {
            prompt: prompt.to_string(),
            reason: reason.to_string(),
        };

        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(invalid(&format!("duplicate option '{}'", option)));
            }
        }
        if !options.contains(&correct_option) {
            return Err(invalid(&format!(
                "correct option '{}' is not one of the options",
                correct_option
            )));
        }

        Ok(Self {
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct_option: correct_option.to_string(),
        })
    }

    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_option == selected
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_option)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub current_index: usize,
    pub score: usize,
    pub remaining_seconds: u32,
    /// Set once the current question has been answered, until the next one
    /// is shown.
    pub locked: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub phase: QuizPhase,
}

impl QuizSession {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            current_index: 0,
            score: 0,
            remaining_seconds: total_seconds,
            locked: false,
            started_at: None,
            phase: QuizPhase::NotStarted,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == QuizPhase::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEvaluation {
    pub selected_option: String,
    pub correct_option: String,
    pub is_correct: bool,
    pub new_score: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishDetail {
    ElapsedSeconds(u64),
    QuestionsAttempted(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total_questions: usize,
    pub timed_out: bool,
    pub detail: FinishDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Start,
    Quiz,
    Results,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new(
            "What chemical element has the atomic number 6?",
            ["Oxygen", "Carbon", "Nitrogen", "Hydrogen"],
            "Carbon",
        )
        .unwrap();
        assert_eq!(q.correct_index(), Some(1));
        assert!(q.is_correct("Carbon"));
        assert!(!q.is_correct("Oxygen"));
        assert!(!q.is_correct("carbon"));
    }

    #[test]
    fn test_question_rejects_missing_answer() {
        let err = Question::new("Pick one", ["a", "b", "c", "d"], "e").unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestion { .. }));
    }

    #[test]
    fn test_question_rejects_duplicate_options() {
        let err = Question::new("Pick one", ["a", "b", "a", "d"], "a").unwrap_err();
        match err {
            QuizError::InvalidQuestion { reason, .. } => assert!(reason.contains("duplicate")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_new_session_is_reset_state() {
        let session = QuizSession::new(120);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.remaining_seconds, 120);
        assert!(!session.locked);
        assert!(session.started_at.is_none());
        assert_eq!(session.phase, QuizPhase::NotStarted);
        assert!(!session.is_in_progress());
    }
}
