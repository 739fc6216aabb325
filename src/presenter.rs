use crate::models::{AnswerEvaluation, Question, QuizSummary};

/// Rendering side of the quiz.
///
/// The engine calls these after every state change. Implementations only
/// receive snapshots; all mutation goes back through `QuizEngine`.
pub trait QuizPresenter {
    /// Show the start view.
    fn on_reset(&mut self);

    /// Show a question, clear earlier feedback and disable "next".
    fn on_question_shown(&mut self, index: usize, question: &Question);

    /// Highlight the correct option (and a wrong selection), show feedback
    /// and enable "next".
    fn on_answer_evaluated(&mut self, evaluation: &AnswerEvaluation);

    fn on_tick(&mut self, remaining_seconds: u32);

    fn on_finished(&mut self, summary: &QuizSummary);
}

/// Presenter that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl QuizPresenter for NullPresenter {
    fn on_reset(&mut self) {}
    fn on_question_shown(&mut self, _index: usize, _question: &Question) {}
    fn on_answer_evaluated(&mut self, _evaluation: &AnswerEvaluation) {}
    fn on_tick(&mut self, _remaining_seconds: u32) {}
    fn on_finished(&mut self, _summary: &QuizSummary) {}
}
