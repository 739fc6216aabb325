use crate::config::QuizConfig;
use crate::models::{AnswerEvaluation, AppState, FinishDetail, Question, QuizSummary};
use crate::presenter::QuizPresenter;
use crate::utils::format_clock;

pub const CORRECT_FEEDBACK: &str = "Correct! Great job.";
pub const INCORRECT_FEEDBACK: &str = "Incorrect. The correct answer is highlighted.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionHighlight {
    Normal,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: &'static str,
    pub is_correct: bool,
}

/// Terminal-side snapshot of the quiz, updated only through
/// [`QuizPresenter`] notifications.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub app_state: AppState,
    pub total_questions: usize,
    pub total_seconds: u32,
    pub low_time_threshold: u32,
    pub question_index: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub highlights: Vec<OptionHighlight>,
    /// Option under the cursor.
    pub selected: usize,
    pub feedback: Option<Feedback>,
    pub next_enabled: bool,
    pub score: usize,
    pub remaining_seconds: u32,
    pub summary: Option<QuizSummary>,
}

impl ViewState {
    pub fn new(total_questions: usize, config: &QuizConfig) -> Self {
        Self {
            app_state: AppState::Start,
            total_questions,
            total_seconds: config.total_seconds,
            low_time_threshold: config.low_time_threshold,
            question_index: 0,
            prompt: String::new(),
            options: Vec::new(),
            highlights: Vec::new(),
            selected: 0,
            feedback: None,
            next_enabled: false,
            score: 0,
            remaining_seconds: config.total_seconds,
            summary: None,
        }
    }

    pub fn question_title(&self) -> String {
        format!("Q{}: {}", self.question_index + 1, self.prompt)
    }

    pub fn clock_text(&self) -> String {
        match &self.summary {
            Some(summary) if summary.timed_out => "Time: 00:00 - TIME UP!".to_string(),
            _ => format!("Time: {}", format_clock(self.remaining_seconds)),
        }
    }

    pub fn is_low_time(&self) -> bool {
        self.remaining_seconds <= self.low_time_threshold
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn answer_locked(&self) -> bool {
        self.next_enabled
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// The two result lines: final score, then how the quiz ended.
    pub fn result_lines(&self) -> Option<(String, String)> {
        let summary = self.summary.as_ref()?;
        let score_line = format!(
            "You scored {} out of {} questions!",
            summary.score, summary.total_questions
        );
        let detail_line = match summary.detail {
            FinishDetail::QuestionsAttempted(attempted) => {
                format!("Time ran out! You answered {} questions.", attempted)
            }
            FinishDetail::ElapsedSeconds(elapsed) => {
                format!("You completed the quiz in {} seconds.", elapsed)
            }
        };
        Some((score_line, detail_line))
    }
}

impl QuizPresenter for ViewState {
    fn on_reset(&mut self) {
        self.app_state = AppState::Start;
        self.question_index = 0;
        self.prompt.clear();
        self.options.clear();
        self.highlights.clear();
        self.selected = 0;
        self.feedback = None;
        self.next_enabled = false;
        self.score = 0;
        self.remaining_seconds = self.total_seconds;
        self.summary = None;
    }

    fn on_question_shown(&mut self, index: usize, question: &Question) {
        self.app_state = AppState::Quiz;
        self.question_index = index;
        self.prompt = question.prompt.clone();
        self.options = question.options.to_vec();
        self.highlights = vec![OptionHighlight::Normal; self.options.len()];
        self.selected = 0;
        self.feedback = None;
        self.next_enabled = false;
    }

    fn on_answer_evaluated(&mut self, evaluation: &AnswerEvaluation) {
        for (option, highlight) in self.options.iter().zip(self.highlights.iter_mut()) {
            *highlight = if *option == evaluation.correct_option {
                OptionHighlight::Correct
            } else if *option == evaluation.selected_option && !evaluation.is_correct {
                OptionHighlight::Wrong
            } else {
                OptionHighlight::Normal
            };
        }
        self.feedback = Some(Feedback {
            message: if evaluation.is_correct {
                CORRECT_FEEDBACK
            } else {
                INCORRECT_FEEDBACK
            },
            is_correct: evaluation.is_correct,
        });
        self.score = evaluation.new_score;
        self.next_enabled = true;
    }

    fn on_tick(&mut self, remaining_seconds: u32) {
        self.remaining_seconds = remaining_seconds;
    }

    fn on_finished(&mut self, summary: &QuizSummary) {
        self.app_state = AppState::Results;
        self.score = summary.score;
        self.next_enabled = false;
        if summary.timed_out {
            self.remaining_seconds = 0;
        }
        self.summary = Some(summary.clone());
    }
}
