pub mod bank;
pub mod config;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod logger;
pub mod models;
pub mod presenter;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view;

mod ui_tests;

// Re-exports for convenience
pub use bank::QuestionBank;
pub use config::QuizConfig;
pub use countdown::{Countdown, CountdownSignal, CountdownState, TimerTick};
pub use engine::{Clock, QuizEngine, SystemClock};
pub use error::QuizError;
pub use models::{
    AnswerEvaluation, AppState, FinishDetail, Question, QuizPhase, QuizSession, QuizSummary,
};
pub use presenter::{NullPresenter, QuizPresenter};
pub use session::{handle_quiz_input, InputOutcome};
pub use ui::{draw, draw_menu, draw_quiz, draw_summary};
pub use view::ViewState;
