use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::countdown::{Countdown, CountdownSignal, CountdownState, TimerTick};
use crate::error::QuizError;
use crate::logger;
use crate::models::{
    AnswerEvaluation, FinishDetail, Question, QuizPhase, QuizSession, QuizSummary,
};
use crate::presenter::QuizPresenter;
use crate::utils::round_elapsed_seconds;
use chrono::{DateTime, Utc};

/// Source of "now" for elapsed-time reporting.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Owns the quiz session and drives it through its lifecycle.
///
/// Every operation is synchronous. Calls that don't fit the current state
/// (answering twice, advancing before answering, starting twice) are
/// ignored rather than reported.
pub struct QuizEngine<P: QuizPresenter> {
    bank: QuestionBank,
    config: QuizConfig,
    session: QuizSession,
    countdown: Countdown,
    presenter: P,
    clock: Box<dyn Clock>,
}

impl<P: QuizPresenter> QuizEngine<P> {
    pub fn new(bank: QuestionBank, config: QuizConfig, presenter: P) -> Self {
        let session = QuizSession::new(config.total_seconds);
        Self {
            bank,
            config,
            session,
            countdown: Countdown::new(),
            presenter,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the countdown, typically with one from `Countdown::with_ticker`.
    pub fn with_countdown(mut self, countdown: Countdown) -> Self {
        self.countdown = countdown;
        self
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn countdown_state(&self) -> CountdownState {
        self.countdown.state()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The question on screen, if the quiz is running.
    pub fn current_question(&self) -> Option<&Question> {
        if !self.session.is_in_progress() {
            return None;
        }
        self.bank.get(self.session.current_index).ok()
    }

    pub fn reset(&mut self) {
        self.countdown.stop();
        self.session = QuizSession::new(self.config.total_seconds);
        logger::log("Quiz reset");
        self.presenter.on_reset();
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.session.phase != QuizPhase::NotStarted {
            return Ok(());
        }

        let first = self.bank.get(0)?;
        self.session.phase = QuizPhase::InProgress;
        self.session.started_at = Some(self.clock.now());
        self.session.remaining_seconds = self.config.total_seconds;
        self.countdown.start(self.config.total_seconds);
        logger::log(&format!(
            "Quiz started: {} questions, {}s",
            self.bank.len(),
            self.config.total_seconds
        ));
        self.presenter.on_question_shown(0, first);
        Ok(())
    }

    pub fn submit_answer(&mut self, selected: &str) -> Result<(), QuizError> {
        if !self.session.is_in_progress() || self.session.locked {
            return Ok(());
        }

        let question = self.bank.get(self.session.current_index)?;
        self.session.locked = true;
        let is_correct = question.is_correct(selected);
        if is_correct {
            self.session.score += 1;
        }

        logger::log(&format!(
            "Question {} answered '{}' ({})",
            self.session.current_index + 1,
            selected,
            if is_correct { "correct" } else { "incorrect" }
        ));
        let evaluation = AnswerEvaluation {
            selected_option: selected.to_string(),
            correct_option: question.correct_option.clone(),
            is_correct,
            new_score: self.session.score,
        };
        self.presenter.on_answer_evaluated(&evaluation);
        Ok(())
    }

    pub fn advance(&mut self) -> Result<(), QuizError> {
        if !self.session.is_in_progress() || !self.session.locked {
            return Ok(());
        }

        let next = self.session.current_index + 1;
        if next < self.bank.len() {
            let question = self.bank.get(next)?;
            self.session.current_index = next;
            self.session.locked = false;
            logger::log(&format!("Advanced to question {}", next + 1));
            self.presenter.on_question_shown(next, question);
        } else {
            // every question has been displayed
            self.session.current_index = self.bank.len();
            self.finish(false);
        }
        Ok(())
    }

    /// Count down one second of the current run.
    pub fn tick(&mut self) {
        if !self.session.is_in_progress() {
            return;
        }
        let signal = self.countdown.tick();
        self.apply_countdown_signal(signal);
    }

    /// Handle a tick scheduled by the countdown's background task.
    pub fn handle_tick(&mut self, tick: TimerTick) {
        if !self.session.is_in_progress() {
            return;
        }
        let signal = self.countdown.tick_for(tick);
        self.apply_countdown_signal(signal);
    }

    fn apply_countdown_signal(&mut self, signal: Option<CountdownSignal>) {
        match signal {
            Some(CountdownSignal::Tick(remaining)) => {
                self.session.remaining_seconds = remaining;
                self.presenter.on_tick(remaining);
            }
            Some(CountdownSignal::Expired) => {
                self.session.remaining_seconds = 0;
                self.finish(true);
            }
            None => {}
        }
    }

    pub fn finish(&mut self, timed_out: bool) {
        if !self.session.is_in_progress() {
            return;
        }

        self.countdown.stop();
        let elapsed_seconds = self
            .session
            .started_at
            .map(|started| round_elapsed_seconds((self.clock.now() - started).num_milliseconds()))
            .unwrap_or(0);
        self.session.phase = QuizPhase::Finished;
        self.session.locked = false;

        let detail = if timed_out {
            FinishDetail::QuestionsAttempted(self.session.current_index)
        } else {
            FinishDetail::ElapsedSeconds(elapsed_seconds)
        };
        let summary = QuizSummary {
            score: self.session.score,
            total_questions: self.bank.len(),
            timed_out,
            detail,
        };
        logger::log(&format!(
            "Quiz finished: {}/{} timed_out={} {:?}",
            summary.score, summary.total_questions, timed_out, detail
        ));
        self.presenter.on_finished(&summary);
    }
}
