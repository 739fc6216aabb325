#[cfg(test)]
mod ui_integration_tests {
    use crate::countdown::Countdown;
    use crate::session::{handle_quiz_input, InputOutcome};
    use crate::view::OptionHighlight;
    use crate::{AppState, QuestionBank, QuizConfig, QuizEngine, ViewState};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn create_test_engine() -> QuizEngine<ViewState> {
        let bank = QuestionBank::builtin().unwrap();
        let config = QuizConfig::default();
        let view = ViewState::new(bank.len(), &config);
        let mut engine = QuizEngine::new(bank, config, view);
        engine.reset();
        engine
    }

    fn press(engine: &mut QuizEngine<ViewState>, code: KeyCode) -> InputOutcome {
        handle_quiz_input(engine, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    /// Render the current view and flatten the buffer into one string.
    fn render(engine: &QuizEngine<ViewState>) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| crate::ui::draw(f, engine.presenter()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_start_screen_renders() {
        let engine = create_test_engine();
        let screen = render(&engine);
        assert!(screen.contains("Timed Quiz"));
        assert!(screen.contains("12 questions, 02:00 on the clock."));
        assert!(screen.contains("Start Quiz"));
    }

    #[test]
    fn test_question_screen_renders() {
        let mut engine = create_test_engine();
        press(&mut engine, KeyCode::Enter);

        let screen = render(&engine);
        assert!(screen.contains("Question 1 / 12"));
        assert!(screen.contains("Q1: What chemical element has the atomic number 6?"));
        assert!(screen.contains("2. Carbon"));
        assert!(screen.contains("Time: 02:00"));
        assert!(screen.contains("Score: 0"));
    }

    #[test]
    fn test_feedback_renders_after_wrong_answer() {
        let mut engine = create_test_engine();
        press(&mut engine, KeyCode::Enter);
        press(&mut engine, KeyCode::Char('1'));

        assert_eq!(
            engine.presenter().highlights[..2],
            [OptionHighlight::Wrong, OptionHighlight::Correct]
        );
        let screen = render(&engine);
        assert!(screen.contains("Incorrect. The correct answer is highlighted."));
        assert!(screen.contains("Next Question"));
    }

    #[test]
    fn test_clock_renders_countdown() {
        let mut engine = create_test_engine();
        press(&mut engine, KeyCode::Enter);
        for _ in 0..111 {
            engine.tick();
        }
        assert!(engine.presenter().is_low_time());
        assert!(render(&engine).contains("Time: 00:09"));
    }

    #[test]
    fn test_full_run_all_correct() {
        let mut engine = create_test_engine();
        press(&mut engine, KeyCode::Enter);

        while engine.presenter().app_state == AppState::Quiz {
            let answer = engine.current_question().unwrap().correct_option.clone();
            engine.submit_answer(&answer).unwrap();
            press(&mut engine, KeyCode::Enter);
        }

        assert_eq!(engine.presenter().app_state, AppState::Results);
        let screen = render(&engine);
        assert!(screen.contains("You scored 12 out of 12 questions!"));
        assert!(screen.contains("You completed the quiz in"));
    }

    #[test]
    fn test_timeout_results_screen() {
        let mut engine = create_test_engine();
        press(&mut engine, KeyCode::Enter);
        // three right, two wrong
        for key in ['2', '3', '2', '2', '2'] {
            press(&mut engine, KeyCode::Char(key));
            press(&mut engine, KeyCode::Enter);
        }
        for _ in 0..120 {
            engine.tick();
        }

        let screen = render(&engine);
        assert!(screen.contains("TIME UP!"));
        assert!(screen.contains("You scored 3 out of 12 questions!"));
        assert!(screen.contains("Time ran out! You answered 5 questions."));
    }

    #[test]
    fn test_restart_returns_to_start_screen() {
        let mut engine = create_test_engine();
        press(&mut engine, KeyCode::Enter);
        for _ in 0..120 {
            engine.tick();
        }
        press(&mut engine, KeyCode::Char('r'));

        assert_eq!(engine.presenter().app_state, AppState::Start);
        assert!(render(&engine).contains("Time: 02:00"));
        assert_eq!(press(&mut engine, KeyCode::Char('q')), InputOutcome::Quit);
    }

    /// Ticks arrive through the same channel the terminal loop listens on.
    #[tokio::test(start_paused = true)]
    async fn test_scheduled_ticks_drive_the_clock() {
        let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
        let bank = QuestionBank::builtin_with_count(2).unwrap();
        let config = QuizConfig {
            total_seconds: 3,
            ..QuizConfig::default()
        };
        let view = ViewState::new(bank.len(), &config);
        let mut engine =
            QuizEngine::new(bank, config, view).with_countdown(Countdown::with_ticker(tick_tx));
        engine.reset();
        engine.start().unwrap();

        while engine.presenter().app_state == AppState::Quiz {
            let tick = tick_rx.recv().await.unwrap();
            engine.handle_tick(tick);
        }

        let view = engine.presenter();
        assert_eq!(view.app_state, AppState::Results);
        assert_eq!(view.clock_text(), "Time: 00:00 - TIME UP!");
        assert_eq!(
            view.result_lines().unwrap().1,
            "Time ran out! You answered 0 questions."
        );
    }
}
