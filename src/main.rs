use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use timed_quiz::{
    handle_quiz_input, logger, ui, Countdown, InputOutcome, QuestionBank, QuizConfig, QuizEngine,
    ViewState,
};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = QuizConfig::default();
    config.validate().map_err(io::Error::other)?;
    if logger::init_with_path(&config.log_file).is_err() {
        eprintln!("warning: could not open {}", config.log_file);
    }

    let bank = QuestionBank::builtin_with_count(config.question_count).map_err(io::Error::other)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, bank, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exited with error: {}", e));
    }
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    bank: QuestionBank,
    config: QuizConfig,
) -> io::Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let view = ViewState::new(bank.len(), &config);
    let mut engine =
        QuizEngine::new(bank, config, view).with_countdown(Countdown::with_ticker(tick_tx));
    engine.reset();

    let mut events = EventStream::new();
    loop {
        terminal.draw(|f| ui::draw(f, engine.presenter()))?;

        tokio::select! {
            Some(tick) = tick_rx.recv() => engine.handle_tick(tick),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let outcome = handle_quiz_input(&mut engine, key).map_err(io::Error::other)?;
                    if outcome == InputOutcome::Quit {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
        }
    }

    logger::log("Quiz app exiting");
    Ok(())
}
