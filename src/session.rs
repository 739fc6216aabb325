use crate::engine::QuizEngine;
use crate::error::QuizError;
use crate::models::AppState;
use crate::view::ViewState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Map a key press onto engine calls for the screen currently shown.
pub fn handle_quiz_input(
    engine: &mut QuizEngine<ViewState>,
    key: KeyEvent,
) -> Result<InputOutcome, QuizError> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(InputOutcome::Quit);
    }

    match engine.presenter().app_state {
        AppState::Start => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => engine.start()?,
            KeyCode::Esc | KeyCode::Char('q') => return Ok(InputOutcome::Quit),
            _ => {}
        },
        AppState::Quiz => {
            if engine.presenter().answer_locked() {
                match key.code {
                    KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => engine.advance()?,
                    KeyCode::Esc => return Ok(InputOutcome::Quit),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Up => engine.presenter_mut().select_previous(),
                    KeyCode::Down => engine.presenter_mut().select_next(),
                    KeyCode::Enter => {
                        if let Some(option) = engine.presenter().selected_option() {
                            let option = option.to_string();
                            engine.submit_answer(&option)?;
                        }
                    }
                    KeyCode::Char(c) => {
                        if let Some(index) = option_index_for_key(c)
                            && let Some(option) = engine.presenter().options.get(index)
                        {
                            let option = option.clone();
                            engine.presenter_mut().selected = index;
                            engine.submit_answer(&option)?;
                        }
                    }
                    KeyCode::Esc => return Ok(InputOutcome::Quit),
                    _ => {}
                }
            }
        }
        AppState::Results => match key.code {
            KeyCode::Char('r') => engine.reset(),
            KeyCode::Esc | KeyCode::Char('q') => return Ok(InputOutcome::Quit),
            _ => {}
        },
    }
    Ok(InputOutcome::Continue)
}

/// `1`-`4` or `a`-`d` pick an option directly.
fn option_index_for_key(c: char) -> Option<usize> {
    match c {
        '1'..='4' => Some(c as usize - '1' as usize),
        'a'..='d' => Some(c as usize - 'a' as usize),
        _ => None,
    }
}
