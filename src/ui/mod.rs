pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::draw_quiz;
pub use summary::draw_summary;

use crate::models::AppState;
use crate::view::ViewState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Draw whichever screen the view is on.
pub fn draw(f: &mut Frame, view: &ViewState) {
    match view.app_state {
        AppState::Start => draw_menu(f, view),
        AppState::Quiz => draw_quiz(f, view),
        AppState::Results => draw_summary(f, view),
    }
}

fn key_span(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
