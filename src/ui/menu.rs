use super::key_span;
use crate::utils::format_clock;
use crate::view::ViewState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Start screen.
pub fn draw_menu(f: &mut Frame, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Timed Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let mut intro = Text::default();
    intro.push_line(Line::from(""));
    intro.push_line(Line::from(format!(
        "{} questions, {} on the clock.",
        view.total_questions,
        format_clock(view.total_seconds)
    )));
    intro.push_line(Line::from(""));
    intro.push_line(Line::from(
        "Each question takes exactly one answer. The timer runs for the whole quiz.",
    ));
    intro.push_line(Line::from(""));
    intro.push_line(Line::from(Span::styled(
        view.clock_text(),
        Style::default().fg(Color::Yellow),
    )));
    let body = Paragraph::new(intro)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        key_span("Enter"),
        Span::from(" Start Quiz  "),
        key_span("q"),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
