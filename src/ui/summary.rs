use super::key_span;
use crate::ui::layout::calculate_summary_chunks;
use crate::view::ViewState;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, view: &ViewState) {
    let layout = calculate_summary_chunks(f.area());

    let title_style = if view.summary.as_ref().is_some_and(|s| s.timed_out) {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let title = Paragraph::new(view.clock_text())
        .style(title_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(title, layout.header_area);

    let mut summary_text = Text::default();
    if let Some((score_line, detail_line)) = view.result_lines() {
        summary_text.push_line(Line::from(""));
        summary_text.push_line(Line::from(Span::styled(
            score_line,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        summary_text.push_line(Line::from(""));
        summary_text.push_line(Line::from(detail_line));
    }
    let summary = Paragraph::new(summary_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let help = Paragraph::new(Line::from(vec![
        key_span("r"),
        Span::from(" Restart  "),
        key_span("q"),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
