use super::key_span;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::truncate_string;
use crate::view::{OptionHighlight, ViewState};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, view: &ViewState) {
    let layout = calculate_quiz_chunks(f.area());

    let clock_style = if view.is_low_time() {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(
                "Question {} / {}",
                view.question_index + 1,
                view.total_questions
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from("   "),
        Span::from(view.score_text()),
        Span::from("   "),
        Span::styled(view.clock_text(), clock_style),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question = Paragraph::new(Text::from(view.question_title()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    // borders, "> ", "1. "
    let option_width = (layout.options_area.width as usize).saturating_sub(7);
    let items: Vec<ListItem> = view
        .options
        .iter()
        .zip(view.highlights.iter())
        .enumerate()
        .map(|(i, (option, highlight))| {
            let marker = if i == view.selected && !view.answer_locked() {
                "> "
            } else {
                "  "
            };
            let style = match highlight {
                OptionHighlight::Correct => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                OptionHighlight::Wrong => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                OptionHighlight::Normal if i == view.selected && !view.answer_locked() => {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                }
                OptionHighlight::Normal => Style::default(),
            };
            ListItem::new(format!(
                "{}{}. {}",
                marker,
                i + 1,
                truncate_string(option, option_width)
            ))
            .style(style)
        })
        .collect();
    let options = List::new(items).block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let feedback = match &view.feedback {
        Some(feedback) => {
            let color = if feedback.is_correct {
                Color::Green
            } else {
                Color::Red
            };
            Paragraph::new(feedback.message).style(Style::default().fg(color))
        }
        None => Paragraph::new(""),
    };
    f.render_widget(
        feedback
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        layout.feedback_area,
    );

    let help_spans = if view.answer_locked() {
        vec![
            key_span("Enter"),
            Span::from(" Next Question  "),
            key_span("Esc"),
            Span::from(" Quit"),
        ]
    } else {
        vec![
            key_span("1-4"),
            Span::from(" Answer  "),
            key_span("↑/↓"),
            Span::from(" Select  "),
            key_span("Enter"),
            Span::from(" Submit  "),
            key_span("Esc"),
            Span::from(" Quit"),
        ]
    };
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
