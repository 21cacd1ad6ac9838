use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::app::{App, InputMode};

pub fn draw_prompt(f: &mut Frame, app: &App) {
    let title = match app.input_mode {
        InputMode::NewFile => " New File ",
        _ => " New Folder ",
    };

    let area = centered_rect(50, 5, f.size());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Yellow));

    let text = vec![
        Line::from(Span::styled(
            format!("in {}", app.view.directory()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Green)),
            Span::raw(app.input.as_str()),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]),
    ];

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(text).block(block), area);
}
