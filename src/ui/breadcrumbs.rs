use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::helpers::breadcrumb_segments;

pub fn draw_breadcrumbs(f: &mut Frame, app: &App, area: Rect) {
    let server = app.view.server();
    let segments = breadcrumb_segments(app.view.directory());

    let mut spans = vec![
        Span::styled("/home/container", Style::default().fg(Color::Gray)),
        Span::styled("/", Style::default().fg(Color::DarkGray)),
    ];

    let last = segments.len().saturating_sub(1);
    for (i, (label, _path)) in segments.iter().enumerate() {
        let style = if i == last {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(label.clone(), style));
        if i != last {
            spans.push(Span::styled("/", Style::default().fg(Color::DarkGray)));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" 📁 {} ", server.name))
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
