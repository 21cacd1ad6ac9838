use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use crate::app::App;

pub fn draw_status_bar(f: &mut Frame, app: &mut App, area: Rect) {
    if let Some((message, timestamp)) = &app.status_message {
        // Clear messages older than 5 seconds
        if timestamp.elapsed().as_secs() < 5 {
            let lower = message.to_lowercase();
            let style = if lower.contains("error") || lower.contains("failed") {
                Style::default().fg(Color::Red)
            } else if lower.contains("created") {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };

            let paragraph = Paragraph::new(message.as_str())
                .style(style)
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
            return;
        }
        app.clear_status_message();
    }

    let directory = app.shared_directory();
    let paragraph = Paragraph::new(format!("Directory: {}", directory))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
