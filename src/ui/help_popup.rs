use ratatui::{
    layout::Margin,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::centered_rect;
use crate::app::App;

pub fn render_help_popup(f: &mut Frame, app: &mut App) {
    let block = Block::default()
        .title("Keyboard Shortcuts")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White));

    let size = f.size();
    let area = centered_rect(70, size.height * 7 / 10, size);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let text = get_help_text(app.view.can_create());
    let line_count = text.lines.len();

    let inner_area = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let max_scroll = line_count.saturating_sub(inner_area.height as usize) as u16;
    app.help_scroll_position = app.help_scroll_position.min(max_scroll);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .scroll((app.help_scroll_position, 0));
    f.render_widget(paragraph, inner_area);

    // Make scrollbar only appear if there is overflow
    if line_count > inner_area.height as usize {
        let mut scrollbar_state =
            ScrollbarState::new(line_count).position(app.help_scroll_position as usize);

        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            inner_area,
            &mut scrollbar_state,
        );
    }
}

fn key_line<'a>(key: &'a str, description: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<11}", key), Style::default().fg(Color::Green)),
        Span::raw(format!("- {}", description)),
    ])
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
    ))
}

fn get_help_text<'a>(can_create: bool) -> Text<'a> {
    let mut lines = vec![
        section("Browsing"),
        key_line("j, ↓", "Move down"),
        key_line("k, ↑", "Move up"),
        key_line("Enter, l", "Open directory"),
        key_line("Backspace", "Go to parent directory"),
        key_line("r", "Retry / reload listing"),
        key_line("q", "Quit"),
    ];

    if can_create {
        lines.push(Line::from(""));
        lines.push(section("Create"));
        lines.push(key_line("n", "New folder in this directory"));
        lines.push(key_line("N", "New empty file in this directory"));
        lines.push(key_line("Esc", "Cancel prompt"));
    }

    lines.push(Line::from(""));
    lines.push(section("Help Popup"));
    lines.push(key_line("?, Esc", "Close help"));
    lines.push(key_line("↑, k", "Scroll up"));
    lines.push(key_line("↓, j", "Scroll down"));

    Text::from(lines)
}
