use crate::app::{App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// New folder / new file actions, only offered with the `file.create` permission.
pub fn draw_create_actions(f: &mut Frame, app: &App, area: Rect) {
    if !app.view.can_create() {
        return;
    }

    let button = Style::default().fg(Color::Black).bg(Color::Blue);
    let actions = Line::from(vec![
        Span::styled(" [n] New Folder ", button),
        Span::raw(" "),
        Span::styled(" [N] New File ", button),
    ]);
    f.render_widget(Paragraph::new(actions).alignment(Alignment::Right), area);
}

pub fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (nav_text, action_text) = match app.input_mode {
        InputMode::Normal => (
            "↑/k: Up  ↓/j: Down  [Enter] Open  [Backspace] Back",
            "[r] Reload  [?] Help  [q] Quit",
        ),
        InputMode::NewDirectory | InputMode::NewFile => {
            ("Type a name", "[Enter] Create  [Esc] Cancel")
        }
        InputMode::Help => ("↑/k ↓/j: Scroll", "[Esc] Close"),
    };

    let nav_help = Paragraph::new(nav_text).style(Style::default().fg(Color::Gray));
    let action_help = Paragraph::new(action_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Right);

    f.render_widget(nav_help, footer[0]);
    f.render_widget(action_help, footer[1]);
}
