mod breadcrumbs;
mod file_list;
mod footer;
mod help_popup;
mod prompt;
mod status_bar;

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, InputMode};

pub fn draw<B: Backend>(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Breadcrumbs
                Constraint::Min(3),    // Listing
                Constraint::Length(1), // Create actions
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Footer
            ]
            .as_ref(),
        )
        .split(f.size());

    breadcrumbs::draw_breadcrumbs(f, app, chunks[0]);
    file_list::draw_listing(f, app, chunks[1]);
    footer::draw_create_actions(f, app, chunks[2]);
    status_bar::draw_status_bar(f, app, chunks[3]);
    footer::draw_footer(f, app, chunks[4]);

    match app.input_mode {
        InputMode::NewDirectory | InputMode::NewFile => prompt::draw_prompt(f, app),
        InputMode::Help => help_popup::render_help_popup(f, app),
        InputMode::Normal => {}
    }
}

/// Center a rectangle of `percent_x` width and fixed `height` inside `r`.
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length((r.height.saturating_sub(height)) / 2),
                Constraint::Length(height),
                Constraint::Length((r.height.saturating_sub(height)) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
