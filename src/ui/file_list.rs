use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::files::{ListingBody, MAX_DISPLAYED_FILES};
use crate::helpers::format_file_size;
use crate::models::FileObject;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_listing(f: &mut Frame, app: &mut App, area: Rect) {
    let model = app.view.view_model();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Files: {} ", model.directory))
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    match model.body {
        ListingBody::Loading => {
            let frame = (app.started_at.elapsed().as_millis() / 100) as usize % SPINNER_FRAMES.len();
            let spinner = Paragraph::new(format!("{} Loading...", SPINNER_FRAMES[frame]))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(spinner, area);
        }
        ListingBody::Failed { message } => {
            let text = vec![
                Line::from(Span::styled(
                    "An error was encountered",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(message, Style::default().fg(Color::White))),
                Line::from(""),
                Line::from(Span::styled("[r] Retry", Style::default().fg(Color::Yellow))),
            ];
            let error = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block.border_style(Style::default().fg(Color::Red)));
            f.render_widget(error, area);
        }
        ListingBody::Empty => {
            let empty = Paragraph::new("This directory seems to be empty.")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
        }
        ListingBody::Files { rows, truncated } => {
            let list_area = if truncated {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(1)])
                    .split(area);
                draw_truncation_banner(f, chunks[0]);
                chunks[1]
            } else {
                area
            };

            let items: Vec<ListItem> = rows.iter().map(|file| file_row(file)).collect();
            let list = List::new(items)
                .block(block)
                .highlight_symbol("> ")
                .highlight_style(
                    Style::default()
                        .bg(Color::Green)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_stateful_widget(list, list_area, &mut app.list_state);
        }
    }
}

fn draw_truncation_banner(f: &mut Frame, area: Rect) {
    let banner = Paragraph::new(format!(
        "This directory is too large to display, limiting the output to the first {} files.",
        MAX_DISPLAYED_FILES
    ))
    .style(Style::default().bg(Color::Yellow).fg(Color::Black))
    .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn file_row(file: &FileObject) -> ListItem<'static> {
    let (icon, color) = if file.is_symlink {
        ("🔗 ", Color::Magenta)
    } else if file.is_file {
        ("📄 ", Color::White)
    } else {
        ("📁 ", Color::Blue)
    };

    let mut spans = vec![
        Span::raw(icon),
        Span::styled(file.name.clone(), Style::default().fg(color)),
    ];

    if file.is_file {
        spans.push(Span::styled(
            format!("  {}", format_file_size(file.size)),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(modified) = file.modified_at {
        spans.push(Span::styled(
            format!("  {}", modified.with_timezone(&Local).format("%b %e, %Y %H:%M")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}
