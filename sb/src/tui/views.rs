//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module is responsible
//! for drawing the UI based on AppState, but never modifies state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use tracing::trace;

use super::state::{AppState, InteractionMode, LoginField, LoginForm};
use crate::domain::View;

mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const FOCUS: Color = Color::Rgb(255, 215, 0); // Gold
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const PROGRESS: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const DIM: Color = Color::DarkGray;
}

/// What the content area shows, with exactly the data each screen needs
#[derive(Debug)]
pub enum Page<'a> {
    Login(&'a LoginForm),
    Planner {
        draft: &'a str,
        editing: bool,
        activities: &'a [String],
        selected: usize,
    },
    Repository {
        activities: &'a [String],
        selected: usize,
    },
    Collaboration {
        activities: &'a [String],
        selected: usize,
    },
    Analytics {
        progress: u8,
    },
}

impl<'a> Page<'a> {
    /// Resolve the page for the current state
    pub fn from_state(state: &'a AppState) -> Self {
        if !state.is_logged_in() {
            return Self::Login(&state.login);
        }
        let activities = state.tracker.activities();
        let selected = state.selection.selected_index;
        match state.current_view() {
            View::Planner => Self::Planner {
                draft: &state.planner_draft,
                editing: state.interaction_mode == InteractionMode::DraftInput,
                activities,
                selected,
            },
            View::Repository => Self::Repository { activities, selected },
            View::Collaboration => Self::Collaboration { activities, selected },
            View::Analytics => Self::Analytics {
                progress: state.tracker.progress(),
            },
        }
    }
}

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    trace!(view = ?state.current_view(), "render: called");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    match Page::from_state(state) {
        Page::Login(form) => render_login(form, frame, chunks[1]),
        Page::Planner {
            draft,
            editing,
            activities,
            selected,
        } => render_planner(draft, editing, activities, selected, frame, chunks[1]),
        Page::Repository { activities, selected } => render_activity_list(
            View::Repository.display_name(),
            None,
            "Delete",
            activities,
            selected,
            frame,
            chunks[1],
        ),
        Page::Collaboration { activities, selected } => render_activity_list(
            View::Collaboration.display_name(),
            Some("Discuss your activities with peers here."),
            "Delete",
            activities,
            selected,
            frame,
            chunks[1],
        ),
        Page::Analytics { progress } => render_analytics(progress, frame, chunks[1]),
    }

    render_footer(state, frame, chunks[2]);

    if state.interaction_mode == InteractionMode::Help {
        render_help_overlay(frame, frame.area());
    }
}

/// Render header with app title and navigation tabs
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_header: called");
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(13), Constraint::Min(0)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        " StudyBuddy",
        Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, columns[0]);

    if !state.is_logged_in() {
        return;
    }

    let titles = View::ALL
        .iter()
        .map(|v| Line::from(format!("{} {}", v.position() + 1, v.tab_label())));
    let tabs = Tabs::new(titles)
        .select(state.current_view().position())
        .style(Style::default().fg(colors::DIM))
        .highlight_style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD))
        .divider("│");
    frame.render_widget(tabs, columns[1]);
}

fn render_login(form: &LoginForm, frame: &mut Frame, area: Rect) {
    trace!(focus = ?form.focus, "render_login: called");
    let area = centered_rect(50, 60, area);
    let block = Block::default()
        .title(" Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Min(0),    // Error line
        ])
        .split(inner);

    let masked = "*".repeat(form.password.chars().count());
    render_input(
        "Username",
        &form.username,
        form.focus == LoginField::Username,
        frame,
        rows[0],
    );
    render_input("Password", &masked, form.focus == LoginField::Password, frame, rows[1]);

    if let Some(error) = &form.error {
        let line = Paragraph::new(Span::styled(error.as_str(), Style::default().fg(colors::ERROR)))
            .wrap(Wrap { trim: true });
        frame.render_widget(line, rows[2]);
    }
}

fn render_input(label: &str, value: &str, focused: bool, frame: &mut Frame, area: Rect) {
    let border = if focused { colors::FOCUS } else { colors::DIM };
    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors::FOCUS)));
    }
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}

fn render_planner(
    draft: &str,
    editing: bool,
    activities: &[String],
    selected: usize,
    frame: &mut Frame,
    area: Rect,
) {
    trace!(editing, count = activities.len(), "render_planner: called");
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    if draft.is_empty() && !editing {
        let placeholder = Paragraph::new(Span::styled(
            "Add a new activity...",
            Style::default().fg(colors::DIM),
        ))
        .block(
            Block::default()
                .title(format!(" {} ", View::Planner.display_name()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::DIM)),
        );
        frame.render_widget(placeholder, rows[0]);
    } else {
        render_input(View::Planner.display_name(), draft, editing, frame, rows[0]);
    }

    render_activity_list("Activities", None, "Remove", activities, selected, frame, rows[1]);
}

/// Activity rows with a per-row remove control on the selected row
fn render_activity_list(
    title: &str,
    subtitle: Option<&str>,
    action: &str,
    activities: &[String],
    selected: usize,
    frame: &mut Frame,
    area: Rect,
) {
    trace!(%title, count = activities.len(), selected, "render_activity_list: called");
    let block = Block::default()
        .title(format!(" {} [{}] ", title, activities.len()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let list_area = match subtitle {
        Some(text) => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(0)])
                .split(inner);
            frame.render_widget(Paragraph::new(text), parts[0]);
            parts[1]
        }
        None => inner,
    };

    if activities.is_empty() {
        render_empty_message(frame, list_area, "No activities yet");
        return;
    }

    let items: Vec<ListItem> = activities
        .iter()
        .enumerate()
        .map(|(i, activity)| {
            let mut spans = vec![Span::raw(activity.as_str())];
            if i == selected {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(format!("[{}]", action), Style::default().fg(colors::KEYBIND)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(colors::SELECTED_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn render_analytics(progress: u8, frame: &mut Frame, area: Rect) {
    trace!(progress, "render_analytics: called");
    let block = Block::default()
        .title(format!(" {} ", View::Analytics.display_name()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new("Your progress:"), rows[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(colors::PROGRESS))
        .percent(u16::from(progress))
        .label(format!("{}%", progress));
    frame.render_widget(gauge, rows[1]);
}

/// Render footer with keybinds, command input or transient error
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_footer: called");
    let block = Block::default().borders(Borders::ALL);

    let line = if let Some(error) = &state.error_message {
        Line::from(Span::styled(error.as_str(), Style::default().fg(colors::ERROR)))
    } else if let Some(buf) = state.interaction_mode.input_buffer() {
        Line::from(vec![
            Span::styled(":", Style::default().fg(colors::KEYBIND)),
            Span::raw(buf),
            Span::styled("█", Style::default().fg(colors::KEYBIND)),
        ])
    } else {
        let binds: &[(&str, &str)] = if !state.is_logged_in() {
            &[("Tab", "switch field"), ("Enter", "login"), ("Ctrl+C", "quit")]
        } else if state.interaction_mode == InteractionMode::DraftInput {
            &[("Enter", "add"), ("Esc", "done")]
        } else if state.current_view() == View::Planner {
            &[("i", "type"), ("j/k", "select"), ("d", "remove"), ("1-4", "view"), ("?", "help"), ("q", "quit")]
        } else if state.current_view().is_list_view() {
            &[("j/k", "select"), ("d", "delete"), ("1-4", "view"), ("?", "help"), ("q", "quit")]
        } else {
            &[("1-4", "view"), (":", "command"), ("?", "help"), ("q", "quit")]
        };
        Line::from(
            binds
                .iter()
                .flat_map(|(key, desc)| {
                    [
                        Span::styled(format!("<{}>", key), Style::default().fg(colors::KEYBIND)),
                        Span::raw(format!(" {}  ", desc)),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    trace!("render_help_overlay: called");
    let area = centered_rect(60, 70, area);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled("Navigation", Style::default().add_modifier(Modifier::BOLD))),
        key_line("1-4 / F1-F4", "Planner, Repository, Collaboration, Analytics"),
        key_line("Tab / S-Tab", "Next / previous view"),
        key_line(":", "Command (planner, repo, collab, analytics, quit)"),
        Line::from(""),
        Line::from(Span::styled("Lists", Style::default().add_modifier(Modifier::BOLD))),
        key_line("j/k ↑/↓", "Move selection"),
        key_line("g/G", "First / last"),
        key_line("d x Del", "Remove selected activity"),
        Line::from(""),
        Line::from(Span::styled("Planner", Style::default().add_modifier(Modifier::BOLD))),
        key_line("i a Enter", "Type a new activity"),
        key_line("Enter", "Add (while typing)"),
        key_line("Esc", "Stop typing"),
        Line::from(""),
        key_line("?", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::HEADER)),
    );
    frame.render_widget(help, area);
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(colors::KEYBIND)),
        Span::raw("  "),
        Span::raw(desc),
    ])
}

fn render_empty_message(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
