//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module is responsible
//! for drawing the UI based on AppState, but never modifies state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, Wrap};
use tracing::trace;

use crate::domain::{Attendance, Task};

use super::state::{AdminTab, AiField, AppState, DetailsField, RsvpField, View};

/// Palette for the two audiences: warm accents for guests, the planner
/// dashboard closer to a terminal dashboard
mod colors {
    use ratatui::style::Color;

    pub const ACCENT: Color = Color::Rgb(219, 112, 147); // Pale violet red
    pub const HEADER: Color = Color::Rgb(255, 182, 193); // Light pink
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DONE: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const OPEN: Color = Color::Rgb(255, 215, 0); // Gold
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const DIM: Color = Color::DarkGray;
}

/// Get color for an attendance choice
fn attendance_color(attending: Attendance) -> Color {
    trace!(%attending, "attendance_color: called");
    match attending {
        Attendance::Yes => colors::DONE,
        Attendance::No => colors::ERROR,
        Attendance::Maybe => colors::OPEN,
    }
}

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    trace!(?state.view, "render: called");
    // Create main layout: header, content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    match state.view {
        View::Landing => render_landing(state, frame, chunks[1]),
        View::Details => render_details(state, frame, chunks[1]),
        View::Rsvp => render_rsvp(state, frame, chunks[1]),
        View::AdminLogin => render_login(state, frame, chunks[1]),
        View::AdminDashboard => render_dashboard(state, frame, chunks[1]),
    }

    render_footer(state, frame, chunks[2]);
}

/// Render header with the site name and current screen
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_header: called");
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            "❦ Ever After",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(colors::DIM)),
        Span::styled(state.view.display_name(), Style::default().fg(colors::ACCENT)),
    ];

    // Generation indicator sits on the right edge
    let right = if state.generating { "✶ generating… " } else { "" };
    let inner_width = area.width.saturating_sub(2) as usize;
    let left_width: usize = spans.iter().map(|s| s.width()).sum();
    let padding = inner_width.saturating_sub(left_width + right.len());
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }
    if !right.is_empty() {
        spans.push(Span::styled(right, Style::default().fg(colors::OPEN)));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the guest landing screen
fn render_landing(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_landing: called");
    let details = &state.details;

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Ed", Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
            Span::styled(" & ", Style::default().fg(colors::ACCENT)),
            Span::styled("Erin", Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            "are getting married",
            Style::default().fg(colors::DIM),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(&details.date, Style::default().fg(colors::ACCENT)),
            Span::styled(" at ", Style::default().fg(colors::DIM)),
            Span::styled(&details.time, Style::default().fg(colors::ACCENT)),
        ]),
        Line::from(Span::raw(&details.location_name)),
        Line::from(""),
        Line::from(Span::styled(
            "We would be honored to have you with us.",
            Style::default().fg(colors::DIM),
        )),
    ];

    let landing = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::HEADER)),
        );
    frame.render_widget(landing, area);
}

/// Render the guest details screen (story, venue, registry)
fn render_details(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_details: called");
    let details = &state.details;

    let mut lines = vec![
        Line::from(Span::styled(
            "When & Where",
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Date:     ", Style::default().fg(colors::DIM)),
            Span::raw(&details.date),
        ]),
        Line::from(vec![
            Span::styled("  Time:     ", Style::default().fg(colors::DIM)),
            Span::raw(&details.time),
        ]),
        Line::from(vec![
            Span::styled("  Venue:    ", Style::default().fg(colors::DIM)),
            Span::raw(&details.location_name),
        ]),
        Line::from(vec![
            Span::styled("  Address:  ", Style::default().fg(colors::DIM)),
            Span::raw(&details.address),
        ]),
    ];

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Our Story",
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
    )));
    if details.our_story.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Our story is still being written... ask us in person!",
            Style::default().fg(colors::DIM),
        )));
    } else {
        for story_line in details.our_story.lines() {
            lines.push(Line::from(format!("  {}", story_line)));
        }
    }

    if !details.registry_url.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Registry: ", Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(&details.registry_url, Style::default().fg(Color::Cyan)),
        ]));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Our Story & Details ")
                .border_style(Style::default().fg(colors::HEADER)),
        );
    frame.render_widget(body, area);
}

/// Render the RSVP form or, once posted, the confirmation screen
fn render_rsvp(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!(submitted = state.submitted, "render_rsvp: called");
    if state.submitted {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Thank you!",
                Style::default().fg(colors::DONE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::raw("Your RSVP has been recorded.")),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to return home.",
                Style::default().fg(colors::DIM),
            )),
        ];
        let confirmation = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" RSVP ")
                    .border_style(Style::default().fg(colors::DONE)),
            );
        frame.render_widget(confirmation, area);
        return;
    }

    let form = &state.rsvp_form;
    let mut lines = vec![
        form_field_line("Name", &form.name, form.field == RsvpField::Name),
        form_field_line("Email", &form.email, form.field == RsvpField::Email),
        choice_field_line(
            "Attending",
            form.attending.as_str(),
            attendance_color(form.attending),
            form.field == RsvpField::Attending,
        ),
    ];

    // Party size only applies to accepted invitations
    let guests_count = form.guests_count.to_string();
    if form.attending == Attendance::Yes {
        lines.push(choice_field_line(
            "Party size",
            &guests_count,
            Color::White,
            form.field == RsvpField::Guests,
        ));
    }

    lines.push(form_field_line(
        "Dietary restrictions",
        &form.dietary,
        form.field == RsvpField::Dietary,
    ));
    lines.push(form_field_line("Song request", &form.song, form.field == RsvpField::Song));

    if let Some(ref error) = form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(colors::ERROR),
        )));
    }

    let rsvp = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" RSVP ")
            .border_style(Style::default().fg(colors::HEADER)),
    );
    frame.render_widget(rsvp, area);
}

/// One editable text row: label, value, blinking cursor when focused
fn form_field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::DIM)
    };
    let mut spans = vec![
        Span::styled(format!("  {:<22}", label), label_style),
        Span::raw(value),
    ];
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}

/// One cycling row (attendance, party size): ◂ value ▸ when focused
fn choice_field_line<'a>(label: &'a str, value: &'a str, color: Color, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::DIM)
    };
    let mut spans = vec![Span::styled(format!("  {:<22}", label), label_style)];
    if focused {
        spans.push(Span::styled("◂ ", Style::default().fg(colors::DIM)));
    }
    spans.push(Span::styled(value.to_string(), Style::default().fg(color)));
    if focused {
        spans.push(Span::styled(" ▸", Style::default().fg(colors::DIM)));
    }
    Line::from(spans)
}

/// Render the planner password prompt as a centered box
fn render_login(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_login: called");
    let popup_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup_area);

    let masked = "•".repeat(state.login_input.chars().count());
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::raw("Enter the planner password:")),
        Line::from(""),
        Line::from(vec![
            Span::styled("  > ", Style::default().fg(colors::KEYBIND)),
            Span::raw(masked),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
    ];
    if state.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Incorrect password. Please try again.",
            Style::default().fg(colors::ERROR),
        )));
    }

    let login = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Planner Access ")
            .border_style(Style::default().fg(colors::ACCENT)),
    );
    frame.render_widget(login, popup_area);
}

/// Render the dashboard: tab bar on top, the active panel below
fn render_dashboard(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!(?state.admin_tab, "render_dashboard: called");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Panel
        ])
        .split(area);

    // Tab bar
    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in AdminTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(colors::DIM)));
        }
        let style = if *tab == state.admin_tab {
            Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::DIM)
        };
        spans.push(Span::styled(tab.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    match state.admin_tab {
        AdminTab::Tasks => render_tasks_panel(state, frame, chunks[1]),
        AdminTab::Rsvps => render_rsvps_panel(state, frame, chunks[1]),
        AdminTab::Details => render_config_panel(state, frame, chunks[1]),
        AdminTab::AiTools => render_ai_panel(state, frame, chunks[1]),
    }
}

/// Render the task checklist panel
fn render_tasks_panel(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!(tasks = state.tasks.len(), "render_tasks_panel: called");
    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let style = if i == state.selected_task {
                Style::default().bg(colors::SELECTED_BG)
            } else {
                Style::default()
            };
            ListItem::new(task_line(task)).style(style)
        })
        .collect();

    let title = format!(" {} ({}) ", state.admin_tab.title(), state.tasks.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(colors::KEYBIND)),
    );
    frame.render_widget(list, area);

    if state.tasks.is_empty() && state.task_input.is_none() {
        render_empty_message(frame, area, "No tasks yet. Press [a] to add one, or 1-4 to generate.");
    }
}

fn task_line(task: &Task) -> Line<'_> {
    let (icon, icon_color) = if task.is_completed {
        ("✓", colors::DONE)
    } else {
        ("○", colors::OPEN)
    };
    let title_style = if task.is_completed {
        Style::default().fg(colors::DIM).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(icon, Style::default().fg(icon_color)),
        Span::raw(" "),
        Span::styled(&task.title, title_style),
        Span::styled(format!("  [{}]", task.category.as_str()), Style::default().fg(colors::DIM)),
    ];
    if let Some(ref description) = task.description {
        spans.push(Span::styled(format!("  {}", description), Style::default().fg(colors::DIM)));
    }
    Line::from(spans)
}

/// Render the guest roster panel: summary strip plus response table
fn render_rsvps_panel(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!(rsvps = state.rsvps.len(), "render_rsvps_panel: called");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary strip
            Constraint::Min(0),    // Table
        ])
        .split(area);

    let summary = &state.summary;
    let summary_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{} attending", summary.accepted), Style::default().fg(colors::DONE)),
        Span::styled(" │ ", Style::default().fg(colors::DIM)),
        Span::styled(format!("{} declined", summary.declined), Style::default().fg(colors::ERROR)),
        Span::styled(" │ ", Style::default().fg(colors::DIM)),
        Span::styled(format!("{} maybe", summary.maybe), Style::default().fg(colors::OPEN)),
        Span::styled(" │ ", Style::default().fg(colors::DIM)),
        Span::styled(
            format!("{} confirmed guests", summary.confirmed_guests),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(summary_line).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let rows: Vec<Row> = state
        .rsvps
        .iter()
        .enumerate()
        .map(|(i, rsvp)| {
            let row_style = if i == state.selected_rsvp {
                Style::default().bg(colors::SELECTED_BG)
            } else {
                Style::default()
            };
            Row::new(vec![
                rsvp.name.clone(),
                rsvp.email.clone(),
                rsvp.attending.to_string(),
                rsvp.confirmed_party_size()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                rsvp.dietary_restrictions.clone().unwrap_or_default(),
                rsvp.song_request.clone().unwrap_or_default(),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Min(16),    // NAME
        Constraint::Min(20),    // EMAIL
        Constraint::Length(9),  // ATTENDING
        Constraint::Length(6),  // GUESTS
        Constraint::Min(12),    // DIETARY
        Constraint::Min(12),    // SONG
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["NAME", "EMAIL", "ATTENDING", "GUESTS", "DIETARY", "SONG"])
                .style(Style::default().add_modifier(Modifier::BOLD).fg(colors::KEYBIND)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", state.admin_tab.title(), state.rsvps.len()))
                .border_style(Style::default().fg(colors::KEYBIND)),
        );
    frame.render_widget(table, chunks[1]);

    if state.rsvps.is_empty() {
        render_empty_message(frame, chunks[1], "No responses yet.");
    }
}

/// Render the event configuration panel
fn render_config_panel(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!(?state.details_field, "render_config_panel: called");
    let lines: Vec<Line> = DetailsField::ALL
        .iter()
        .map(|field| {
            form_field_line(
                field.label(),
                field.value(&state.details),
                *field == state.details_field,
            )
        })
        .collect();

    let mut all_lines = vec![
        Line::from(Span::styled(
            "  Edits are saved as you type.",
            Style::default().fg(colors::DIM),
        )),
        Line::from(""),
    ];
    all_lines.extend(lines);

    let config = Paragraph::new(all_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", state.admin_tab.title()))
            .border_style(Style::default().fg(colors::KEYBIND)),
    );
    frame.render_widget(config, area);
}

/// Render the AI tools panel: vow assistant above, thank-you notes below
fn render_ai_panel(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!(?state.ai_field, "render_ai_panel: called");
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Vows
            Constraint::Percentage(50), // Thank-you notes
        ])
        .split(area);

    // === Vow generator ===
    let vow = &state.vow_form;
    let mut vow_lines = vec![
        form_field_line("Partner's name", &vow.partner, state.ai_field == AiField::VowPartner),
        choice_field_line(
            "Tone",
            vow.tone(),
            colors::ACCENT,
            state.ai_field == AiField::VowTone,
        ),
        form_field_line("Memories / traits", &vow.memories, state.ai_field == AiField::VowMemories),
    ];
    if let Some(ref text) = state.generated_vow {
        vow_lines.push(Line::from(""));
        for text_line in text.lines() {
            vow_lines.push(Line::from(format!("  {}", text_line)));
        }
    }
    let vow_border = if state.ai_field.in_vow_section() {
        Style::default().fg(colors::KEYBIND)
    } else {
        Style::default().fg(colors::DIM)
    };
    let vows = Paragraph::new(vow_lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Vow Generator ")
            .border_style(vow_border),
    );
    frame.render_widget(vows, chunks[0]);

    // === Thank-you notes ===
    let note = &state.note_form;
    let mut note_lines = vec![
        form_field_line("Guest name", &note.guest, state.ai_field == AiField::NoteGuest),
        form_field_line("Gift received", &note.gift, state.ai_field == AiField::NoteGift),
    ];
    if let Some(ref text) = state.generated_note {
        note_lines.push(Line::from(""));
        for text_line in text.lines() {
            note_lines.push(Line::from(format!("  {}", text_line)));
        }
    }
    let note_border = if state.ai_field.in_vow_section() {
        Style::default().fg(colors::DIM)
    } else {
        Style::default().fg(colors::KEYBIND)
    };
    let notes = Paragraph::new(note_lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Thank You Notes ")
            .border_style(note_border),
    );
    frame.render_widget(notes, chunks[1]);
}

/// Render footer with context-sensitive keybinds
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_footer: called");
    // Task title entry takes over the footer
    if let Some(ref input) = state.task_input {
        let content = Line::from(vec![
            Span::styled(
                "New Task: ",
                Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD),
            ),
            Span::raw(input.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            Span::styled("  (Enter to create, Esc to cancel)", Style::default().fg(colors::DIM)),
        ]);
        let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
        return;
    }

    // Errors and notices win over keybind hints
    if let Some(ref error) = state.error {
        let footer = Paragraph::new(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(colors::ERROR),
        )))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
        return;
    }
    if let Some(ref notice) = state.notice {
        let footer = Paragraph::new(Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(colors::DONE),
        )))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
        return;
    }

    let keybinds: Vec<(&str, &str)> = match state.view {
        View::Landing => vec![
            ("[r]", "RSVP"),
            ("[d]", "Details"),
            ("[a]", "Planner Login"),
            ("[q]", "Quit"),
        ],
        View::Details => vec![("[r]", "RSVP"), ("[Esc]", "Back")],
        View::Rsvp => {
            if state.submitted {
                vec![("[Enter]", "Home")]
            } else {
                vec![
                    ("[Tab]", "Next Field"),
                    ("[←→]", "Change"),
                    ("[Enter]", "Submit"),
                    ("[Esc]", "Back"),
                ]
            }
        }
        View::AdminLogin => vec![("[Enter]", "Unlock"), ("[Esc]", "Back")],
        View::AdminDashboard => match state.admin_tab {
            AdminTab::Tasks => vec![
                ("[a]", "Add"),
                ("[Space]", "Toggle"),
                ("[d]", "Delete"),
                ("[1-4]", "Generate Tasks"),
                ("[Tab]", "Next Tab"),
                ("[Esc]", "Log Out"),
            ],
            AdminTab::Rsvps => vec![("[j/k]", "Scroll"), ("[Tab]", "Next Tab"), ("[Esc]", "Log Out")],
            AdminTab::Details => vec![("[↑↓]", "Field"), ("[Tab]", "Next Tab"), ("[Esc]", "Log Out")],
            AdminTab::AiTools => vec![
                ("[↑↓]", "Field"),
                ("[Enter]", "Generate"),
                ("[Ctrl+Y]", "Copy"),
                ("[Tab]", "Next Tab"),
                ("[Esc]", "Log Out"),
            ],
        },
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in keybinds {
        spans.push(Span::styled(
            key,
            Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {} ", action)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Render empty state message
fn render_empty_message(frame: &mut Frame, area: Rect, message: &str) {
    trace!(%message, "render_empty_message: called");
    let inner = area.inner(ratatui::layout::Margin {
        horizontal: 2,
        vertical: 2,
    });

    let empty = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(empty, inner);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    trace!(percent_x, percent_y, "centered_rect: called");
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
