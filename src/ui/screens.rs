//! Wizard screens for the input steps.
//!
//! - `Landing` - Introduction and call to action
//! - `Collecting` - Resume upload (file path) or pasted text
//! - `JobDetails` - Target role, experience level and job description
//!
//! Screens only read state. Every change goes through the app and the wizard
//! controller.

use crate::app::{AppState, JobField, UploadTab};
use crate::input::TextField;
use crate::intake::UploadedResume;
use crate::job::{JobContext, POPULAR_ROLES};
use crate::theme::{Colors, Styles};
use crate::wizard::{Activity, WizardStep};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

// ============================================================================
// Shared helpers
// ============================================================================

fn field_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            if focused { Styles::focused() } else { Styles::text_secondary() },
        ))
        .borders(Borders::ALL)
        .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
        .border_style(if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        })
}

/// Field text with a cursor when focused, or a muted placeholder when empty
fn field_text(field: &TextField, focused: bool, placeholder: &str) -> Vec<Line<'static>> {
    if field.value().is_empty() && !focused {
        return vec![Line::from(Span::styled(placeholder.to_string(), Styles::text_muted()))];
    }
    let text = if focused {
        field.display_with_cursor()
    } else {
        field.value().to_string()
    };
    text.split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), Styles::text())))
        .collect()
}

/// Scroll offset that keeps the last lines of a multi-line field visible
fn tail_scroll(line_count: usize, visible: u16) -> u16 {
    let visible = usize::from(visible.saturating_sub(2));
    u16::try_from(line_count.saturating_sub(visible)).unwrap_or(u16::MAX)
}

fn primary_button(label: &str, activity: Activity) -> Line<'static> {
    if activity.is_busy() {
        Line::from(Span::styled(
            format!("  ◌ {}  ", activity.label()),
            Styles::button_disabled(),
        ))
    } else {
        Line::from(Span::styled(format!("  {}  ", label), Styles::button_active()))
    }
}

fn screen_heading(step: WizardStep, subtitle: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(step.title(), Styles::title())),
        Line::from(Span::styled(subtitle.to_string(), Styles::text_secondary())),
    ]
}

/// Centered column of at most `max_width` cells
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

// ============================================================================
// Landing
// ============================================================================

const FEATURES: [(&str, &str); 3] = [
    (
        "AI-Powered Analysis",
        "Advanced algorithms analyze your resume structure and content",
    ),
    (
        "Role-Specific Feedback",
        "Tailored recommendations based on your target job role",
    ),
    (
        "Instant Improvements",
        "Get actionable suggestions to enhance your resume immediately",
    ),
];

/// Render the landing screen
pub fn render_landing_screen(f: &mut Frame, area: Rect) {
    let column = centered_column(area, 96);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(9), // hero
            Constraint::Length(1),
            Constraint::Length(6), // features
            Constraint::Min(0),
        ])
        .split(column);

    let hero = vec![
        Line::from(Span::styled(
            "✦ Powered by Advanced AI Technology",
            Style::default().fg(Colors::SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            WizardStep::Landing.title(),
            Styles::title().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Get instant, personalized feedback on your resume. Our AI analyzes structure, content,",
            Styles::text_secondary(),
        )),
        Line::from(Span::styled(
            "and keywords to help you land your dream job.",
            Styles::text_secondary(),
        )),
        Line::from(""),
        primary_button("Get Started Free  →", Activity::Idle),
        Line::from(Span::styled("press Enter", Styles::text_muted())),
    ];
    f.render_widget(
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[3]);

    for ((title, description), card) in FEATURES.iter().zip(cards.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border_inactive());
        let body = vec![
            Line::from(Span::styled(*title, Styles::text_bold())),
            Line::from(Span::styled(*description, Styles::text_secondary())),
        ];
        f.render_widget(
            Paragraph::new(body)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            *card,
        );
    }
}

// ============================================================================
// Upload
// ============================================================================

/// Render the resume upload screen
pub fn render_upload_screen(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    activity: Activity,
    current_resume: Option<&UploadedResume>,
) {
    let column = centered_column(area, 88);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // heading
            Constraint::Length(2), // tabs
            Constraint::Min(6),    // input
            Constraint::Length(1), // status line
            Constraint::Length(1), // button
        ])
        .split(column);

    f.render_widget(
        Paragraph::new(screen_heading(
            WizardStep::Collecting,
            "Choose how you'd like to submit your resume for AI-powered analysis",
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let selected = match state.upload_tab {
        UploadTab::File => 0,
        UploadTab::Paste => 1,
    };
    let tabs = Tabs::new(vec![UploadTab::File.label(), UploadTab::Paste.label()])
        .select(selected)
        .style(Styles::text_secondary())
        .highlight_style(Styles::selected())
        .divider("│");
    f.render_widget(tabs, chunks[1]);

    let input_area = chunks[2];
    match state.upload_tab {
        UploadTab::File => render_file_tab(f, input_area, state),
        UploadTab::Paste => render_paste_tab(f, input_area, state),
    }

    let status = match current_resume {
        Some(resume) => Line::from(Span::styled(
            format!(
                "Current resume: {} words from {}. Submitting again replaces it.",
                resume.word_count(),
                resume.source_kind
            ),
            Styles::text_muted(),
        )),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[3]);

    let label = match state.upload_tab {
        UploadTab::File => "Upload & Continue  (Enter)",
        UploadTab::Paste => "Analyze Resume  (Ctrl+S)",
    };
    f.render_widget(
        Paragraph::new(primary_button(label, activity)).alignment(Alignment::Center),
        chunks[4],
    );
}

fn render_file_tab(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let drop_zone = vec![
        Line::from(Span::styled("Drop your resume here", Styles::text_bold())),
        Line::from(Span::styled(
            "Or type the path to a PDF or text file",
            Styles::text_secondary(),
        )),
    ];
    f.render_widget(
        Paragraph::new(drop_zone).alignment(Alignment::Center),
        chunks[0],
    );

    let focused = true;
    let title = if state.upload_focused { "File path ◂" } else { "File path" };
    f.render_widget(
        Paragraph::new(field_text(&state.path_input, focused, "/path/to/resume.pdf"))
            .block(field_block(title, focused)),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Accepted: .pdf .txt .text .md",
            Styles::text_muted(),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_paste_tab(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = field_text(
        &state.paste_input,
        true,
        "Paste your resume content here...",
    );
    let scroll = tail_scroll(lines.len(), area.height);
    let words = state.paste_input.value().split_whitespace().count();
    let block = field_block("Resume text", true)
        .title_bottom(Line::from(format!(" {} words ", words)).alignment(Alignment::Right));
    f.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        area,
    );
}

// ============================================================================
// Job Details
// ============================================================================

/// Render the job details screen
pub fn render_job_details_screen(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    job: &JobContext,
    activity: Activity,
) {
    let column = centered_column(area, 88);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // heading
            Constraint::Length(3), // role
            Constraint::Length(3), // popular roles
            Constraint::Length(3), // level
            Constraint::Min(5),    // description
            Constraint::Length(1), // hint
            Constraint::Length(1), // button
        ])
        .split(column);

    f.render_widget(
        Paragraph::new(screen_heading(
            WizardStep::JobDetails,
            "Provide details about the position you're targeting for personalized feedback",
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let role_focused = state.job_field == JobField::Role;
    f.render_widget(
        Paragraph::new(field_text(&state.role_input, role_focused, "e.g., Senior Data Scientist"))
            .block(field_block("Target Job Role *", role_focused)),
        chunks[1],
    );

    let roles_focused = state.job_field == JobField::PopularRoles;
    let mut chips = Vec::with_capacity(POPULAR_ROLES.len() * 2);
    for (i, role) in POPULAR_ROLES.iter().enumerate() {
        let style = if roles_focused && i == state.popular_role {
            Styles::selected()
        } else if *role == job.role().trim() {
            Styles::focused()
        } else {
            Styles::text_secondary()
        };
        chips.push(Span::styled(format!(" {} ", role), style));
        chips.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(chips))
            .block(field_block("Popular roles", roles_focused))
            .scroll((0, chip_scroll(state.popular_role, chunks[2].width))),
        chunks[2],
    );

    let level_focused = state.job_field == JobField::Level;
    let level_line = match job.experience_level() {
        Some(level) => Line::from(vec![
            Span::styled("◀ ", Styles::text_muted()),
            Span::styled(level.label(), Styles::text()),
            Span::styled(" ▶", Styles::text_muted()),
        ]),
        None => Line::from(vec![
            Span::styled("◀ ", Styles::text_muted()),
            Span::styled("Select experience level", Styles::text_muted()),
            Span::styled(" ▶", Styles::text_muted()),
        ]),
    };
    f.render_widget(
        Paragraph::new(level_line).block(field_block("Experience Level", level_focused)),
        chunks[3],
    );

    let description_focused = state.job_field == JobField::Description;
    let lines = field_text(
        &state.description_input,
        description_focused,
        "Paste the job description here for more tailored feedback...",
    );
    let scroll = tail_scroll(lines.len(), chunks[4].height);
    f.render_widget(
        Paragraph::new(lines)
            .block(field_block("Job Description (Optional)", description_focused))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        chunks[4],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Including a job description will help provide more specific recommendations",
            Styles::text_muted(),
        )))
        .alignment(Alignment::Center),
        chunks[5],
    );

    f.render_widget(
        Paragraph::new(primary_button("Analyze My Resume  (Ctrl+S)", activity))
            .alignment(Alignment::Center),
        chunks[6],
    );
}

/// Horizontal scroll that keeps the highlighted chip on screen
fn chip_scroll(selected: usize, width: u16) -> u16 {
    let offset: usize = POPULAR_ROLES
        .iter()
        .take(selected)
        .map(|r| r.chars().count() + 3)
        .sum();
    let chip_end = offset + POPULAR_ROLES.get(selected).map_or(0, |r| r.chars().count() + 2);
    let visible = usize::from(width.saturating_sub(2));
    u16::try_from(chip_end.saturating_sub(visible)).unwrap_or(0)
}
