//! Header and common widget rendering
//!
//! This module contains the branded header with the step indicator, the
//! navigation bar and the help overlay hook.

use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::{KeybindingContext, NavBarItem};
use crate::theme::{Colors, Styles, Theme};
use crate::wizard::{Activity, WizardStep};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Short label for a step in the progress indicator
pub fn step_label(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Landing => "Welcome",
        WizardStep::Collecting => "Resume",
        WizardStep::JobDetails => "Job Details",
        WizardStep::Results => "Results",
    }
}

/// Header renderer containing the brand line
pub struct HeaderRenderer {
    brand: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            brand: Line::from(vec![
                Span::styled(" ✦ ", Styles::title()),
                Span::styled("ResumeAI", Styles::title()),
                Span::styled("  AI-Powered Resume Analysis", Styles::text_muted()),
            ]),
        }
    }

    /// Render the brand line, status and step indicator
    pub fn render_header(&self, f: &mut Frame, area: Rect, step: WizardStep, activity: Activity) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::border_inactive());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(24)])
            .split(rows[0]);

        f.render_widget(Paragraph::new(self.brand.clone()), top[0]);
        f.render_widget(
            Paragraph::new(status_line(activity)).alignment(Alignment::Right),
            top[1],
        );

        if rows.len() > 1 {
            f.render_widget(
                Paragraph::new(step_indicator(step)).alignment(Alignment::Center),
                rows[1],
            );
        }
    }
}

fn status_line(activity: Activity) -> Line<'static> {
    if activity.is_busy() {
        Line::from(vec![
            Span::styled("◌ ", Styles::warning()),
            Span::styled(activity.label(), Styles::warning()),
            Span::raw(" "),
        ])
    } else {
        Line::from(vec![
            Span::styled("● ", Styles::success()),
            Span::styled("AI Analysis Ready", Styles::text_secondary()),
            Span::raw(" "),
        ])
    }
}

/// "1 Welcome ─ 2 Resume ─ 3 Job Details ─ 4 Results" with per-step styling
pub fn step_indicator(current: WizardStep) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, step) in WizardStep::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ─ ", Styles::text_muted()));
        }
        let completed = step.step_number() < current.step_number();
        let active = *step == current;
        let marker = if completed {
            "✔".to_string()
        } else {
            step.step_number().to_string()
        };
        spans.push(Span::styled(
            format!("{} {}", marker, step_label(*step)),
            Theme::step_style(completed, active),
        ));
    }
    Line::from(spans)
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, items: &[NavBarItem], area: Rect) {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::nav_hint()));
        }
        spans.push(Span::styled(
            format!(" {} ", item.key_display),
            Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::FG_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, step: WizardStep, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(step, keybinding_ctx);
    help_overlay.render(f, f.area());
}
