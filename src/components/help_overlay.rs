//! Help overlay component
//!
//! Displays context-sensitive help in a centered window over the current screen.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::theme::{Colors, Styles};
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const WIDTH_PERCENT: u16 = 60;
const HEIGHT_PERCENT: u16 = 70;
const MIN_WIDTH: u16 = 44;
const MIN_HEIGHT: u16 = 12;
const MAX_WIDTH: u16 = 72;
const MAX_HEIGHT: u16 = 30;

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given step
    pub fn new(step: WizardStep, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(step);
        Self {
            content: Self::build_content(&sections, step),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], step: WizardStep) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  ResumeAI Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(
                format!(
                    "Step {} of {}: {}",
                    step.step_number(),
                    WizardStep::TOTAL_STEPS,
                    step.title()
                ),
                Style::default().fg(Colors::SECONDARY),
            ),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<12}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    /// Lines shown in the overlay
    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Centered window inside `parent`, clamped to the min/max size
    pub fn window_area(parent: Rect) -> Rect {
        let width = (parent.width * WIDTH_PERCENT / 100)
            .clamp(MIN_WIDTH, MAX_WIDTH)
            .min(parent.width);
        let height = (parent.height * HEIGHT_PERCENT / 100)
            .clamp(MIN_HEIGHT, MAX_HEIGHT)
            .min(parent.height);
        Rect {
            x: parent.x + (parent.width - width) / 2,
            y: parent.y + (parent.height - height) / 2,
            width,
            height,
        }
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = Self::window_area(parent);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .title(" Help ")
            .title_bottom(Line::from(" F1, ? or Esc to close ").alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border_active())
            .style(Style::default().bg(Colors::BG_PRIMARY));

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_area_fits_parent() {
        let parent = Rect::new(0, 0, 30, 10);
        let area = HelpOverlay::window_area(parent);
        assert!(area.width <= parent.width);
        assert!(area.height <= parent.height);

        let wide = HelpOverlay::window_area(Rect::new(0, 0, 200, 60));
        assert_eq!(wide.width, MAX_WIDTH);
        assert_eq!(wide.height, MAX_HEIGHT);
    }

    #[test]
    fn test_content_names_current_step() {
        let overlay = HelpOverlay::new(WizardStep::JobDetails, &KeybindingContext::new());
        let text: String = overlay
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Almost Ready!"));
        assert!(text.contains("Ctrl+S"));
    }
}
