//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Brand header, step indicator, nav bar and help overlay hook
//! - `screens` - Landing, upload and job details screens
//! - `results` - Feedback report screen
//! - `toasts` - Notification toasts

mod header;
pub mod results;
pub mod screens;
mod toasts;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::notify::ToastQueue;
use crate::processor::Processor;
use crate::theme::UiConstants;
use crate::wizard::{WizardController, WizardStep};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use header::{step_indicator, step_label, HeaderRenderer};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for each wizard step.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current wizard step
    pub fn render<P: Processor>(
        &self,
        f: &mut Frame,
        wizard: &WizardController<P, ToastQueue>,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
    ) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        let header_area = main_chunks[0];
        let content_area = main_chunks[1];
        let nav_bar_area = main_chunks[2];

        let step = wizard.step();
        self.header
            .render_header(f, header_area, step, wizard.activity());

        match step {
            WizardStep::Landing => screens::render_landing_screen(f, content_area),
            WizardStep::Collecting => screens::render_upload_screen(
                f,
                content_area,
                state,
                wizard.activity(),
                wizard.resume(),
            ),
            WizardStep::JobDetails => screens::render_job_details_screen(
                f,
                content_area,
                state,
                wizard.job(),
                wizard.activity(),
            ),
            WizardStep::Results => results::render_results_screen(
                f,
                content_area,
                wizard.feedback(),
                wizard.job(),
                state.results_scroll,
            ),
        }

        header::render_nav_bar(f, &keybinding_ctx.get_nav_items(step), nav_bar_area);

        toasts::render_toasts(f, content_area, wizard.notifier());

        // Help overlay sits on top of everything
        if state.help_visible {
            header::render_help_overlay(f, step, keybinding_ctx);
        }
    }
}
