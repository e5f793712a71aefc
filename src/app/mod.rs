//! Main application module
//!
//! Owns the wizard controller and screen state, runs the terminal event loop
//! and turns key presses into wizard calls.
//!
//! # Module Structure
//! - `state` - Screen-local UI state (AppState, UploadTab, JobField)
//! - Main module - App struct and event handling

mod state;

pub use state::{AppState, JobField, UploadTab};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::AppConfig;
use crate::intake::SourceKind;
use crate::notify::{Notice, Notifier, ToastQueue};
use crate::processor::{Processor, SimulatedProcessor};
use crate::report;
use crate::theme::UiConstants;
use crate::ui::{results, UiRenderer};
use crate::wizard::{WizardController, WizardStep};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Event poll interval; also bounds how late a finished operation is noticed
const TICK: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App<P: Processor = SimulatedProcessor> {
    wizard: WizardController<P, ToastQueue>,
    state: AppState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    config: AppConfig,
}

impl App<SimulatedProcessor> {
    /// Create an app backed by the simulated processor
    pub fn new(config: AppConfig) -> Self {
        info!(
            upload_delay_ms = config.upload_delay_ms,
            analysis_delay_ms = config.analysis_delay_ms,
            "Creating new App instance"
        );
        let processor = SimulatedProcessor::sample(config.delays());
        Self::with_processor(processor, config)
    }
}

impl<P: Processor> App<P> {
    pub fn with_processor(processor: P, config: AppConfig) -> Self {
        Self {
            wizard: WizardController::new(processor, ToastQueue::default()),
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            config,
        }
    }

    pub fn wizard(&self) -> &WizardController<P, ToastQueue> {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut WizardController<P, ToastQueue> {
        &mut self.wizard
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Apply finished processing and expire old toasts
    pub fn tick(&mut self, now: Instant) {
        if let Some(step) = self.wizard.poll() {
            self.on_step_entered(step);
        }
        if self.wizard.take_focus_cue() {
            self.state.upload_focused = true;
        }
        self.wizard.notifier_mut().expire(now);
    }

    fn on_step_entered(&mut self, step: WizardStep) {
        debug!(%step, "Entered step");
        match step {
            WizardStep::JobDetails => self.state.job_field = JobField::Role,
            WizardStep::Results => self.state.results_scroll = 0,
            WizardStep::Landing | WizardStep::Collecting => {}
        }
    }

    /// Render the current frame
    pub fn draw(&self, f: &mut Frame) {
        self.ui_renderer
            .render(f, &self.wizard, &self.state, &self.keybinding_context);
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            self.tick(Instant::now());
            terminal.draw(|f| self.draw(f))?;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if self.handle_key_event(key_event)? {
                            break;
                        }
                    }
                    Event::Paste(text) => self.handle_paste(&text),
                    _ => {}
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle keyboard input events. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool, Box<dyn std::error::Error>> {
        let step = self.wizard.step();
        let action = self.keybinding_context.action_for(step, &key);

        if self.state.help_visible {
            match (action, key.code) {
                (Some(KeyAction::Quit), _) => return Ok(true),
                (Some(KeyAction::Help), _) | (_, KeyCode::Esc) | (_, KeyCode::Char('?')) => {
                    self.state.help_visible = false;
                }
                _ => {}
            }
            return Ok(false);
        }

        match action {
            Some(KeyAction::Quit) => {
                info!("Quit requested");
                return Ok(true);
            }
            Some(KeyAction::Help) => self.toggle_help(),
            Some(KeyAction::Reset) => self.reset(),
            Some(action) => self.handle_action(step, action, key),
            None => self.handle_text_key(step, key),
        }
        Ok(false)
    }

    fn handle_action(&mut self, step: WizardStep, action: KeyAction, key: KeyEvent) {
        match (step, action) {
            (WizardStep::Landing, KeyAction::Start) => {
                if let Err(e) = self.wizard.start() {
                    debug!("Start rejected: {}", e);
                }
                self.tick(Instant::now());
            }

            (WizardStep::Collecting, KeyAction::SwitchTab) => {
                if !self.wizard.is_busy() {
                    self.state.upload_tab = self.state.upload_tab.toggle();
                }
            }
            // Enter is a newline while pasting; only Ctrl+S submits there
            (WizardStep::Collecting, KeyAction::Submit)
                if key.code == KeyCode::Enter && self.state.upload_tab == UploadTab::Paste =>
            {
                self.handle_text_key(step, key);
            }
            (WizardStep::Collecting, KeyAction::Submit) => self.submit_resume(),

            (WizardStep::JobDetails, KeyAction::NextField) => {
                self.state.job_field = self.state.job_field.next();
            }
            (WizardStep::JobDetails, KeyAction::PrevField) => {
                self.state.job_field = self.state.job_field.previous();
            }
            (WizardStep::JobDetails, KeyAction::OptionPrev | KeyAction::OptionNext) => {
                self.change_option(action == KeyAction::OptionNext);
            }
            (WizardStep::JobDetails, KeyAction::ApplyRole) => self.handle_job_enter(key),
            (WizardStep::JobDetails, KeyAction::Submit) => {
                self.sync_job();
                if let Err(e) = self.wizard.submit_job_details() {
                    debug!("Job details rejected: {}", e);
                }
            }

            (WizardStep::Collecting | WizardStep::JobDetails, KeyAction::Back) => {
                match self.wizard.back() {
                    Ok(step) => self.on_step_entered(step),
                    Err(e) => debug!("Back rejected: {}", e),
                }
            }

            (WizardStep::Results, KeyAction::ScrollUp) => {
                self.scroll_results(self.state.results_scroll.saturating_sub(1));
            }
            (WizardStep::Results, KeyAction::ScrollDown) => {
                self.scroll_results(self.state.results_scroll.saturating_add(1));
            }
            (WizardStep::Results, KeyAction::PageUp) => self.scroll_results(
                self.state
                    .results_scroll
                    .saturating_sub(UiConstants::PAGE_SCROLL_SIZE),
            ),
            (WizardStep::Results, KeyAction::PageDown) => self.scroll_results(
                self.state
                    .results_scroll
                    .saturating_add(UiConstants::PAGE_SCROLL_SIZE),
            ),
            (WizardStep::Results, KeyAction::Home) => self.state.results_scroll = 0,
            (WizardStep::Results, KeyAction::Export) => self.export_report(),

            (step, action) => debug!(%step, ?action, "Unhandled action"),
        }
    }

    /// Move the report offset, never past the last report line
    fn scroll_results(&mut self, offset: u16) {
        let max = self.wizard.feedback().map_or(0, results::max_scroll);
        self.state.results_scroll = offset.min(max);
    }

    /// Save the report as JSON into the configured report directory
    fn export_report(&mut self) {
        let Some(feedback) = self.wizard.feedback() else {
            return;
        };
        let path = self
            .config
            .report_dir
            .join(report::report_file_name(self.wizard.job()));
        let notice = match report::export_json(feedback, &path) {
            Ok(()) => {
                info!(path = %path.display(), "Report downloaded");
                Notice::success("Report downloaded", format!("Saved to {}", path.display()))
            }
            Err(e) => {
                warn!(path = %path.display(), "Report download failed: {}", e);
                Notice::destructive("Could not save report", e.to_string())
            }
        };
        self.wizard.notifier_mut().notify(notice);
    }

    /// Enter on the job details step depends on the focused field
    fn handle_job_enter(&mut self, key: KeyEvent) {
        if self.wizard.is_busy() {
            return;
        }
        match self.state.job_field {
            JobField::Role => self.state.job_field = JobField::PopularRoles,
            JobField::PopularRoles => {
                let role = self.state.apply_popular_role();
                debug!(role, "Popular role selected");
                self.state.job_field = JobField::Level;
            }
            JobField::Level => self.change_option(true),
            JobField::Description => {
                self.state.description_input.handle_key(key);
            }
        }
        self.sync_job();
    }

    fn change_option(&mut self, forward: bool) {
        if self.wizard.is_busy() {
            return;
        }
        match self.state.job_field {
            JobField::PopularRoles => self.state.cycle_popular_role(forward),
            JobField::Level => {
                self.state.cycle_level(forward);
                self.sync_job();
            }
            JobField::Role | JobField::Description => {}
        }
    }

    fn handle_text_key(&mut self, step: WizardStep, key: KeyEvent) {
        if self.wizard.is_busy() {
            return;
        }
        let on_upload = match step {
            WizardStep::Collecting => true,
            WizardStep::JobDetails => false,
            WizardStep::Landing | WizardStep::Results => return,
        };
        let consumed = self
            .state
            .active_text_field(on_upload)
            .is_some_and(|field| field.handle_key(key));
        if consumed {
            self.state.upload_focused = false;
            if !on_upload {
                self.sync_job();
            }
        }
    }

    /// Bracketed paste goes into whichever text field has focus
    pub fn handle_paste(&mut self, text: &str) {
        let on_upload = match self.wizard.step() {
            WizardStep::Collecting => true,
            WizardStep::JobDetails => false,
            WizardStep::Landing | WizardStep::Results => return,
        };
        if self.wizard.is_busy() {
            return;
        }
        if let Some(field) = self.state.active_text_field(on_upload) {
            field.insert_str(text);
            debug!(chars = text.chars().count(), "Pasted text");
        }
        if !on_upload {
            self.sync_job();
        }
    }

    /// Push the job form into the controller; setters do no validation
    fn sync_job(&mut self) {
        let job = self.wizard.job_mut();
        job.set_role(self.state.role_input.value());
        job.set_experience_level(self.state.selected_level());
        job.set_description(self.state.description_input.value());
    }

    fn submit_resume(&mut self) {
        let result = match self.state.upload_tab {
            UploadTab::File => {
                // Terminals quote paths dropped onto them
                let path = self
                    .state
                    .path_input
                    .value()
                    .trim()
                    .trim_matches(|c| c == '\'' || c == '"');
                if path.is_empty() {
                    self.wizard.submit_resume("", SourceKind::File)
                } else {
                    self.wizard
                        .submit_file(Path::new(path), self.config.max_upload_bytes)
                }
            }
            UploadTab::Paste => self
                .wizard
                .submit_resume(self.state.paste_input.value(), SourceKind::PastedText),
        };
        if let Err(e) = result {
            debug!("Resume submission rejected: {}", e);
        }
    }

    /// Start over from the landing step
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.wizard.notifier_mut().dismiss_all();
        self.state.reset();
    }
}
