//! Rendering tests against ratatui's TestBackend
//!
//! Each wizard step is drawn into an in-memory buffer and checked for the
//! text a user would see.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use resume_review::app::App;
use resume_review::config::AppConfig;
use resume_review::processor::ManualProcessor;
use resume_review::wizard::WizardStep;
use std::time::Instant;

const WIDTH: u16 = 140;
const HEIGHT: u16 = 45;

fn press(app: &mut App<ManualProcessor>, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_key_event(KeyEvent::new(code, modifiers)).unwrap();
}

fn render(app: &App<ManualProcessor>) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn advance(app: &mut App<ManualProcessor>) {
    app.wizard_mut().processor_mut().release_all();
    app.tick(Instant::now());
}

fn app_on(step: WizardStep) -> App<ManualProcessor> {
    let mut app = App::with_processor(ManualProcessor::default(), AppConfig::default());
    if step == WizardStep::Landing {
        return app;
    }
    press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
    if step == WizardStep::Collecting {
        return app;
    }
    press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
    app.handle_paste("John Doe, Engineer with eight years of experience");
    press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
    advance(&mut app);
    if step == WizardStep::JobDetails {
        return app;
    }
    app.handle_paste("Data Scientist");
    press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
    advance(&mut app);
    app
}

#[test]
fn test_landing_renders_brand_and_hero() {
    let app = app_on(WizardStep::Landing);
    let screen = render(&app);
    assert!(screen.contains("ResumeAI"));
    assert!(screen.contains("Perfect Your Resume with AI"));
    assert!(screen.contains("Get Started Free"));
    assert!(screen.contains("Role-Specific Feedback"));
}

#[test]
fn test_upload_screen_shows_tabs() {
    let app = app_on(WizardStep::Collecting);
    let screen = render(&app);
    assert!(screen.contains("Upload Your Resume"));
    assert!(screen.contains("Upload File"));
    assert!(screen.contains("Paste Text"));
    assert!(screen.contains("File path"));
}

#[test]
fn test_job_details_screen_shows_form() {
    let app = app_on(WizardStep::JobDetails);
    assert_eq!(app.wizard().step(), WizardStep::JobDetails);
    let screen = render(&app);
    assert!(screen.contains("Almost Ready!"));
    assert!(screen.contains("Target Job Role *"));
    assert!(screen.contains("Experience Level"));
    assert!(screen.contains("Analyze My Resume"));
}

#[test]
fn test_results_screen_shows_scores() {
    let app = app_on(WizardStep::Results);
    assert_eq!(app.wizard().step(), WizardStep::Results);
    let screen = render(&app);
    assert!(screen.contains("Your Resume Analysis"));
    assert!(screen.contains("Overall Score"));
    assert!(screen.contains("Data Scientist"));
    assert!(screen.contains("Section Scores"));
}

#[test]
fn test_busy_status_in_header() {
    let mut app = app_on(WizardStep::JobDetails);
    app.handle_paste("Chef");
    press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
    let screen = render(&app);
    assert!(screen.contains("Analyzing..."));
}

#[test]
fn test_help_overlay_renders_on_top() {
    let mut app = app_on(WizardStep::Collecting);
    press(&mut app, KeyCode::F(1), KeyModifiers::NONE);
    let screen = render(&app);
    assert!(screen.contains("ResumeAI Help"));
    assert!(screen.contains("Step 2 of 4"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = app_on(WizardStep::Results);
    let backend = TestBackend::new(30, 8);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
}
