//! End-to-end tests for the resume review wizard
//!
//! These tests verify:
//! - The full Landing -> Collecting -> JobDetails -> Results flow
//! - Rejected input never moves the wizard
//! - Busy handling and reset while processing
//! - File intake through the threaded simulated processor

use resume_review::error::{ReadError, ValidationError, WizardError};
use resume_review::intake::SourceKind;
use resume_review::job::ExperienceLevel;
use resume_review::notify::{Severity, ToastQueue};
use resume_review::processor::{ManualProcessor, SimulatedDelays, SimulatedProcessor};
use resume_review::wizard::{Activity, WizardController, WizardStep};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

const WAIT: Duration = Duration::from_secs(5);

type ManualWizard = WizardController<ManualProcessor, ToastQueue>;
type ThreadedWizard = WizardController<SimulatedProcessor, ToastQueue>;

fn manual_wizard() -> ManualWizard {
    WizardController::new(ManualProcessor::default(), ToastQueue::default())
}

fn threaded_wizard() -> ThreadedWizard {
    WizardController::new(
        SimulatedProcessor::sample(SimulatedDelays::immediate()),
        ToastQueue::new(10, Duration::from_secs(60)),
    )
}

fn settle(w: &mut ManualWizard) -> Option<WizardStep> {
    w.processor_mut().release_all();
    w.poll()
}

// =============================================================================
// Full Flow
// =============================================================================

#[test]
fn test_full_flow_reaches_results() {
    let mut w = threaded_wizard();
    w.start().unwrap();
    w.submit_resume(
        "John Doe, Engineer. Five years building data pipelines.",
        SourceKind::File,
    )
    .unwrap();
    assert!(w.wait_idle(WAIT));
    assert_eq!(w.step(), WizardStep::JobDetails);

    w.job_mut().set_role("Data Scientist");
    w.submit_job_details().unwrap();
    assert!(w.wait_idle(WAIT));
    assert_eq!(w.step(), WizardStep::Results);

    let feedback = w.feedback().expect("report");
    assert!(feedback.overall_score <= 100);
    assert!(feedback.scores_in_range());
    assert_eq!(w.notifier().latest().unwrap().title, "Analysis complete!");
}

#[test]
fn test_empty_resume_stays_collecting() {
    let mut w = threaded_wizard();
    w.start().unwrap();
    let err = w.submit_resume("", SourceKind::File).unwrap_err();

    assert_eq!(err, WizardError::Validation(ValidationError::EmptyInput));
    assert_eq!(w.step(), WizardStep::Collecting);
    assert_eq!(w.activity(), Activity::Idle);
    let notice = w.notifier().latest().unwrap();
    assert_eq!(notice.severity, Severity::Destructive);
    assert_eq!(notice.title, "Resume content required");
}

#[test]
fn test_full_flow_from_text_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.txt");
    fs::write(&path, "Jane Roe\nProduct Manager\nLaunched three products").unwrap();

    let mut w = threaded_wizard();
    w.start().unwrap();
    w.submit_file(&path, 1024 * 1024).unwrap();
    assert!(w.wait_idle(WAIT));
    assert_eq!(w.step(), WizardStep::JobDetails);
    assert_eq!(w.resume().unwrap().source_kind, SourceKind::File);
    assert!(w.resume().unwrap().content.contains("Launched three products"));
}

#[test]
fn test_unsupported_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.docx");
    fs::write(&path, "binary-ish").unwrap();

    let mut w = threaded_wizard();
    w.start().unwrap();
    let err = w.submit_file(&path, 1024).unwrap_err();
    assert!(matches!(
        err,
        WizardError::Validation(ValidationError::TypeRejected { .. })
    ));
    assert_eq!(w.step(), WizardStep::Collecting);
}

#[test]
fn test_oversized_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.txt");
    fs::write(&path, "x".repeat(2048)).unwrap();

    let mut w = threaded_wizard();
    w.start().unwrap();
    let err = w.submit_file(&path, 1024).unwrap_err();
    assert!(matches!(err, WizardError::Read(ReadError::TooLarge { .. })));
    assert!(!w.is_busy());
}

// =============================================================================
// Job Details
// =============================================================================

#[test]
fn test_empty_role_never_reaches_results() {
    let mut w = manual_wizard();
    w.start().unwrap();
    w.submit_resume("resume body", SourceKind::PastedText).unwrap();
    settle(&mut w);

    w.job_mut().set_experience_level(Some(ExperienceLevel::Lead));
    assert_eq!(
        w.submit_job_details(),
        Err(WizardError::Validation(ValidationError::MissingRole))
    );
    assert_eq!(settle(&mut w), None);
    assert_eq!(w.step(), WizardStep::JobDetails);
    assert!(w.feedback().is_none());
}

#[test]
fn test_job_details_from_wrong_step() {
    let mut w = manual_wizard();
    w.job_mut().set_role("Chef");
    assert!(matches!(
        w.submit_job_details(),
        Err(WizardError::WrongStep {
            step: WizardStep::Landing,
            ..
        })
    ));
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_from_results_clears_everything() {
    let mut w = manual_wizard();
    w.start().unwrap();
    w.submit_resume("resume body", SourceKind::PastedText).unwrap();
    settle(&mut w);
    w.job_mut().set_role("Data Scientist");
    w.job_mut().set_description("Build models");
    w.submit_job_details().unwrap();
    assert_eq!(settle(&mut w), Some(WizardStep::Results));

    w.reset();
    assert_eq!(w.step(), WizardStep::Landing);
    assert!(w.resume().is_none());
    assert!(w.feedback().is_none());
    assert_eq!(w.job().role(), "");
    assert!(w.job().description().is_none());

    // Walking forward again requires fresh input
    w.start().unwrap();
    assert!(w.back().is_ok());
    w.start().unwrap();
    assert!(matches!(
        w.submit_job_details(),
        Err(WizardError::WrongStep { .. })
    ));
}

#[test]
fn test_reset_from_landing_is_idempotent() {
    let mut w = manual_wizard();
    w.reset();
    w.reset();
    assert_eq!(w.step(), WizardStep::Landing);
    assert!(w.notifier().is_empty());
}

#[test]
fn test_reset_during_analysis_drops_report() {
    let mut w = threaded_wizard();
    w.start().unwrap();
    w.submit_resume("resume body", SourceKind::PastedText).unwrap();
    assert!(w.wait_idle(WAIT));
    w.job_mut().set_role("Software Engineer");
    w.submit_job_details().unwrap();
    w.reset();

    // Give the worker time to deliver its stale completion
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(w.poll(), None);
    assert_eq!(w.step(), WizardStep::Landing);
    assert!(w.feedback().is_none());
}

// =============================================================================
// Busy Handling
// =============================================================================

#[test]
fn test_second_submit_while_busy_is_noop() {
    let mut w = manual_wizard();
    w.start().unwrap();
    w.submit_resume("first", SourceKind::PastedText).unwrap();
    assert!(w.is_busy());
    assert_eq!(w.submit_resume("second", SourceKind::File), Err(WizardError::Busy));
    assert_eq!(w.processor().submitted(), 1);

    assert_eq!(settle(&mut w), Some(WizardStep::JobDetails));
    assert_eq!(w.resume().unwrap().content, "first");
}

#[test]
fn test_busy_job_details_submit_is_noop() {
    let mut w = manual_wizard();
    w.start().unwrap();
    w.submit_resume("resume", SourceKind::PastedText).unwrap();
    settle(&mut w);
    w.job_mut().set_role("UX Designer");
    w.submit_job_details().unwrap();
    assert_eq!(w.activity(), Activity::Analyzing);
    assert_eq!(w.submit_job_details(), Err(WizardError::Busy));
    assert_eq!(w.processor().submitted(), 2);
}

#[test]
fn test_delay_is_observable() {
    let delays = SimulatedDelays {
        upload: Duration::from_millis(150),
        analysis: Duration::from_millis(150),
    };
    let mut w = WizardController::new(SimulatedProcessor::sample(delays), ToastQueue::default());
    w.start().unwrap();
    w.submit_resume("resume", SourceKind::PastedText).unwrap();

    assert_eq!(w.poll(), None);
    assert_eq!(w.step(), WizardStep::Collecting);
    assert!(w.wait_idle(WAIT));
    assert_eq!(w.step(), WizardStep::JobDetails);
}
