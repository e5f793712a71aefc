//! Wizard controller
//!
//! The controller is the single owner of wizard state: current step, the
//! uploaded resume, job details and the finished report. Screens read it and
//! call its transition methods; nothing else mutates it.
//!
//! Submitting a resume or job details does not move the wizard immediately.
//! The request goes to a [`Processor`] and the controller becomes busy. The
//! transition happens in [`WizardController::poll`] once the processor
//! reports completion. While busy, further submissions and back navigation
//! are rejected.
//!
//! # Module Structure
//! - `state` - Step and activity types (WizardStep, Activity)
//! - Main module - WizardController

mod state;

pub use state::{Activity, WizardStep};

use crate::error::{IntakeError, ReadError, ValidationError, WizardError};
use crate::feedback::FeedbackResult;
use crate::intake::{self, RawText, SourceKind, UploadedResume};
use crate::job::JobContext;
use crate::notify::{Notice, Notifier};
use crate::processor::{Completion, ProcessOutput, ProcessRequest, Processor};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Operation currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    ticket: u64,
    activity: Activity,
}

/// Drives the resume review wizard
pub struct WizardController<P: Processor, N: Notifier> {
    step: WizardStep,
    resume: Option<UploadedResume>,
    job: JobContext,
    feedback: Option<FeedbackResult>,
    pending: Option<Pending>,
    next_ticket: u64,
    /// Set by `start()`; the UI consumes it to focus the upload screen
    focus_cue: bool,
    processor: P,
    notifier: N,
}

impl<P: Processor, N: Notifier> WizardController<P, N> {
    /// Create a controller on the landing step
    pub fn new(processor: P, notifier: N) -> Self {
        Self {
            step: WizardStep::Landing,
            resume: None,
            job: JobContext::default(),
            feedback: None,
            pending: None,
            next_ticket: 1,
            focus_cue: false,
            processor,
            notifier,
        }
    }

    #[inline]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[inline]
    pub fn activity(&self) -> Activity {
        self.pending.map_or(Activity::Idle, |p| p.activity)
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn resume(&self) -> Option<&UploadedResume> {
        self.resume.as_ref()
    }

    pub fn job(&self) -> &JobContext {
        &self.job
    }

    /// Job fields are edited in place; they are validated only on submit
    pub fn job_mut(&mut self) -> &mut JobContext {
        &mut self.job
    }

    pub fn feedback(&self) -> Option<&FeedbackResult> {
        self.feedback.as_ref()
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn processor_mut(&mut self) -> &mut P {
        &mut self.processor
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Returns true once after `start()`, then false
    pub fn take_focus_cue(&mut self) -> bool {
        std::mem::take(&mut self.focus_cue)
    }

    fn require_step(&self, expected: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step != expected {
            debug!(step = %self.step, action, "Rejected action from wrong step");
            return Err(WizardError::WrongStep {
                action,
                step: self.step,
            });
        }
        Ok(())
    }

    fn require_idle(&self) -> Result<(), WizardError> {
        if let Some(pending) = self.pending {
            debug!(ticket = pending.ticket, "Rejected action while busy");
            return Err(WizardError::Busy);
        }
        Ok(())
    }

    /// Report a rejected input to the notifier and hand the error back
    fn reject(&mut self, err: WizardError) -> WizardError {
        let notice = match &err {
            WizardError::Validation(ValidationError::EmptyInput) => Notice::destructive(
                "Resume content required",
                "Please upload a file or paste your resume text.",
            ),
            WizardError::Validation(ValidationError::TypeRejected { .. }) => Notice::destructive(
                "Unsupported file type",
                "Please upload a PDF or text file.",
            ),
            WizardError::Validation(ValidationError::MissingRole) => Notice::destructive(
                "Job role required",
                "Please specify the target job role for analysis.",
            ),
            WizardError::Read(e) => Notice::destructive(
                "Could not read file",
                format!("Error reading file. Please try again. ({})", e),
            ),
            WizardError::Busy | WizardError::WrongStep { .. } => return err,
        };
        debug!(%err, "Input rejected");
        self.notifier.notify(notice);
        err
    }

    /// Report a read failure from the boundary (for example a file picker)
    /// without touching state.
    pub fn report_read_failure(&mut self, err: ReadError) -> WizardError {
        self.reject(err.into())
    }

    fn schedule(&mut self, activity: Activity, request: ProcessRequest) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(Pending { ticket, activity });
        info!(ticket, ?activity, "Processing started");
        self.processor.submit(ticket, request);
    }

    /// Landing -> Collecting
    pub fn start(&mut self) -> Result<(), WizardError> {
        self.require_step(WizardStep::Landing, "start")?;
        self.step = WizardStep::Collecting;
        self.focus_cue = true;
        info!("Wizard started");
        Ok(())
    }

    /// Store the resume and begin processing; moves to job details on completion.
    pub fn submit_resume(&mut self, content: &str, source_kind: SourceKind) -> Result<(), WizardError> {
        self.require_idle()?;
        self.require_step(WizardStep::Collecting, "submit a resume")?;

        let text = RawText::new(content).map_err(|e| self.reject(e.into()))?;
        self.accept_resume(text, source_kind);
        Ok(())
    }

    /// Read a resume file and submit it.
    ///
    /// Unsupported types, unreadable files and blank files are rejected
    /// without a transition.
    pub fn submit_file(&mut self, path: &Path, max_bytes: u64) -> Result<(), WizardError> {
        self.require_idle()?;
        self.require_step(WizardStep::Collecting, "submit a resume")?;

        let text = intake::read_file(path, max_bytes).map_err(|e| self.reject(e.into()))?;
        info!(path = %path.display(), "Resume file read");
        self.accept_resume(text, SourceKind::File);
        Ok(())
    }

    /// Submit raw uploaded bytes with their declared type
    pub fn submit_upload(&mut self, bytes: &[u8], declared_type: &str) -> Result<(), WizardError> {
        self.require_idle()?;
        self.require_step(WizardStep::Collecting, "submit a resume")?;

        let text = intake::accept_file(bytes, declared_type)
            .map_err(|e: IntakeError| self.reject(e.into()))?;
        self.accept_resume(text, SourceKind::File);
        Ok(())
    }

    fn accept_resume(&mut self, text: RawText, source_kind: SourceKind) {
        let resume = UploadedResume::new(text, source_kind);
        debug!(words = resume.word_count(), %source_kind, "Resume accepted for processing");
        self.resume = Some(resume.clone());
        self.schedule(Activity::UploadingResume, ProcessRequest::ResumeIntake { resume });
    }

    /// Validate the role and begin analysis; moves to results on completion.
    pub fn submit_job_details(&mut self) -> Result<(), WizardError> {
        self.require_idle()?;
        self.require_step(WizardStep::JobDetails, "submit job details")?;

        if !self.job.has_role() {
            return Err(self.reject(ValidationError::MissingRole.into()));
        }
        let resume = match self.resume.clone() {
            Some(resume) if !resume.content.trim().is_empty() => resume,
            _ => return Err(self.reject(ValidationError::EmptyInput.into())),
        };

        let request = ProcessRequest::Analysis {
            resume,
            job: self.job.clone(),
        };
        self.schedule(Activity::Analyzing, request);
        Ok(())
    }

    /// JobDetails -> Collecting, Collecting -> Landing. Disabled while busy.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.require_idle()?;
        let previous = self.step.previous().ok_or(WizardError::WrongStep {
            action: "go back",
            step: self.step,
        })?;
        info!(from = %self.step, to = %previous, "Navigating back");
        self.step = previous;
        Ok(previous)
    }

    /// Clear everything and return to the landing step.
    ///
    /// Any in-flight operation is abandoned; its completion is ignored.
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending.take() {
            info!(ticket = pending.ticket, "Abandoning in-flight processing");
        }
        if self.step != WizardStep::Landing {
            info!(from = %self.step, "Wizard reset");
        }
        self.step = WizardStep::Landing;
        self.resume = None;
        self.job.clear();
        self.feedback = None;
        self.focus_cue = false;
    }

    /// Apply every completion the processor has ready.
    ///
    /// Returns the step after polling if a transition happened.
    pub fn poll(&mut self) -> Option<WizardStep> {
        let mut transitioned = None;
        while let Some(completion) = self.processor.poll() {
            if self.complete(completion) {
                transitioned = Some(self.step);
            }
        }
        transitioned
    }

    /// Block until the in-flight operation finishes or `timeout` elapses.
    ///
    /// Returns true if the wizard is idle afterwards.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.pending.is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.processor.wait(remaining) {
                Some(completion) => {
                    self.complete(completion);
                }
                None => break,
            }
        }
        self.pending.is_none()
    }

    /// Apply one completion. Returns true if the step changed.
    fn complete(&mut self, completion: Completion) -> bool {
        let Some(pending) = self.pending else {
            warn!(ticket = completion.ticket, "Dropping completion with nothing in flight");
            return false;
        };
        if pending.ticket != completion.ticket {
            warn!(
                ticket = completion.ticket,
                expected = pending.ticket,
                "Dropping stale completion"
            );
            return false;
        }
        self.pending = None;

        match (pending.activity, completion.output) {
            (Activity::UploadingResume, ProcessOutput::ResumeAccepted) => {
                self.step = WizardStep::JobDetails;
                info!("Resume uploaded, collecting job details");
                self.notifier.notify(Notice::success(
                    "Resume uploaded successfully!",
                    "Please provide job details for personalized feedback.",
                ));
                true
            }
            (Activity::Analyzing, ProcessOutput::Analysis(Ok(feedback))) => {
                info!(overall_score = feedback.overall_score, "Analysis complete");
                self.feedback = Some(feedback);
                self.step = WizardStep::Results;
                self.notifier.notify(Notice::success(
                    "Analysis complete!",
                    "Your personalized resume feedback is ready.",
                ));
                true
            }
            (activity, ProcessOutput::Analysis(Err(reason)) | ProcessOutput::Failed(reason)) => {
                warn!(?activity, %reason, "Processing failed");
                let title = match activity {
                    Activity::UploadingResume => "Upload failed",
                    Activity::Analyzing | Activity::Idle => "Analysis failed",
                };
                self.notifier.notify(Notice::destructive(title, reason));
                false
            }
            (activity, output) => {
                warn!(?activity, ?output, "Completion does not match the in-flight operation");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnalysisEngine;
    use crate::notify::{Severity, ToastQueue};
    use crate::processor::ManualProcessor;
    use std::collections::VecDeque;
    use std::sync::Arc;

    type TestWizard = WizardController<ManualProcessor, ToastQueue>;

    fn wizard() -> TestWizard {
        WizardController::new(ManualProcessor::default(), ToastQueue::default())
    }

    fn settle(w: &mut TestWizard) -> Option<WizardStep> {
        w.processor_mut().release_all();
        w.poll()
    }

    #[test]
    fn test_starts_on_landing_and_idle() {
        let w = wizard();
        assert_eq!(w.step(), WizardStep::Landing);
        assert_eq!(w.activity(), Activity::Idle);
        assert!(w.resume().is_none());
        assert!(w.feedback().is_none());
    }

    #[test]
    fn test_start_sets_focus_cue_once() {
        let mut w = wizard();
        w.start().unwrap();
        assert_eq!(w.step(), WizardStep::Collecting);
        assert!(w.take_focus_cue());
        assert!(!w.take_focus_cue());
    }

    #[test]
    fn test_start_twice_is_wrong_step() {
        let mut w = wizard();
        w.start().unwrap();
        assert!(matches!(w.start(), Err(WizardError::WrongStep { .. })));
        assert_eq!(w.step(), WizardStep::Collecting);
    }

    #[test]
    fn test_resume_transition_waits_for_processing() {
        let mut w = wizard();
        w.start().unwrap();
        w.submit_resume("John Doe, Engineer", SourceKind::PastedText).unwrap();

        assert_eq!(w.step(), WizardStep::Collecting);
        assert_eq!(w.activity(), Activity::UploadingResume);
        assert_eq!(w.poll(), None);

        assert_eq!(settle(&mut w), Some(WizardStep::JobDetails));
        assert!(!w.is_busy());
        assert_eq!(w.resume().unwrap().source_kind, SourceKind::PastedText);
        assert_eq!(w.notifier().latest().unwrap().severity, Severity::Success);
    }

    #[test]
    fn test_blank_resume_rejected_with_notice() {
        let mut w = wizard();
        w.start().unwrap();
        let err = w.submit_resume("   ", SourceKind::File).unwrap_err();

        assert_eq!(err, WizardError::Validation(ValidationError::EmptyInput));
        assert_eq!(w.step(), WizardStep::Collecting);
        assert!(!w.is_busy());
        assert_eq!(w.processor().submitted(), 0);
        assert_eq!(w.notifier().latest().unwrap().severity, Severity::Destructive);
    }

    #[test]
    fn test_second_submit_while_busy_is_noop() {
        let mut w = wizard();
        w.start().unwrap();
        w.submit_resume("first", SourceKind::PastedText).unwrap();
        assert_eq!(w.submit_resume("second", SourceKind::PastedText), Err(WizardError::Busy));

        assert_eq!(w.processor().submitted(), 1);
        assert_eq!(w.resume().unwrap().content, "first");
    }

    #[test]
    fn test_missing_role_blocks_analysis() {
        let mut w = wizard();
        w.start().unwrap();
        w.submit_resume("resume", SourceKind::PastedText).unwrap();
        settle(&mut w);

        w.job_mut().set_role("  ");
        w.job_mut().set_description("A detailed description");
        let err = w.submit_job_details().unwrap_err();
        assert_eq!(err, WizardError::Validation(ValidationError::MissingRole));
        assert_eq!(w.step(), WizardStep::JobDetails);
        assert_eq!(w.notifier().latest().unwrap().title, "Job role required");
    }

    #[test]
    fn test_analysis_reaches_results() {
        let mut w = wizard();
        w.start().unwrap();
        w.submit_resume("resume", SourceKind::PastedText).unwrap();
        settle(&mut w);

        w.job_mut().set_role("Data Scientist");
        w.submit_job_details().unwrap();
        assert_eq!(w.activity(), Activity::Analyzing);
        assert_eq!(settle(&mut w), Some(WizardStep::Results));
        assert_eq!(w.feedback().unwrap().overall_score, 78);
    }

    #[test]
    fn test_reset_discards_in_flight_completion() {
        let mut w = wizard();
        w.start().unwrap();
        w.submit_resume("resume", SourceKind::PastedText).unwrap();
        w.reset();

        assert_eq!(settle(&mut w), None);
        assert_eq!(w.step(), WizardStep::Landing);
        assert!(w.resume().is_none());
    }

    #[test]
    fn test_back_disabled_while_busy() {
        let mut w = wizard();
        w.start().unwrap();
        w.submit_resume("resume", SourceKind::PastedText).unwrap();
        assert_eq!(w.back(), Err(WizardError::Busy));

        settle(&mut w);
        assert_eq!(w.back(), Ok(WizardStep::Collecting));
        assert_eq!(w.back(), Ok(WizardStep::Landing));
        assert!(matches!(w.back(), Err(WizardError::WrongStep { .. })));
    }

    #[test]
    fn test_back_keeps_resume_until_reupload() {
        let mut w = wizard();
        w.start().unwrap();
        w.submit_resume("old resume", SourceKind::PastedText).unwrap();
        settle(&mut w);
        w.back().unwrap();
        assert_eq!(w.resume().unwrap().content, "old resume");

        w.submit_resume("new resume", SourceKind::File).unwrap();
        settle(&mut w);
        assert_eq!(w.resume().unwrap().content, "new resume");
    }

    #[test]
    fn test_upload_rejects_unsupported_type() {
        let mut w = wizard();
        w.start().unwrap();
        let err = w.submit_upload(b"binary", "application/msword").unwrap_err();
        assert!(matches!(
            err,
            WizardError::Validation(ValidationError::TypeRejected { .. })
        ));
        assert_eq!(w.notifier().latest().unwrap().title, "Unsupported file type");
    }

    #[test]
    fn test_read_failure_reported() {
        let mut w = wizard();
        w.start().unwrap();
        let err = w.submit_file(Path::new("/nonexistent/cv.txt"), 1024).unwrap_err();
        assert!(matches!(err, WizardError::Read(ReadError::Io { .. })));
        assert_eq!(w.step(), WizardStep::Collecting);
        assert_eq!(w.notifier().latest().unwrap().title, "Could not read file");
    }

    #[test]
    fn test_boundary_read_failure() {
        let mut w = wizard();
        let err = w.report_read_failure(ReadError::Decode("binary data".into()));
        assert!(err.is_validation());
        assert_eq!(w.notifier().len(), 1);
    }

    struct FailingEngine;

    impl AnalysisEngine for FailingEngine {
        fn name(&self) -> &str {
            "failing"
        }

        fn analyze(&self, _resume: &UploadedResume, _job: &JobContext) -> Result<FeedbackResult, String> {
            Err("model unavailable".to_string())
        }
    }

    /// Completes every request as if it could not be started
    #[derive(Default)]
    struct UnstartableProcessor {
        ready: VecDeque<Completion>,
    }

    impl Processor for UnstartableProcessor {
        fn submit(&mut self, ticket: u64, _request: ProcessRequest) {
            self.ready.push_back(Completion {
                ticket,
                output: ProcessOutput::Failed("could not start processing".to_string()),
            });
        }

        fn poll(&mut self) -> Option<Completion> {
            self.ready.pop_front()
        }

        fn wait(&mut self, _timeout: Duration) -> Option<Completion> {
            self.ready.pop_front()
        }
    }

    #[test]
    fn test_engine_failure_stays_on_job_details() {
        let processor = ManualProcessor::new(Arc::new(FailingEngine));
        let mut w = WizardController::new(processor, ToastQueue::default());
        w.start().unwrap();
        w.submit_resume("resume", SourceKind::PastedText).unwrap();
        settle(&mut w);
        w.job_mut().set_role("Data Scientist");
        w.submit_job_details().unwrap();

        assert_eq!(settle(&mut w), None);
        assert_eq!(w.step(), WizardStep::JobDetails);
        assert!(!w.is_busy());
        assert!(w.feedback().is_none());
        let notice = w.notifier().latest().unwrap();
        assert_eq!(notice.title, "Analysis failed");
        assert_eq!(notice.severity, Severity::Destructive);

        // The user can try again
        w.submit_job_details().unwrap();
        assert_eq!(w.activity(), Activity::Analyzing);
    }

    #[test]
    fn test_unstarted_upload_reports_upload_failure() {
        let mut w = WizardController::new(UnstartableProcessor::default(), ToastQueue::default());
        w.start().unwrap();
        w.submit_resume("resume", SourceKind::PastedText).unwrap();

        assert_eq!(w.poll(), None);
        assert_eq!(w.step(), WizardStep::Collecting);
        assert!(!w.is_busy());
        assert_eq!(w.notifier().latest().unwrap().title, "Upload failed");
    }
}
