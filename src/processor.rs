//! Asynchronous processing behind the wizard.
//!
//! Uploading and analysis both take time in a real system. The wizard only
//! sees a [`Processor`]: it submits a request tagged with a ticket and later
//! drains the [`Completion`]. What happens in between (a timed delay, a call
//! into an analysis engine, a network round trip) is the processor's concern.
//!
//! [`SimulatedProcessor`] runs each request on a worker thread that sleeps
//! for the configured delay and reports back over an `mpsc` channel that the
//! UI thread drains. [`ManualProcessor`] completes requests only when told to.

use crate::engine::{AnalysisEngine, SampleAnalysisEngine};
use crate::feedback::FeedbackResult;
use crate::intake::UploadedResume;
use crate::job::JobContext;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

/// Work the wizard hands off
#[derive(Debug, Clone)]
pub enum ProcessRequest {
    /// Accept an uploaded resume
    ResumeIntake { resume: UploadedResume },
    /// Produce a feedback report
    Analysis {
        resume: UploadedResume,
        job: JobContext,
    },
}

impl ProcessRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ResumeIntake { .. } => "resume intake",
            Self::Analysis { .. } => "analysis",
        }
    }
}

/// Result of a finished request
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutput {
    ResumeAccepted,
    Analysis(Result<FeedbackResult, String>),
    /// The request never ran
    Failed(String),
}

/// A finished request, tagged with the ticket it was submitted under
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub ticket: u64,
    pub output: ProcessOutput,
}

/// Runs wizard requests asynchronously
pub trait Processor {
    /// Start processing `request`. Must not block on the work itself.
    fn submit(&mut self, ticket: u64, request: ProcessRequest);

    /// Return one finished request without blocking
    fn poll(&mut self) -> Option<Completion>;

    /// Block up to `timeout` for one finished request
    fn wait(&mut self, timeout: Duration) -> Option<Completion>;
}

fn run_request(engine: &dyn AnalysisEngine, request: ProcessRequest) -> ProcessOutput {
    match request {
        ProcessRequest::ResumeIntake { .. } => ProcessOutput::ResumeAccepted,
        ProcessRequest::Analysis { resume, job } => {
            debug!(engine = engine.name(), role = job.role(), "Running analysis");
            ProcessOutput::Analysis(engine.analyze(&resume, &job))
        }
    }
}

/// Delays used by [`SimulatedProcessor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelays {
    pub upload: Duration,
    pub analysis: Duration,
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        Self {
            upload: Duration::from_millis(2000),
            analysis: Duration::from_millis(3000),
        }
    }
}

impl SimulatedDelays {
    /// No delay at all, for tests and scripted runs
    pub const fn immediate() -> Self {
        Self {
            upload: Duration::ZERO,
            analysis: Duration::ZERO,
        }
    }

    fn for_request(&self, request: &ProcessRequest) -> Duration {
        match request {
            ProcessRequest::ResumeIntake { .. } => self.upload,
            ProcessRequest::Analysis { .. } => self.analysis,
        }
    }
}

/// Thread-backed processor that sleeps before completing each request
pub struct SimulatedProcessor {
    engine: Arc<dyn AnalysisEngine>,
    delays: SimulatedDelays,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl SimulatedProcessor {
    pub fn new(engine: Arc<dyn AnalysisEngine>, delays: SimulatedDelays) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            engine,
            delays,
            tx,
            rx,
        }
    }

    /// Sample engine with the given delays
    pub fn sample(delays: SimulatedDelays) -> Self {
        Self::new(Arc::new(SampleAnalysisEngine), delays)
    }

    pub fn delays(&self) -> SimulatedDelays {
        self.delays
    }
}

impl Processor for SimulatedProcessor {
    fn submit(&mut self, ticket: u64, request: ProcessRequest) {
        let delay = self.delays.for_request(&request);
        let engine = Arc::clone(&self.engine);
        let tx = self.tx.clone();
        debug!(ticket, kind = request.kind(), ?delay, "Scheduling request");

        let spawned = thread::Builder::new()
            .name(format!("resume-review-{}", ticket))
            .spawn(move || {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let output = run_request(engine.as_ref(), request);
                // Receiver is gone once the wizard is dropped
                let _ = tx.send(Completion { ticket, output });
            });

        if let Err(e) = spawned {
            error!("Failed to spawn worker thread: {}", e);
            let _ = self.tx.send(Completion {
                ticket,
                output: ProcessOutput::Failed(format!("could not start processing: {}", e)),
            });
        }
    }

    fn poll(&mut self) -> Option<Completion> {
        self.rx.try_recv().ok()
    }

    fn wait(&mut self, timeout: Duration) -> Option<Completion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Processor that completes requests only on [`release_next`](Self::release_next)
pub struct ManualProcessor {
    engine: Arc<dyn AnalysisEngine>,
    queued: VecDeque<(u64, ProcessRequest)>,
    ready: VecDeque<Completion>,
    submitted: usize,
}

impl Default for ManualProcessor {
    fn default() -> Self {
        Self::new(Arc::new(SampleAnalysisEngine))
    }
}

impl ManualProcessor {
    pub fn new(engine: Arc<dyn AnalysisEngine>) -> Self {
        Self {
            engine,
            queued: VecDeque::new(),
            ready: VecDeque::new(),
            submitted: 0,
        }
    }

    /// Requests submitted over the processor's lifetime
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    /// Requests waiting to be released
    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    /// Finish the oldest queued request. Returns false if none was queued.
    pub fn release_next(&mut self) -> bool {
        match self.queued.pop_front() {
            Some((ticket, request)) => {
                let output = run_request(self.engine.as_ref(), request);
                self.ready.push_back(Completion { ticket, output });
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        while self.release_next() {}
    }
}

impl Processor for ManualProcessor {
    fn submit(&mut self, ticket: u64, request: ProcessRequest) {
        self.submitted += 1;
        self.queued.push_back((ticket, request));
    }

    fn poll(&mut self) -> Option<Completion> {
        self.ready.pop_front()
    }

    fn wait(&mut self, _timeout: Duration) -> Option<Completion> {
        if self.ready.is_empty() {
            self.release_next();
        }
        self.ready.pop_front()
    }
}

impl<P: Processor + ?Sized> Processor for Box<P> {
    fn submit(&mut self, ticket: u64, request: ProcessRequest) {
        (**self).submit(ticket, request);
    }

    fn poll(&mut self) -> Option<Completion> {
        (**self).poll()
    }

    fn wait(&mut self, timeout: Duration) -> Option<Completion> {
        (**self).wait(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::sample_feedback;
    use crate::intake::{RawText, SourceKind};

    fn resume() -> UploadedResume {
        UploadedResume::new(RawText::new("John Doe, Engineer").unwrap(), SourceKind::File)
    }

    fn analysis_request() -> ProcessRequest {
        let mut job = JobContext::new();
        job.set_role("Data Scientist");
        ProcessRequest::Analysis {
            resume: resume(),
            job,
        }
    }

    #[test]
    fn test_simulated_processor_completes_intake() {
        let mut processor = SimulatedProcessor::sample(SimulatedDelays::immediate());
        processor.submit(7, ProcessRequest::ResumeIntake { resume: resume() });

        let completion = processor.wait(Duration::from_secs(5)).expect("completion");
        assert_eq!(completion.ticket, 7);
        assert_eq!(completion.output, ProcessOutput::ResumeAccepted);
    }

    #[test]
    fn test_simulated_processor_runs_engine() {
        let mut processor = SimulatedProcessor::sample(SimulatedDelays::immediate());
        processor.submit(1, analysis_request());

        let completion = processor.wait(Duration::from_secs(5)).expect("completion");
        assert_eq!(completion.output, ProcessOutput::Analysis(Ok(sample_feedback())));
    }

    #[test]
    fn test_simulated_processor_respects_delay() {
        let delays = SimulatedDelays {
            upload: Duration::from_millis(200),
            analysis: Duration::from_millis(200),
        };
        let mut processor = SimulatedProcessor::sample(delays);
        processor.submit(1, ProcessRequest::ResumeIntake { resume: resume() });

        assert!(processor.poll().is_none());
        assert!(processor.wait(Duration::from_secs(5)).is_some());
    }

    #[test]
    fn test_manual_processor_holds_until_released() {
        let mut processor = ManualProcessor::default();
        processor.submit(3, analysis_request());
        assert_eq!(processor.submitted(), 1);
        assert!(processor.poll().is_none());

        assert!(processor.release_next());
        let completion = processor.poll().unwrap();
        assert_eq!(completion.ticket, 3);
        assert!(!processor.release_next());
    }

    #[test]
    fn test_manual_processor_wait_releases_one() {
        let mut processor = ManualProcessor::default();
        processor.submit(1, ProcessRequest::ResumeIntake { resume: resume() });
        processor.submit(2, ProcessRequest::ResumeIntake { resume: resume() });

        assert_eq!(processor.wait(Duration::ZERO).unwrap().ticket, 1);
        assert_eq!(processor.queued(), 1);
    }

    #[test]
    fn test_default_delays() {
        let delays = SimulatedDelays::default();
        assert_eq!(delays.upload, Duration::from_secs(2));
        assert_eq!(delays.analysis, Duration::from_secs(3));
    }
}
