//! ResumeAI Library
//!
//! This library provides the resume review wizard: resume intake, job
//! context, the step controller with its asynchronous processor, feedback
//! reports, and the terminal front end built on top of them.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod input;
pub mod intake;
pub mod job;
pub mod notify;
pub mod processor;
pub mod report;
pub mod theme;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use config::AppConfig;
pub use engine::{AnalysisEngine, SampleAnalysisEngine};
pub use error::{IntakeError, ReadError, ResumeReviewError, ValidationError, WizardError};
pub use feedback::{FeedbackResult, FeedbackSection, ScoreBand, sample_feedback};
pub use intake::{RawText, SourceKind, UploadedResume, accept_file, accept_pasted_text, read_file};
pub use job::{ExperienceLevel, JobContext};
pub use notify::{Notice, Notifier, Severity, ToastQueue, TracingNotifier};
pub use processor::{ManualProcessor, Processor, SimulatedDelays, SimulatedProcessor};
pub use wizard::{Activity, WizardController, WizardStep};
