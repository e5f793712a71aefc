//! Analysis engine seam.
//!
//! The wizard never scores anything itself. It hands the resume and job to an
//! [`AnalysisEngine`] and displays whatever comes back. The shipped engine
//! returns the fixed sample report.

use crate::feedback::{FeedbackResult, sample_feedback};
use crate::intake::UploadedResume;
use crate::job::JobContext;

/// Produces a feedback report for a resume and target job
pub trait AnalysisEngine: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Analyze a resume against a job.
    ///
    /// Errors are reported to the user and the wizard stays on job details.
    fn analyze(&self, resume: &UploadedResume, job: &JobContext) -> Result<FeedbackResult, String>;
}

/// Returns the same sample report for every input
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleAnalysisEngine;

impl AnalysisEngine for SampleAnalysisEngine {
    fn name(&self) -> &str {
        "sample"
    }

    fn analyze(&self, _resume: &UploadedResume, _job: &JobContext) -> Result<FeedbackResult, String> {
        Ok(sample_feedback())
    }
}
