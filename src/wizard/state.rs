//! Wizard step and activity definitions

use std::fmt;

/// Screen the wizard is on.
///
/// ```text
/// Landing -> Collecting -> JobDetails -> Results
///    ^___________________________________|  (reset, from any step)
/// ```
///
/// # Invariants
///
/// - Cannot enter `JobDetails` without non-empty resume content
/// - Cannot enter `Results` without a non-empty job role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Introduction with a call to action
    #[default]
    Landing,
    /// Resume upload or paste
    Collecting,
    /// Target role, experience level and job description
    JobDetails,
    /// Feedback report
    Results,
}

impl WizardStep {
    /// Next step in the forward flow
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Landing => Some(Self::Collecting),
            Self::Collecting => Some(Self::JobDetails),
            Self::JobDetails => Some(Self::Results),
            Self::Results => None,
        }
    }

    /// Step reached by going back. Results is left only through reset.
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Landing => None,
            Self::Collecting => Some(Self::Landing),
            Self::JobDetails => Some(Self::Collecting),
            Self::Results => None,
        }
    }

    pub const fn can_go_back(self) -> bool {
        self.previous().is_some()
    }

    /// Display title for this step
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => "Perfect Your Resume with AI",
            Self::Collecting => "Upload Your Resume",
            Self::JobDetails => "Almost Ready!",
            Self::Results => "Your Resume Analysis",
        }
    }

    /// 1-indexed step number for display
    pub const fn step_number(self) -> usize {
        match self {
            Self::Landing => 1,
            Self::Collecting => 2,
            Self::JobDetails => 3,
            Self::Results => 4,
        }
    }

    pub const TOTAL_STEPS: usize = 4;

    pub const fn all() -> &'static [Self] {
        &[Self::Landing, Self::Collecting, Self::JobDetails, Self::Results]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landing => "Landing",
            Self::Collecting => "Collecting",
            Self::JobDetails => "JobDetails",
            Self::Results => "Results",
        };
        f.write_str(name)
    }
}

/// Busy signal for the boundary: what, if anything, is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activity {
    #[default]
    Idle,
    UploadingResume,
    Analyzing,
}

impl Activity {
    pub const fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Button label while the activity runs
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::UploadingResume => "Processing...",
            Self::Analyzing => "Analyzing...",
        }
    }
}
