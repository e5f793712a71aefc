//! Feedback report model and score banding.
//!
//! A `FeedbackResult` is produced by an [`AnalysisEngine`](crate::engine::AnalysisEngine)
//! and only ever displayed. Scores are clamped to 0..=100 on construction.

use serde::{Deserialize, Serialize};

/// Highest possible score
pub const MAX_SCORE: u8 = 100;

/// Qualitative band for a score, applied the same way to overall and section scores.
///
/// ```text
/// 80..=100  Good
/// 60..=79   Warning
///  0..=59   Poor
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Good,
    Warning,
    Poor,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Good
        } else if score >= 60 {
            Self::Warning
        } else {
            Self::Poor
        }
    }

    /// Status glyph shown next to a score
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Good => "✔",
            Self::Warning => "!",
            Self::Poor => "✘",
        }
    }

    /// Verdict shown under the overall score
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Good => "Excellent! Your resume is well-optimized for the target role.",
            Self::Warning => "Good foundation with room for improvement.",
            Self::Poor => "Significant improvements needed to match the target role.",
        }
    }
}

/// Scored feedback for one part of the resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSection {
    pub title: String,
    pub score: u8,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
}

impl FeedbackSection {
    pub fn new(title: impl Into<String>, score: u8) -> Self {
        Self {
            title: title.into(),
            score: score.min(MAX_SCORE),
            feedback: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_feedback<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feedback.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_suggestions<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Complete feedback report for one resume and job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    pub overall_score: u8,
    pub sections: Vec<FeedbackSection>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl FeedbackResult {
    pub fn new(overall_score: u8) -> Self {
        Self {
            overall_score: overall_score.min(MAX_SCORE),
            sections: Vec::new(),
            strengths: Vec::new(),
            improvements: Vec::new(),
            missing_keywords: Vec::new(),
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }

    /// Returns true if every score lies within 0..=100
    pub fn scores_in_range(&self) -> bool {
        self.overall_score <= MAX_SCORE && self.sections.iter().all(|s| s.score <= MAX_SCORE)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed demonstration report
pub fn sample_feedback() -> FeedbackResult {
    FeedbackResult {
        overall_score: 78,
        sections: vec![
            FeedbackSection::new("Professional Summary", 85)
                .with_feedback([
                    "Strong opening statement that clearly states your role and experience",
                    "Good use of industry-specific keywords",
                ])
                .with_suggestions([
                    "Consider adding specific metrics or achievements in the summary",
                    "Include your years of experience more prominently",
                ]),
            FeedbackSection::new("Work Experience", 82)
                .with_feedback([
                    "Good use of action verbs to start bullet points",
                    "Relevant experience for the target role",
                ])
                .with_suggestions([
                    "Add more quantifiable achievements (numbers, percentages, results)",
                    "Include keywords from the job description",
                    "Consider using the STAR method for describing accomplishments",
                ]),
            FeedbackSection::new("Skills", 70)
                .with_feedback([
                    "Relevant technical skills listed",
                    "Good mix of hard and soft skills",
                ])
                .with_suggestions([
                    "Organize skills by category (Technical, Leadership, etc.)",
                    "Add proficiency levels for key skills",
                    "Include more role-specific tools and technologies",
                ]),
            FeedbackSection::new("Education", 75)
                .with_feedback([
                    "Relevant degree for the target role",
                    "Clean formatting and clear information",
                ])
                .with_suggestions([
                    "Consider adding relevant coursework if recent graduate",
                    "Include GPA if above 3.5 and recent graduate",
                ]),
        ],
        strengths: strings(&[
            "Clear and professional formatting",
            "Strong technical background evident",
            "Good use of action verbs in experience section",
            "Relevant education and certifications",
            "Appropriate length for experience level",
        ]),
        improvements: strings(&[
            "Add more quantifiable achievements and metrics",
            "Include more keywords from the target job description",
            "Expand on leadership and project management experience",
            "Consider adding a skills proficiency scale",
            "Include links to portfolio or relevant projects",
        ]),
        missing_keywords: strings(&[
            "Machine Learning",
            "Python",
            "Data Visualization",
            "Statistical Analysis",
            "SQL",
            "Team Leadership",
            "Agile Methodology",
        ]),
    }
}
