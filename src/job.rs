//! Target job details collected before analysis.
//!
//! Setters never validate. The only rule (a non-empty role) is enforced by the
//! wizard controller when job details are submitted.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Roles offered as quick picks on the job details screen
pub const POPULAR_ROLES: &[&str] = &[
    "Data Scientist",
    "Software Engineer",
    "Product Manager",
    "UX Designer",
    "Marketing Manager",
    "Sales Representative",
    "Business Analyst",
    "DevOps Engineer",
    "Project Manager",
    "Financial Analyst",
];

/// Seniority of the targeted position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    /// Label shown in the experience level picker
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry Level (0-2 years)",
            Self::Mid => "Mid Level (3-5 years)",
            Self::Senior => "Senior Level (6-10 years)",
            Self::Lead => "Lead/Principal (10+ years)",
            Self::Executive => "Executive Level",
        }
    }

    /// Capitalized short name, e.g. "Senior"
    pub const fn title(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
            Self::Executive => "Executive",
        }
    }
}

/// Job the resume is being reviewed against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobContext {
    role: String,
    experience_level: Option<ExperienceLevel>,
    description: Option<String>,
}

impl JobContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    pub fn experience_level(&self) -> Option<ExperienceLevel> {
        self.experience_level
    }

    pub fn set_experience_level(&mut self, level: Option<ExperienceLevel>) {
        self.experience_level = level;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Store the job description; blank text unsets it.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
    }

    /// Returns true when the role is non-empty after trimming
    pub fn has_role(&self) -> bool {
        !self.role.trim().is_empty()
    }

    /// "Targeting" line shown above the report, e.g. "Data Scientist • Senior Level"
    pub fn targeting_summary(&self) -> String {
        match self.experience_level {
            Some(level) => format!("{} • {} Level", self.role.trim(), level.title()),
            None => self.role.trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
