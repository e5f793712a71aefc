//! Application state definitions
//!
//! Screen-local UI state: which upload tab is open, the text being typed,
//! which job field has focus. Wizard state (step, resume, job, report) lives
//! in the controller, not here.

use crate::input::TextField;
use crate::job::{ExperienceLevel, POPULAR_ROLES};
use strum::IntoEnumIterator;

/// How the resume is being supplied on the upload step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UploadTab {
    /// Path to a PDF or text file
    #[default]
    File,
    /// Resume text typed or pasted into the terminal
    Paste,
}

impl UploadTab {
    pub fn toggle(self) -> Self {
        match self {
            Self::File => Self::Paste,
            Self::Paste => Self::File,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::File => "Upload File",
            Self::Paste => "Paste Text",
        }
    }
}

/// Focusable fields on the job details step, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobField {
    #[default]
    Role,
    PopularRoles,
    Level,
    Description,
}

impl JobField {
    const ORDER: [JobField; 4] = [
        JobField::Role,
        JobField::PopularRoles,
        JobField::Level,
        JobField::Description,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active tab on the upload step
    pub upload_tab: UploadTab,
    /// File path entry
    pub path_input: TextField,
    /// Pasted resume text
    pub paste_input: TextField,
    /// Focused field on the job details step
    pub job_field: JobField,
    pub role_input: TextField,
    pub description_input: TextField,
    /// Highlighted entry in the popular roles list
    pub popular_role: usize,
    /// 0 means no level selected; 1.. index into `level_choices()`
    pub level_choice: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Scroll offset of the results report
    pub results_scroll: u16,
    /// Upload input should be highlighted as freshly focused
    pub upload_focused: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            upload_tab: UploadTab::File,
            path_input: TextField::new(),
            paste_input: TextField::multiline(),
            job_field: JobField::Role,
            role_input: TextField::new(),
            description_input: TextField::multiline(),
            popular_role: 0,
            level_choice: 0,
            help_visible: false,
            results_scroll: 0,
            upload_focused: false,
        }
    }
}

impl AppState {
    /// Experience levels in picker order
    pub fn level_choices() -> Vec<ExperienceLevel> {
        ExperienceLevel::iter().collect()
    }

    /// Level picked in the selector, if any
    pub fn selected_level(&self) -> Option<ExperienceLevel> {
        self.level_choice
            .checked_sub(1)
            .and_then(|i| Self::level_choices().get(i).copied())
    }

    /// Step the level selector, wrapping through "not specified"
    pub fn cycle_level(&mut self, forward: bool) {
        let slots = Self::level_choices().len() + 1;
        self.level_choice = if forward {
            (self.level_choice + 1) % slots
        } else {
            (self.level_choice + slots - 1) % slots
        };
    }

    pub fn cycle_popular_role(&mut self, forward: bool) {
        let len = POPULAR_ROLES.len();
        self.popular_role = if forward {
            (self.popular_role + 1) % len
        } else {
            (self.popular_role + len - 1) % len
        };
    }

    /// Copy the highlighted popular role into the role field
    pub fn apply_popular_role(&mut self) -> &'static str {
        let role = POPULAR_ROLES[self.popular_role % POPULAR_ROLES.len()];
        self.role_input.set(role);
        role
    }

    /// Input that receives typed characters, if the focused element is a text field
    pub fn active_text_field(&mut self, on_upload: bool) -> Option<&mut TextField> {
        if on_upload {
            return Some(match self.upload_tab {
                UploadTab::File => &mut self.path_input,
                UploadTab::Paste => &mut self.paste_input,
            });
        }
        match self.job_field {
            JobField::Role => Some(&mut self.role_input),
            JobField::Description => Some(&mut self.description_input),
            JobField::PopularRoles | JobField::Level => None,
        }
    }

    /// Restore every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
