//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors, styles and visual constants. Score
//! bands and notice severities map to colors here rather than in screens.
//!
//! # Usage
//! ```rust
//! use resume_review::theme::{Colors, Styles, Theme};
//! use resume_review::feedback::ScoreBand;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let score_style = Theme::band_style(ScoreBand::Good);
//! ```

use crate::feedback::ScoreBand;
use crate::notify::Severity;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and toasts
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Warning/danger toast background
    pub const BG_DANGER: Color = Color::Rgb(30, 20, 20);

    /// Gauge/progress bar background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Keyword tag color
    pub const TAG: Color = Color::Magenta;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Step indicator: completed step
    pub const STEP_COMPLETE: Color = Color::Green;

    /// Step indicator: current step
    pub const STEP_ACTIVE: Color = Color::Yellow;

    /// Step indicator: upcoming step
    pub const STEP_PENDING: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Bold text
    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused item (cyan highlight)
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Active/selected button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Button that cannot be pressed right now
    pub fn button_disabled() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Progress bar style
    pub fn progress() -> Style {
        Style::default().fg(Colors::PRIMARY).bg(Colors::BG_GAUGE)
    }

    /// Keyword tag
    pub fn tag() -> Style {
        Style::default()
            .fg(Colors::TAG)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups
pub struct Theme;

impl Theme {
    /// Color for a score band
    pub fn band_color(band: ScoreBand) -> Color {
        match band {
            ScoreBand::Good => Colors::SUCCESS,
            ScoreBand::Warning => Colors::WARNING,
            ScoreBand::Poor => Colors::ERROR,
        }
    }

    /// Bold score text in the band color
    pub fn band_style(band: ScoreBand) -> Style {
        Style::default()
            .fg(Self::band_color(band))
            .add_modifier(Modifier::BOLD)
    }

    /// Border color for a toast
    pub fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::Info => Colors::INFO,
            Severity::Success => Colors::SUCCESS,
            Severity::Destructive => Colors::ERROR,
        }
    }

    /// Toast background
    pub fn severity_bg(severity: Severity) -> Style {
        match severity {
            Severity::Destructive => Style::default().bg(Colors::BG_DANGER),
            _ => Style::default().bg(Colors::BG_PRIMARY),
        }
    }

    /// Style for a step in the progress indicator
    pub fn step_style(completed: bool, active: bool) -> Style {
        if completed {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else if active {
            Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Header height (brand line and step indicator)
    pub const HEADER_HEIGHT: u16 = 3;

    /// Width of a toast
    pub const TOAST_WIDTH: u16 = 48;

    /// Height of a single toast
    pub const TOAST_HEIGHT: u16 = 4;

    /// Report scroll page size (lines)
    pub const PAGE_SCROLL_SIZE: u16 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors_are_distinct() {
        let good = Theme::band_color(ScoreBand::Good);
        let warning = Theme::band_color(ScoreBand::Warning);
        let poor = Theme::band_color(ScoreBand::Poor);
        assert_ne!(good, warning);
        assert_ne!(warning, poor);
        assert_ne!(good, poor);
    }

    #[test]
    fn test_destructive_toast_uses_error_color() {
        assert_eq!(Theme::severity_color(Severity::Destructive), Colors::ERROR);
        assert_eq!(Theme::severity_color(Severity::Success), Colors::SUCCESS);
    }

    #[test]
    fn test_styles() {
        let _ = Styles::title();
        let _ = Styles::selected();
        let _ = Styles::tag();
    }
}
