//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current wizard step.
//! Steps with text entry bind only non-character keys or keys with Ctrl held,
//! so typing never triggers an action.

use crate::wizard::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Start,
    Submit,
    Back,
    Reset,
    SwitchTab,
    NextField,
    PrevField,
    OptionPrev,
    OptionNext,
    ApplyRole,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    Export,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Shift is ignored for character keys since terminals report it
    /// inconsistently for symbols like `?`.
    fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        let relevant = event.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
        match self.key {
            KeyCode::Char(_) => relevant == self.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT),
            _ => event.modifiers == self.modifiers,
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Step-specific keybindings
    step_bindings: HashMap<WizardStep, Vec<Keybinding>>,
    /// Global keybindings (available on every step)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            step_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        let ctrl = KeyModifiers::CONTROL;

        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::with_modifiers(KeyCode::Char('r'), ctrl, KeyAction::Reset, "Ctrl+R", "Start over"),
            Keybinding::with_modifiers(KeyCode::Char('q'), ctrl, KeyAction::Quit, "Ctrl+Q", "Quit"),
            Keybinding::with_modifiers(KeyCode::Char('c'), ctrl, KeyAction::Quit, "Ctrl+C", "Quit"),
        ];

        // Landing
        self.step_bindings.insert(
            WizardStep::Landing,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Start, "Enter", "Get started"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        // Upload
        self.step_bindings.insert(
            WizardStep::Collecting,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::SwitchTab, "Tab", "File / Paste"),
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", "Upload file"),
                Keybinding::with_modifiers(KeyCode::Char('s'), ctrl, KeyAction::Submit, "Ctrl+S", "Analyze text"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            ],
        );

        // Job details
        self.step_bindings.insert(
            WizardStep::JobDetails,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevField, "Shift+Tab", "Previous field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PrevField, "Shift+Tab", "Previous field"),
                Keybinding::new(KeyCode::Up, KeyAction::OptionPrev, "Up", "Previous option"),
                Keybinding::new(KeyCode::Down, KeyAction::OptionNext, "Down", "Next option"),
                Keybinding::new(KeyCode::Enter, KeyAction::ApplyRole, "Enter", "Use role"),
                Keybinding::with_modifiers(KeyCode::Char('s'), ctrl, KeyAction::Submit, "Ctrl+S", "Analyze resume"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            ],
        );

        // Results
        self.step_bindings.insert(
            WizardStep::Results,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Back to top"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Export, "D", "Download report"),
                Keybinding::new(KeyCode::Char('n'), KeyAction::Reset, "N", "New analysis"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );
    }

    /// Get keybindings for a specific step (includes global bindings)
    pub fn get_bindings(&self, step: WizardStep) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(step_bindings) = self.step_bindings.get(&step) {
            bindings.extend(step_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Resolve a key event to an action on the given step
    pub fn action_for(&self, step: WizardStep, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(step)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, step: WizardStep) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(step);

        let priority_actions: &[KeyAction] = match step {
            WizardStep::Landing => &[KeyAction::Start, KeyAction::Help, KeyAction::Quit],
            WizardStep::Collecting => &[
                KeyAction::SwitchTab,
                KeyAction::Submit,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            WizardStep::JobDetails => &[
                KeyAction::NextField,
                KeyAction::OptionNext,
                KeyAction::Submit,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            WizardStep::Results => &[
                KeyAction::ScrollUp,
                KeyAction::Export,
                KeyAction::Reset,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            let combined = match action {
                KeyAction::ScrollUp | KeyAction::ScrollDown => Some(("Up/Dn", "Scroll")),
                KeyAction::OptionPrev | KeyAction::OptionNext => Some(("Up/Dn", "Choose")),
                _ => None,
            };
            if let Some((key_display, action_label)) = combined {
                items.push(NavBarItem {
                    key_display: key_display.to_string(),
                    action_label: action_label.to_string(),
                });
                continue;
            }

            // Submit on the upload step has two keys; show both
            if step == WizardStep::Collecting && *action == KeyAction::Submit {
                items.push(NavBarItem {
                    key_display: "Enter/Ctrl+S".to_string(),
                    action_label: "Submit".to_string(),
                });
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == *action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a step (for help overlay)
    pub fn get_help_content(&self, step: WizardStep) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NextField
                        | KeyAction::PrevField
                        | KeyAction::OptionPrev
                        | KeyAction::OptionNext
                        | KeyAction::SwitchTab
                        | KeyAction::ScrollUp
                        | KeyAction::ScrollDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                        | KeyAction::Home
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Start | KeyAction::Submit | KeyAction::ApplyRole | KeyAction::Export
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::Back | KeyAction::Reset | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(step);
        let mut sections = Vec::new();
        for (title, filter) in groups {
            let mut items: Vec<(String, String)> = Vec::new();
            for b in bindings.iter().filter(|b| filter(b.action)) {
                let item = (b.display.clone(), b.description.clone());
                if !items.contains(&item) {
                    items.push(item);
                }
            }
            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        }
        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_every_step_has_bindings() {
        let ctx = KeybindingContext::new();
        for step in WizardStep::all() {
            assert!(!ctx.get_nav_items(*step).is_empty(), "No nav items for {}", step);
            assert!(!ctx.get_help_content(*step).is_empty());
        }
    }

    #[test]
    fn test_plain_characters_unbound_on_text_steps() {
        let ctx = KeybindingContext::new();
        for step in [WizardStep::Collecting, WizardStep::JobDetails] {
            for c in ['q', '?', 'n', 's', 'r'] {
                let event = key(KeyCode::Char(c), KeyModifiers::NONE);
                assert_eq!(ctx.action_for(step, &event), None, "'{}' bound on {}", c, step);
            }
        }
    }

    #[test]
    fn test_ctrl_bindings_resolve() {
        let ctx = KeybindingContext::new();
        let ctrl_s = key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(ctx.action_for(WizardStep::JobDetails, &ctrl_s), Some(KeyAction::Submit));

        let ctrl_q = key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(ctx.action_for(WizardStep::Collecting, &ctrl_q), Some(KeyAction::Quit));
    }

    #[test]
    fn test_question_mark_with_shift_is_help() {
        let ctx = KeybindingContext::new();
        let event = key(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.action_for(WizardStep::Landing, &event), Some(KeyAction::Help));
    }

    #[test]
    fn test_results_reset() {
        let ctx = KeybindingContext::new();
        let event = key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(ctx.action_for(WizardStep::Results, &event), Some(KeyAction::Reset));
    }

    #[test]
    fn test_results_download_is_listed() {
        let ctx = KeybindingContext::new();
        let event = key(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(ctx.action_for(WizardStep::Results, &event), Some(KeyAction::Export));

        let nav = ctx.get_nav_items(WizardStep::Results);
        assert!(nav.iter().any(|i| i.key_display == "D" && i.action_label == "Download report"));

        let help = ctx.get_help_content(WizardStep::Results);
        let actions = help.iter().find(|s| s.title == "Actions").unwrap();
        assert!(actions.items.contains(&("D".to_string(), "Download report".to_string())));
    }
}
