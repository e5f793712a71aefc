//! Reusable UI components
//!
//! - `keybindings` - Per-step keybinding registry, nav bar items and help content
//! - `help_overlay` - Centered help window

pub mod help_overlay;
pub mod keybindings;
