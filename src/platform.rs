//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy/submit shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Modifiers that trigger submit with `s`: Ctrl everywhere, plus Cmd on macOS
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL.union(COPY_MODIFIER);

/// Submit shortcut display for the wizard help text
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy reference shortcut display in the notice dialog
pub const COPY_REFERENCE_KEY: &str = "y";
