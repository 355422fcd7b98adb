//! Keyboard shortcuts for the presentation window.

use std::collections::HashMap;
use tracing::trace;
use winit::event::{ElementState, KeyboardInput, ModifiersState, VirtualKeyCode};

/// Keyboard modifiers that can be part of a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Control,
    Alt,
    Super,
}

impl Modifier {
    /// Modifiers held in `state`, in a fixed order.
    pub fn active(state: ModifiersState) -> Vec<Modifier> {
        let mut active = Vec::new();
        if state.shift() {
            active.push(Modifier::Shift);
        }
        if state.ctrl() {
            active.push(Modifier::Control);
        }
        if state.alt() {
            active.push(Modifier::Alt);
        }
        if state.logo() {
            active.push(Modifier::Super);
        }
        active
    }
}

/// Actions that can be triggered by keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    /// Switch between windowed and fullscreen
    ToggleWindowed,
    /// Go windowed if currently fullscreen, otherwise nothing
    LeaveFullscreen,
    /// Close the window
    Quit,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// Required modifiers (Ctrl, Alt, etc.)
    pub modifiers: Vec<Modifier>,
    /// The key that must be pressed
    pub key: VirtualKeyCode,
    /// Description for help output
    pub description: String,
}

impl Shortcut {
    pub fn new(modifiers: Vec<Modifier>, key: VirtualKeyCode, description: &str) -> Self {
        Self {
            modifiers,
            key,
            description: description.to_string(),
        }
    }

    pub fn with_modifier(modifier: Modifier, key: VirtualKeyCode, description: &str) -> Self {
        Self::new(vec![modifier], key, description)
    }

    pub fn key_only(key: VirtualKeyCode, description: &str) -> Self {
        Self::new(vec![], key, description)
    }

    /// Check if this shortcut matches the current key combination.
    /// Matching is strict: extra modifiers prevent a match.
    pub fn matches(&self, key: VirtualKeyCode, active_modifiers: &[Modifier]) -> bool {
        if self.key != key {
            return false;
        }

        if !self
            .modifiers
            .iter()
            .all(|required| active_modifiers.contains(required))
        {
            return false;
        }

        active_modifiers.len() == self.modifiers.len()
    }

    /// Human-readable key combination, e.g. `Alt+Enter`.
    pub fn format(&self) -> String {
        let mut parts: Vec<String> = self
            .modifiers
            .iter()
            .map(|modifier| {
                match modifier {
                    Modifier::Control => "Ctrl",
                    Modifier::Alt => "Alt",
                    Modifier::Shift => "Shift",
                    Modifier::Super => "Super",
                }
                .to_string()
            })
            .collect();

        parts.push(match self.key {
            VirtualKeyCode::Return => "Enter".to_string(),
            VirtualKeyCode::Escape => "Esc".to_string(),
            key => format!("{:?}", key),
        });

        parts.join("+")
    }
}

/// Configuration and lookup of keyboard shortcuts.
#[derive(Debug, Clone)]
pub struct ShortcutsConfig {
    shortcuts: HashMap<Shortcut, ShortcutAction>,
    enabled: bool,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        let mut config = Self {
            shortcuts: HashMap::new(),
            enabled: true,
        };

        config.load_defaults();
        config
    }
}

impl ShortcutsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn add_shortcut(&mut self, shortcut: Shortcut, action: ShortcutAction) {
        self.shortcuts.insert(shortcut, action);
    }

    /// Get all shortcuts for a specific action.
    pub fn shortcuts_for_action(&self, action: ShortcutAction) -> Vec<&Shortcut> {
        self.shortcuts
            .iter()
            .filter(|(_, &a)| a == action)
            .map(|(s, _)| s)
            .collect()
    }

    /// Process a keyboard input and return the triggered action, if any.
    pub fn process_key_input(
        &self,
        input: &KeyboardInput,
        active_modifiers: &[Modifier],
    ) -> Option<ShortcutAction> {
        if !self.enabled || input.state != ElementState::Pressed {
            return None;
        }

        let key = input.virtual_keycode?;

        self.shortcuts
            .iter()
            .find(|(shortcut, _)| shortcut.matches(key, active_modifiers))
            .map(|(shortcut, &action)| {
                trace!("Shortcut triggered: {} -> {:?}", shortcut.format(), action);
                action
            })
    }

    pub fn load_defaults(&mut self) {
        use Modifier::*;
        use VirtualKeyCode::*;

        self.add_shortcut(
            Shortcut::key_only(F11, "Toggle fullscreen"),
            ShortcutAction::ToggleWindowed,
        );
        self.add_shortcut(
            Shortcut::key_only(F, "Toggle fullscreen"),
            ShortcutAction::ToggleWindowed,
        );
        self.add_shortcut(
            Shortcut::with_modifier(Alt, Return, "Toggle fullscreen"),
            ShortcutAction::ToggleWindowed,
        );
        self.add_shortcut(
            Shortcut::key_only(Escape, "Leave fullscreen"),
            ShortcutAction::LeaveFullscreen,
        );
        self.add_shortcut(Shortcut::key_only(Q, "Quit"), ShortcutAction::Quit);
        self.add_shortcut(
            Shortcut::with_modifier(Control, Q, "Quit"),
            ShortcutAction::Quit,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(deprecated)]
    fn press(key: VirtualKeyCode) -> KeyboardInput {
        KeyboardInput {
            scancode: 0,
            state: ElementState::Pressed,
            virtual_keycode: Some(key),
            modifiers: ModifiersState::empty(),
        }
    }

    #[test]
    fn test_shortcut_matching() {
        let shortcut = Shortcut::with_modifier(Modifier::Alt, VirtualKeyCode::Return, "Test");

        assert!(shortcut.matches(VirtualKeyCode::Return, &[Modifier::Alt]));
        assert!(!shortcut.matches(VirtualKeyCode::Return, &[Modifier::Alt, Modifier::Shift]));
        assert!(!shortcut.matches(VirtualKeyCode::Return, &[]));
        assert!(!shortcut.matches(VirtualKeyCode::Space, &[Modifier::Alt]));
    }

    #[test]
    fn test_default_shortcuts() {
        let config = ShortcutsConfig::default();

        assert_eq!(
            config.process_key_input(&press(VirtualKeyCode::F11), &[]),
            Some(ShortcutAction::ToggleWindowed)
        );
        assert_eq!(
            config.process_key_input(&press(VirtualKeyCode::Return), &[Modifier::Alt]),
            Some(ShortcutAction::ToggleWindowed)
        );
        assert_eq!(
            config.process_key_input(&press(VirtualKeyCode::Escape), &[]),
            Some(ShortcutAction::LeaveFullscreen)
        );
        assert_eq!(
            config.process_key_input(&press(VirtualKeyCode::Q), &[Modifier::Control]),
            Some(ShortcutAction::Quit)
        );
        assert_eq!(config.process_key_input(&press(VirtualKeyCode::Space), &[]), None);
        assert_eq!(config.shortcuts_for_action(ShortcutAction::ToggleWindowed).len(), 3);
    }

    #[test]
    #[allow(deprecated)]
    fn test_release_and_disabled_ignored() {
        let mut config = ShortcutsConfig::default();
        let release = KeyboardInput {
            state: ElementState::Released,
            ..press(VirtualKeyCode::F11)
        };
        assert_eq!(config.process_key_input(&release, &[]), None);

        config.set_enabled(false);
        assert!(!config.is_enabled());
        assert_eq!(config.process_key_input(&press(VirtualKeyCode::F11), &[]), None);
    }

    #[test]
    fn test_format() {
        let shortcut = Shortcut::with_modifier(Modifier::Alt, VirtualKeyCode::Return, "x");
        assert_eq!(shortcut.format(), "Alt+Enter");
        assert_eq!(Shortcut::key_only(VirtualKeyCode::F11, "x").format(), "F11");
    }
}
