//! slide-input: map winit events onto the presentation window controller
//!
//! [`InputDispatcher`] turns winit [`WindowEvent`]s into the host events
//! `slide-display` consumes (pointer motion, configure) and into shortcut
//! actions for the event loop.

mod shortcuts;

use slide_common::{Point, Size};
use slide_display::HostEvent;
use winit::event::WindowEvent;

pub use shortcuts::{Modifier, Shortcut, ShortcutAction, ShortcutsConfig};

/// What a window event means for the presentation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to `DisplayWindow::handle_event`
    Host(HostEvent),
    /// A keyboard shortcut fired
    Shortcut(ShortcutAction),
}

/// Input dispatcher state.
#[derive(Debug, Default)]
pub struct InputDispatcher {
    shortcuts: ShortcutsConfig,
    modifiers: Vec<Modifier>,
    /// Last pointer position, relative to the window
    pointer: Option<Point>,
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pointer position inside the window, if the pointer has been seen.
    pub fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    /// Handle a winit WindowEvent and return zero or more actions.
    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) -> Vec<InputAction> {
        let mut out = Vec::new();
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = Some(Point::new(position.x as i32, position.y as i32));
                out.push(InputAction::Host(HostEvent::PointerMotion));
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer = None;
            }
            WindowEvent::Resized(size) => {
                out.push(InputAction::Host(HostEvent::Configure(Size::new(
                    size.width,
                    size.height,
                ))));
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                out.push(InputAction::Host(HostEvent::Configure(Size::new(
                    new_inner_size.width,
                    new_inner_size.height,
                ))));
            }
            WindowEvent::ModifiersChanged(state) => {
                self.modifiers = Modifier::active(*state);
            }
            WindowEvent::KeyboardInput { input, .. } => {
                if let Some(action) = self.shortcuts.process_key_input(input, &self.modifiers) {
                    out.push(InputAction::Shortcut(action));
                }
            }
            WindowEvent::CloseRequested => {
                out.push(InputAction::Shortcut(ShortcutAction::Quit));
            }
            _ => {}
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{
        DeviceId, ElementState, KeyboardInput, ModifiersState, VirtualKeyCode,
    };

    #[allow(deprecated)]
    fn cursor_moved(x: f64, y: f64) -> WindowEvent<'static> {
        WindowEvent::CursorMoved {
            device_id: unsafe { DeviceId::dummy() },
            position: PhysicalPosition::new(x, y),
            modifiers: ModifiersState::empty(),
        }
    }

    #[allow(deprecated)]
    fn key(key: VirtualKeyCode) -> WindowEvent<'static> {
        WindowEvent::KeyboardInput {
            device_id: unsafe { DeviceId::dummy() },
            input: KeyboardInput {
                scancode: 0,
                state: ElementState::Pressed,
                virtual_keycode: Some(key),
                modifiers: ModifiersState::empty(),
            },
            is_synthetic: false,
        }
    }

    #[test]
    fn test_motion_generates_pointer_event() {
        let mut d = InputDispatcher::new();
        let actions = d.handle_window_event(&cursor_moved(100.0, 200.0));

        assert_eq!(actions, vec![InputAction::Host(HostEvent::PointerMotion)]);
        assert_eq!(d.pointer_position(), Some(Point::new(100, 200)));
    }

    #[test]
    fn test_resize_generates_configure() {
        let mut d = InputDispatcher::new();
        let actions = d.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(1280, 720)));

        assert_eq!(
            actions,
            vec![InputAction::Host(HostEvent::Configure(Size::new(1280, 720)))]
        );
    }

    #[test]
    fn test_modifiers_affect_shortcuts() {
        let mut d = InputDispatcher::new();
        assert!(d.handle_window_event(&key(VirtualKeyCode::Return)).is_empty());

        d.handle_window_event(&WindowEvent::ModifiersChanged(ModifiersState::ALT));
        assert_eq!(
            d.handle_window_event(&key(VirtualKeyCode::Return)),
            vec![InputAction::Shortcut(ShortcutAction::ToggleWindowed)]
        );
    }

    #[test]
    fn test_close_requested_quits() {
        let mut d = InputDispatcher::new();
        assert_eq!(
            d.handle_window_event(&WindowEvent::CloseRequested),
            vec![InputAction::Shortcut(ShortcutAction::Quit)]
        );
    }
}
