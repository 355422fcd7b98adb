//! winit event loop driving the display controller.

use crate::config::AppConfig;
use crate::host::{detect_monitors, WinitHost};
use crate::platform::DisplayServer;
use anyhow::{Context, Result};
use slide_display::{
    DisplayWindow, HostEvent, MonitorResolver, OverlayKind, PlatformQuirks,
};
use slide_input::{InputAction, InputDispatcher, ShortcutAction};
use std::time::Instant;
use tracing::{debug, info, trace};
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowId;

const WINDOW_TITLE: &str = "slideview";

/// Print a summary of the detected monitors.
pub fn list_monitors() {
    let event_loop = EventLoop::new();
    println!("{}", MonitorResolver::summary(&detect_monitors(&event_loop)));
}

/// Whether `event` tells us `window` is on screen. Only a redraw counts:
/// `Resumed` arrives before the first configure on Wayland.
fn is_map_event<T>(event: &Event<'_, T>, window: WindowId) -> bool {
    matches!(event, Event::RedrawRequested(id) if *id == window)
}

/// Owns the controller plus the input state fed into it.
struct Presenter {
    window: DisplayWindow<WinitHost>,
    input: InputDispatcher,
    quit: bool,
}

impl Presenter {
    fn dispatch(&mut self, event: HostEvent) {
        if self.window.host().is_subscribed(event.kind()) {
            self.window.handle_event(event);
        }
    }

    /// First redraw of the window: deliver the map event, then realize the
    /// overlays bottom to top.
    fn on_mapped(&mut self) {
        if !self.window.host_mut().mark_mapped() {
            return;
        }
        self.dispatch(HostEvent::Mapped);
        for kind in OverlayKind::STACK {
            self.dispatch(HostEvent::SurfaceRealized(kind));
            debug!(
                "{} layer realized, passthrough: {}",
                kind,
                self.window.host().input_passthrough(kind)
            );
        }
    }

    fn on_action(&mut self, action: InputAction) {
        match action {
            InputAction::Host(event) => {
                if event == HostEvent::PointerMotion {
                    let pointer = self.input.pointer_position();
                    let target = self.window.overlays().input_target();
                    let host = self.window.host_mut();
                    host.set_pointer(pointer);
                    host.route_pointer(target);
                    trace!("Pointer at {:?} on {:?} layer", pointer, host.pointer_layer());
                }
                self.dispatch(event);
            }
            InputAction::Shortcut(ShortcutAction::ToggleWindowed) => self.window.toggle_windowed(),
            InputAction::Shortcut(ShortcutAction::LeaveFullscreen) => {
                if !self.window.is_windowed() {
                    self.window.toggle_windowed();
                }
            }
            InputAction::Shortcut(ShortcutAction::Quit) => {
                info!("Quit requested");
                self.quit = true;
            }
        }
    }

    fn fire_due_timers(&mut self) {
        let due = self.window.host_mut().take_due_timers(Instant::now());
        for token in due {
            self.dispatch(HostEvent::TimerFired(token));
        }
    }

    fn update_control_flow(&self, control_flow: &mut ControlFlow) {
        if self.quit {
            control_flow.set_exit();
            return;
        }
        match self.window.host().next_deadline() {
            Some(deadline) => control_flow.set_wait_until(deadline),
            None => control_flow.set_wait(),
        }
    }
}

/// Create the window and run until quit. Only returns on setup failure.
pub fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoop::new();

    let server = DisplayServer::detect();
    let quirks: PlatformQuirks = server.quirks(&config.platform);

    let host = WinitHost::new(&event_loop, WINDOW_TITLE).context("Failed to create window")?;
    let window = DisplayWindow::new(host, &config.display, quirks)
        .context("Failed to set up the presentation window")?;

    let mut presenter = Presenter {
        window,
        input: InputDispatcher::new(),
        quit: false,
    };

    presenter.window.host().request_redraw();

    info!("Entering event loop");
    event_loop.run(move |event, _target, control_flow| {
        match event {
            Event::Resumed => debug!("Event loop resumed"),
            Event::WindowEvent { window_id, event } if window_id == presenter.window.host().window_id() => {
                for action in presenter.input.handle_window_event(&event) {
                    presenter.on_action(action);
                }
            }
            ref event if is_map_event(event, presenter.window.host().window_id()) => {
                presenter.on_mapped();
            }
            Event::MainEventsCleared => presenter.fire_due_timers(),
            Event::LoopDestroyed => debug!("Event loop destroyed"),
            _ => {}
        }

        presenter.update_control_flow(control_flow);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_redraw_maps_the_window() {
        let window = unsafe { WindowId::dummy() };
        assert!(is_map_event::<()>(&Event::RedrawRequested(window), window));
        assert!(!is_map_event::<()>(&Event::Resumed, window));
        assert!(!is_map_event::<()>(&Event::MainEventsCleared, window));
    }
}
