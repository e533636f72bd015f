use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use walkthrough::camera::{ControllerState, FirstPersonController};
use walkthrough::cli::Cli;
use walkthrough::clock::FrameClock;
use walkthrough::config::ControllerConfig;
use walkthrough::input::{HostSignal, WinitInput};
use walkthrough::interaction::UiEvent;
use walkthrough::scene::create_portfolio_targets;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    input: WinitInput,
    controller: FirstPersonController,
    clock: FrameClock,
    last_look_target: Option<String>,
}

impl App {
    fn new(cli: Cli, controller: FirstPersonController) -> Self {
        Self {
            cli,
            window: None,
            input: WinitInput::new(),
            controller,
            clock: FrameClock::new(),
            last_look_target: None,
        }
    }

    fn set_pointer_lock(&mut self, locked: bool) {
        let Some(window) = &self.window else {
            return;
        };

        let result = if locked {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };

        match result {
            Ok(()) => {
                window.set_cursor_visible(!locked);
                self.input.set_pointer_locked(locked);
            }
            Err(e) => warn!("Failed to change cursor grab: {}", e),
        }
    }

    fn handle_signal(&mut self, signal: HostSignal) {
        match signal {
            HostSignal::InteractionTrigger => {
                let in_menu = *self.controller.state() == ControllerState::InMenu;
                if !self.input.pointer_locked() && !in_menu {
                    // Clicking back into the window ends a zoom; it must not
                    // also re-zoom on whatever is under the restored crosshair
                    let was_zoomed = self.controller.is_zoomed();
                    self.set_pointer_lock(true);
                    self.controller.on_pointer_lock_acquired();
                    if was_zoomed {
                        self.flush_ui();
                        return;
                    }
                }
                let outcome = self.controller.on_interaction_trigger();
                debug!("Interaction: {:?}", outcome);
            }
            HostSignal::PointerLockLost => {
                self.set_pointer_lock(false);
                self.controller.on_pointer_lock_lost();
            }
        }
        self.flush_ui();
    }

    fn flush_ui(&mut self) {
        let events = std::mem::take(self.controller.ui_mut());
        for event in events {
            match event {
                UiEvent::PointerLock(locked) => self.set_pointer_lock(locked),
                other if !self.cli.no_ui => info!("ui: {:?}", other),
                _ => {}
            }
        }
    }

    fn frame(&mut self) {
        let delta = self.clock.tick();

        self.input.sampler_mut().update();
        let snapshot = self.input.sampler().snapshot();
        self.controller.update(&snapshot, delta);
        self.flush_ui();

        let look_target = self.controller.look_target().map(str::to_owned);
        if look_target != self.last_look_target {
            if let Some(window) = &self.window {
                let title = match &look_target {
                    Some(name) => format!("Walkthrough - {}", name),
                    None => "Walkthrough".to_string(),
                };
                window.set_title(&title);
            }
            self.last_look_target = look_target;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Walkthrough")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.controller.set_viewport(size.width as f32, size.height as f32);
            self.window = Some(window);
            self.clock.reset();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(signal) = self.input.process_window_event(&event) {
            self.handle_signal(signal);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.controller.set_viewport(size.width as f32, size.height as f32);
            }
            WindowEvent::Focused(true) => self.clock.reset(),
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config(cli: &Cli) -> Result<ControllerConfig> {
    match &cli.config {
        Some(path) => ControllerConfig::from_json_file(path)
            .with_context(|| format!("Failed to load controller config: {:?}", path)),
        None => Ok(ControllerConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let mut controller =
        FirstPersonController::with_defaults(config).context("Invalid controller configuration")?;
    controller.set_viewport(cli.width as f32, cli.height as f32);

    let report = controller.register_interactable_targets(create_portfolio_targets());
    info!("{} interactable targets registered", report.accepted);
    for rejected in &report.rejected {
        warn!("Rejected target: {}", rejected);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, controller);

    info!("Walkthrough - Controls: click to look around, WASD to move, click props to inspect, R to go back, Escape for menu");
    event_loop.run_app(&mut app)?;

    Ok(())
}
