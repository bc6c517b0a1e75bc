use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::time::{FrameClock, FrameTime};

/// How often the runtime redraws.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FramePacing {
    /// At most one frame per interval; the loop sleeps in between.
    Capped(Duration),
    /// Redraw as fast as the event loop spins.
    Uncapped,
}

impl FramePacing {
    /// Capped pacing at `hz` frames per second.
    pub fn capped_hz(hz: u32) -> Self {
        debug_assert!(hz > 0);
        FramePacing::Capped(Duration::from_secs(1) / hz.max(1))
    }
}

impl Default for FramePacing {
    fn default() -> Self {
        FramePacing::capped_hz(60)
    }
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub pacing: FramePacing,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "lapse".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            pacing: FramePacing::default(),
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
pub struct RuntimeCtx {
    pacing: FramePacing,
    commands: Vec<Command>,
}

impl RuntimeCtx {
    fn new(pacing: FramePacing) -> Self {
        Self {
            pacing,
            commands: Vec::new(),
        }
    }

    /// Pacing in effect for the current frame.
    pub fn pacing(&self) -> FramePacing {
        self.pacing
    }

    pub fn set_pacing(&mut self, pacing: FramePacing) {
        self.commands.push(Command::SetPacing(pacing));
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    SetPacing(FramePacing),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

/// What the loop should do when it runs out of events.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Wake {
    redraw: bool,
    until: Option<Instant>,
}

fn schedule(pacing: FramePacing, now: Instant, next_frame: Instant) -> Wake {
    match pacing {
        FramePacing::Uncapped => Wake {
            redraw: true,
            until: None,
        },
        FramePacing::Capped(_) => Wake {
            redraw: now >= next_frame,
            until: Some(next_frame),
        },
    }
}

fn next_frame_after(pacing: FramePacing, frame_start: Instant) -> Instant {
    match pacing {
        FramePacing::Capped(interval) => frame_start + interval,
        FramePacing::Uncapped => frame_start,
    }
}

struct WindowEntry {
    window: Window,
    clock: FrameClock,
    next_frame: Instant,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    app: A,
    pacing: FramePacing,

    window: Option<WindowEntry>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        let pacing = config.pacing;
        Self {
            config,
            app,
            pacing,
            window: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowId> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let id = window.id();
        log::debug!("window {id:?} created, pacing {:?}", self.pacing);

        self.window = Some(WindowEntry {
            window,
            clock: FrameClock::new(),
            next_frame: Instant::now(),
        });
        Ok(id)
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::SetPacing(pacing) => {
                    if pacing != self.pacing {
                        log::info!("frame pacing set to {pacing:?}");
                        self.pacing = pacing;
                        if let Some(entry) = self.window.as_mut() {
                            entry.next_frame = Instant::now();
                        }
                    }
                }
                Command::Exit => self.request_exit(),
            }
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let mut runtime_ctx = RuntimeCtx::new(self.pacing);
        let mut app_control = AppControl::Continue;

        // Drive one frame for this window.
        if let Some(entry) = self.window.as_mut() {
            let frame_start = Instant::now();
            let ft: FrameTime = entry.clock.tick();

            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: &entry.window,
                },
                time: ft,
                runtime: &mut runtime_ctx,
            };

            app_control = self.app.on_frame(&mut ctx);

            entry.window.pre_present_notify();
            entry.next_frame = next_frame_after(self.pacing, frame_start);
        }

        if app_control == AppControl::Exit {
            runtime_ctx.exit();
        }

        self.apply_commands(event_loop, runtime_ctx);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.window.as_ref() {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_ref() else {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        };

        let wake = schedule(self.pacing, Instant::now(), entry.next_frame);
        if wake.redraw {
            entry.window.request_redraw();
        }

        event_loop.set_control_flow(match wake.until {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Poll,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.request_exit();
            event_loop.exit();
            return;
        }

        // Runtime-managed window lifecycle / resize / redraw handling.
        match &event {
            WindowEvent::CloseRequested => {
                log::debug!("window {window_id:?} closed");
                self.window = None;
                self.request_exit();
                event_loop.exit();
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_ref() {
                    entry.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
