use lapse_engine::coords::Vec3;
use lapse_engine::core::{App, AppControl, FrameCtx};
use lapse_engine::scene::LightOrbit;
use lapse_engine::time::{Clock, FrameRateCounter, SystemClock, Timer};
use lapse_engine::window::FramePacing;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

pub const TITLE: &str = "lapse";

const CAPPED_HZ: u32 = 60;

/// Keyboard commands understood by the studio.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePacing,
    ToggleSimulation,
    ResetSimulation,
    Quit,
}

pub fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::KeyP => Some(Action::TogglePacing),
        KeyCode::Space => Some(Action::ToggleSimulation),
        KeyCode::KeyR => Some(Action::ResetSimulation),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

pub fn toggled(pacing: FramePacing) -> FramePacing {
    match pacing {
        FramePacing::Capped(_) => FramePacing::Uncapped,
        FramePacing::Uncapped => FramePacing::capped_hz(CAPPED_HZ),
    }
}

/// Demo scene state: a light circling a fixed subject, plus the FPS readout.
///
/// Frame-rate reporting uses the runtime's wall-clock frame time. The orbit
/// runs on its own timer so it can be paused without freezing the counter.
pub struct Studio<C: Clock = SystemClock> {
    fps: FrameRateCounter,
    simulation: Timer<C>,
    orbit: LightOrbit,
    subject: Vec3,
    pending: Vec<Action>,
}

impl Studio<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Studio<C> {
    /// Studio whose simulation timer reads `clock`.
    pub fn with_clock(clock: C) -> Self {
        let mut simulation = Timer::with_clock(clock);
        simulation.start();
        Self {
            fps: FrameRateCounter::new(),
            simulation,
            orbit: LightOrbit::default(),
            subject: Vec3::new(0.0, 3.0, 0.0),
            pending: Vec::new(),
        }
    }

    fn toggle_simulation(&mut self) {
        if self.simulation.is_running() {
            self.simulation.stop();
            log::info!("simulation paused at {:.3}s", self.simulation.time());
        } else {
            self.simulation.start();
            log::info!("simulation resumed");
        }
    }

    fn reset_simulation(&mut self) {
        self.simulation.reset();
        self.orbit.angle = 0.0;
        log::info!("simulation reset");
    }

    /// Steps the orbit by the simulation time since the previous step.
    fn step_simulation(&mut self) {
        self.step_simulation();
    }

    fn apply(&mut self, action: Action, ctx: &mut FrameCtx<'_>) {
        match action {
            Action::TogglePacing => {
                ctx.runtime.set_pacing(toggled(ctx.runtime.pacing()));
            }
            Action::ToggleSimulation => self.toggle_simulation(),
            Action::ResetSimulation => self.reset_simulation(),
            Action::Quit => ctx.runtime.exit(),
        }
    }
}

impl Default for Studio<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> App for Studio<C> {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if event.state != ElementState::Pressed || event.repeat {
                return AppControl::Continue;
            }
            if let PhysicalKey::Code(code) = event.physical_key {
                if let Some(action) = action_for(code) {
                    self.pending.push(action);
                }
            }
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        for action in std::mem::take(&mut self.pending) {
            self.apply(action, ctx);
        }

        self.step_simulation();

        if let Some(rate) = self.fps.update(ctx.time.dt) {
            ctx.window.set_title(&format!("{TITLE}: {rate}"));

            let light = self.orbit.position(self.subject);
            log::debug!(
                "frame {} {rate}, light at ({:.2}, {:.2}, {:.2})",
                ctx.time.frame_index,
                light.x,
                light.y,
                light.z
            );
        }

        AppControl::Continue
    }
}
