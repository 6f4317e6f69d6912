//! Cat vs Dogs entry point
//!
//! Opens the window, loads assets and runs one simulation tick per frame.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use cat_vs_dogs::assets::GameAssets;
use cat_vs_dogs::platform::{FrameLimiter, InputState};
use cat_vs_dogs::renderer::{RenderState, compose};
use cat_vs_dogs::sim::{GameEvent, GameState, Outcome, tick};
use cat_vs_dogs::{HighScores, Settings};

/// Window plus the GPU state drawing into it
struct Graphics {
    window: Arc<Window>,
    render_state: RenderState,
}

struct App {
    settings: Settings,
    assets: GameAssets,
    state: GameState,
    scores: HighScores,
    input: InputState,
    limiter: FrameLimiter,
    gfx: Option<Graphics>,
    /// Fatal error raised inside the event loop, returned from `main`
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings, assets: GameAssets) -> Self {
        let seed = settings.resolve_seed();
        log::info!("Game initialized with seed: {}", seed);
        let state = GameState::new(seed).with_jump_trigger(settings.jump_trigger);
        let limiter = FrameLimiter::new(settings.target_fps, Instant::now());
        Self {
            settings,
            assets,
            state,
            scores: HighScores::new(),
            input: InputState::new(),
            limiter,
            gfx: None,
            error: None,
        }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let (width, height) = self.settings.window_size();
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title("Cat vs Dogs")
                    .with_inner_size(winit::dpi::PhysicalSize::new(width, height)),
            )?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("No compatible graphics adapter")?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
            &self.assets,
        ))?;

        Ok(Graphics {
            window,
            render_state,
        })
    }

    fn record(&mut self, event: GameEvent) {
        let (outcome, score) = match event {
            GameEvent::Won { score } => (Outcome::Won, score),
            GameEvent::Lost { score } => (Outcome::Lost, score),
            GameEvent::Restarted => {
                log::info!("Run restarted");
                return;
            }
        };
        let score = score.max(0.0) as u32;
        match self.scores.add_run(score, outcome) {
            Some(rank) => log::info!("Run {:?} with score {} (rank {})", outcome, score, rank),
            None => log::info!("Run {:?} with score {}", outcome, score),
        }
    }

    /// Tick if the limiter scheduled one, then draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.limiter.take_tick() {
            let input = self.input.tick_input();
            tick(&mut self.state, &input);
            self.input.end_frame();
            for event in self.state.drain_events() {
                self.record(event);
            }
        }

        let cmds = compose(&self.state, &self.scores);
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        match gfx.render_state.render(&cmds) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.error = Some(anyhow!("GPU out of memory"));
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(gfx) => self.gfx = Some(gfx),
            Err(e) => {
                self.error = Some(e.context("Failed to initialize graphics"));
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(gfx) = self.gfx.as_ref() {
            if self.limiter.poll(Instant::now()) {
                gfx.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.limiter.deadline()));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.render_state.resize(size.width, size.height);
                }
            }

            // Key-ups are lost while unfocused
            WindowEvent::Focused(false) => self.input.clear(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => {
                    self.input.key_down(code);
                    if self.input.quit_requested() {
                        event_loop.exit();
                    }
                }
                ElementState::Released => self.input.key_up(code),
            },

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let assets = GameAssets::load(&settings.assets).context("Failed to load game assets")?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings, assets);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
