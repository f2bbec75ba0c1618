#![allow(dead_code)]

mod app;
mod assets;
mod audio;
mod character;
mod classes;
mod clock;
mod combat;
mod config;
mod constants;
mod creation;
mod events;
mod input;
mod items;
mod screen;
mod ui;

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use glutin::prelude::*;
use glutin::surface::WindowSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

use audio::AudioOutput;
use clock::FrameClock;
use config::GameConfig;
use events::EventQueue;
use input::InputQueue;
use screen::{FlowControl, ScreenFlow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load();
    puffin::set_scopes_on(std::env::var_os("GARNET_PROFILE").is_some());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    config: GameConfig,
    audio: Box<dyn AudioOutput>,
    state: Option<AppState>,
    /// Fatal platform error raised inside the event loop
    error: Option<Box<dyn std::error::Error>>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // UI
    ui_assets: ui::UiAssets,
    ui_state: ui::UiState,

    // Game state
    flow: ScreenFlow,
    events: EventQueue,
    rng: StdRng,

    // Input and timing
    input: InputQueue,
    clock: FrameClock,
}

impl App {
    fn new(config: GameConfig) -> Self {
        let audio = audio::open_audio(&config);
        Self {
            config,
            audio,
            state: None,
            error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = match app::create_window(event_loop, &self.config) {
            Ok(context) => context,
            Err(e) => {
                log::error!("failed to create window: {}", e);
                self.error = Some(e);
                event_loop.exit();
                return;
            }
        };

        let ui_assets = load_ui_assets(&egui_glow.egui_ctx, &self.config);

        let mut events = EventQueue::new();
        let flow = ScreenFlow::new(viewport_of(&window), &mut events);

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            ui_assets,
            ui_state: ui::UiState::default(),
            flow,
            events,
            rng: StdRng::from_entropy(),
            input: InputQueue::new(),
            clock: FrameClock::new(self.config.target_fps),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // egui sees everything (the inventory window is interactive); the
        // screens see the translated events
        let _ = state.egui_glow.on_window_event(&state.window, &event);
        state.input.handle_window_event(&event, state.window.scale_factor());

        match event {
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
                state.flow.set_viewport(viewport_of(&state.window));
            }
            WindowEvent::RedrawRequested => {
                if state.update_and_render(self.audio.as_mut()) == FlowControl::Exit {
                    log::info!("leaving the dark");
                    self.audio.stop_music();
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            if state.clock.frame_due(Instant::now()) {
                state.window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::WaitUntil(state.clock.next_deadline()));
        }
    }
}

impl AppState {
    fn update_and_render(&mut self, audio: &mut dyn AudioOutput) -> FlowControl {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_function!();

        let dt = self.clock.tick(Instant::now());

        let control = {
            puffin::profile_scope!("advance");
            let input = self.input.drain();
            self.flow.advance(&input, dt, &mut self.rng, &mut self.events)
        };

        {
            puffin::profile_scope!("audio");
            audio::dispatch(&mut self.events, audio);
        }

        if control == FlowControl::Exit {
            return control;
        }

        {
            puffin::profile_scope!("ui");
            let flow = &self.flow;
            let assets = &self.ui_assets;
            let ui_state = &mut self.ui_state;
            self.egui_glow.run(&self.window, |ctx| {
                ui::draw_screen(ctx, flow, assets, ui_state);
            });
        }

        unsafe {
            use glow::HasContext;
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.egui_glow.paint(&self.window);

        if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
            log::debug!("swap_buffers failed: {}", e);
        }

        control
    }
}

/// Window size in UI points
fn viewport_of(window: &Window) -> Vec2 {
    let size = window.inner_size();
    let scale = window.scale_factor() as f32;
    Vec2::new(size.width as f32 / scale, size.height as f32 / scale)
}

fn load_ui_assets(ctx: &egui::Context, config: &GameConfig) -> ui::UiAssets {
    let path = config.sprite_path(assets::TITLE_SPRITE_FILE);
    let title_sprite = match assets::load_sprite(&path, constants::TITLE_SPRITE_SIZE as u32) {
        Ok(image) => Some(ctx.load_texture("title_garnet", image, egui::TextureOptions::LINEAR)),
        Err(e) => {
            log::warn!("{}; drawing the title garnet instead", e);
            None
        }
    };
    ui::UiAssets { title_sprite }
}
