/*
 * Application Module
 *
 * This module defines the main application model and logic for the flocking
 * simulation. It handles initialization, the per-frame update and the
 * commands produced by the input module. Rendering lives in the renderer
 * module.
 *
 * One simulation step runs per frame, between input handling and rendering.
 */

use argh::FromArgs;
use nannou::prelude::*;
use nannou_egui::Egui;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::boid::Boid;
use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input::{self, Command, InputState, SpawnMode};
use crate::params::SimulationParams;
use crate::pillar::Pillar;
use crate::renderer::view;
use crate::ui;
use crate::viewport::Viewport;

/// Interactive boid flocking simulation with pillars.
#[derive(FromArgs, Clone, Debug)]
pub struct Options {
    /// parameter file loaded at startup and written by the K key
    #[argh(option, default = "PathBuf::from(\"flocking.json\")")]
    pub config: PathBuf,

    /// number of boids spawned at the centre of the window at startup
    #[argh(option, default = "0")]
    pub boids: usize,

    /// start with clicks creating pillars instead of boids
    #[argh(switch)]
    pub pillar_mode: bool,

    /// show the settings panel at startup
    #[argh(switch)]
    pub show_panel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: PathBuf::from("flocking.json"),
            boids: 0,
            pillar_mode: false,
            show_panel: false,
        }
    }
}

static OPTIONS: OnceLock<Options> = OnceLock::new();

// nannou builds the model from a plain function, so the parsed command line
// is handed over through a global set once before the app starts
pub fn set_options(options: Options) {
    if OPTIONS.set(options).is_err() {
        log::warn!("command line options were already set");
    }
}

fn options() -> Options {
    OPTIONS.get().cloned().unwrap_or_default()
}

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub pillars: Vec<Pillar>,
    pub params: SimulationParams,
    pub input: InputState,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub panel_visible: bool,
    pub paused: bool,
    pub config_path: PathBuf,
    pub frames_saved: u32,
}

// Load parameters from the config file, falling back to defaults
fn load_params(path: &Path) -> SimulationParams {
    if !path.exists() {
        log::info!("no config at {}, using default parameters", path.display());
        return SimulationParams::default();
    }

    match SimulationParams::load(path) {
        Ok(params) => {
            log::info!("loaded parameters from {}", path.display());
            params
        }
        Err(e) => {
            log::warn!("failed to load {}: {}, using default parameters", path.display(), e);
            SimulationParams::default()
        }
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let options = options();

    // Size the window at 80% of the primary monitor when one is available
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 800.0),
    };

    let window_id = app
        .new_window()
        .title("Flocking")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .mouse_pressed(input::mouse_pressed)
        .key_released(input::key_released)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to create window");

    let window = app.window(window_id).expect("window was just created");
    let egui = Egui::from_window(&window);

    let params = load_params(&options.config);

    // Spawn the initial boids in the middle of the world
    let bounds = Viewport::new(window.rect()).bounds();
    let mut flock = Flock::new();
    flock.extend((0..options.boids).map(|_| Boid::new(bounds.width / 2.0, bounds.height / 2.0)));

    let mode = if options.pillar_mode {
        SpawnMode::Pillar
    } else {
        SpawnMode::Boid
    };

    log::info!(
        "starting with {} boids in a {:.0}x{:.0} world",
        flock.len(),
        bounds.width,
        bounds.height
    );

    Model {
        flock,
        pillars: Vec::new(),
        params,
        input: InputState::new(mode),
        egui,
        debug_info: DebugInfo::default(),
        panel_visible: options.show_panel,
        paused: false,
        config_path: options.config,
        frames_saved: 0,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let response = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.debug_info,
        model.panel_visible,
        &mut model.paused,
    );

    for param in &response.changed {
        log::debug!("{} set to {}", param.spec().label, model.params.get(*param));
    }
    if response.reset_params {
        model.params.reset();
        log::info!("parameters reset to defaults");
    }
    if response.clear_all {
        apply_command(app, model, Command::ClearAll);
    }

    let viewport = Viewport::new(app.window_rect());
    input::poll_held_pointer(app, model, &viewport);

    if !model.paused {
        model.flock.update(&model.pillars, &model.params, viewport.bounds());
        model.debug_info.steps += 1;
    }
}

// Apply a command produced by the input module or the settings panel
pub fn apply_command(app: &App, model: &mut Model, command: Command) {
    match command {
        Command::SpawnBoid(position) => {
            model.flock.add(Boid::new(position.x, position.y));
            log::debug!("boid spawned at ({:.0}, {:.0})", position.x, position.y);
        }
        Command::SpawnPillar(position) => {
            model.pillars.push(Pillar::new(position.x, position.y));
            log::debug!("pillar placed at ({:.0}, {:.0})", position.x, position.y);
        }
        Command::SetMode(mode) => {
            model.input.set_mode(mode);
        }
        Command::TogglePanel => {
            model.panel_visible = !model.panel_visible;
        }
        Command::TogglePause => {
            model.paused = !model.paused;
        }
        Command::ClearAll => {
            model.flock.clear();
            model.pillars.clear();
            model.input.reset_anchor();
            log::info!("cleared all boids and pillars");
        }
        Command::SaveFrame => save_frame(app, model),
        Command::SaveParams => match model.params.save(&model.config_path) {
            Ok(()) => log::info!("saved parameters to {}", model.config_path.display()),
            Err(e) => log::warn!("failed to save {}: {}", model.config_path.display(), e),
        },
    }
}

// Capture the next rendered frame to a numbered PNG
fn save_frame(app: &App, model: &mut Model) {
    let path = PathBuf::from(format!("flocking-{:04}.png", model.frames_saved));
    app.main_window().capture_frame(&path);
    model.frames_saved += 1;
    log::info!("saving frame to {}", path.display());
}
