/*
 * Input Module
 *
 * This module handles user input events for the flocking simulation.
 * Input is translated into Commands by InputState, which knows nothing about
 * windows, and the nannou event handlers at the bottom of the file feed it
 * and hand the resulting commands to the application.
 *
 * Controls:
 * - B / P: click creates boids / drag creates pillars
 * - G: show or hide the settings panel
 * - S: save the canvas to a PNG file
 * - K: save the current parameters to the config file
 * - Space: pause or resume
 * - Delete / Backspace: clear everything
 */

use nannou::prelude::*;
use nannou::winit::event::WindowEvent;

use crate::app::{self, Model};
use crate::viewport::Viewport;

// Minimum pointer travel between two pillars placed by dragging
pub const PILLAR_SPACING: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnMode {
    Boid,
    Pillar,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SpawnBoid(Vec2),
    SpawnPillar(Vec2),
    SetMode(SpawnMode),
    TogglePanel,
    TogglePause,
    ClearAll,
    SaveFrame,
    SaveParams,
}

#[derive(Clone, Debug)]
pub struct InputState {
    pub mode: SpawnMode,
    last_pillar_position: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(SpawnMode::Boid)
    }
}

impl InputState {
    pub fn new(mode: SpawnMode) -> Self {
        Self {
            mode,
            last_pillar_position: Vec2::ZERO,
        }
    }

    pub fn last_pillar_position(&self) -> Vec2 {
        self.last_pillar_position
    }

    // A press spawns a boid at the pointer, but only in boid mode
    pub fn pointer_pressed(&self, world_pos: Vec2) -> Option<Command> {
        match self.mode {
            SpawnMode::Boid => Some(Command::SpawnBoid(world_pos)),
            SpawnMode::Pillar => None,
        }
    }

    // Called every frame while the button is held. Drops a pillar whenever the
    // pointer has travelled far enough from the previous one.
    pub fn pointer_held(&mut self, world_pos: Vec2) -> Option<Command> {
        if self.mode != SpawnMode::Pillar {
            return None;
        }
        if world_pos.distance(self.last_pillar_position) > PILLAR_SPACING {
            self.last_pillar_position = world_pos;
            Some(Command::SpawnPillar(world_pos))
        } else {
            None
        }
    }

    pub fn key_released(&self, key: Key) -> Option<Command> {
        match key {
            Key::B => Some(Command::SetMode(SpawnMode::Boid)),
            Key::P => Some(Command::SetMode(SpawnMode::Pillar)),
            Key::G => Some(Command::TogglePanel),
            Key::S => Some(Command::SaveFrame),
            Key::K => Some(Command::SaveParams),
            Key::Space => Some(Command::TogglePause),
            Key::Delete | Key::Back => Some(Command::ClearAll),
            _ => None,
        }
    }

    pub fn set_mode(&mut self, mode: SpawnMode) {
        self.mode = mode;
    }

    // Forget where the last pillar went, used when everything is cleared
    pub fn reset_anchor(&mut self) {
        self.last_pillar_position = Vec2::ZERO;
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let viewport = Viewport::new(app.window_rect());
    let world_pos = viewport.screen_to_world(app.mouse.position());

    if let Some(command) = model.input.pointer_pressed(world_pos) {
        app::apply_command(app, model, command);
    }
}

// Polled from the update loop: nannou only reports presses, not held buttons
pub fn poll_held_pointer(app: &App, model: &mut Model, viewport: &Viewport) {
    if !app.mouse.buttons.left().is_down() || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let world_pos = viewport.screen_to_world(app.mouse.position());

    if let Some(command) = model.input.pointer_held(world_pos) {
        app::apply_command(app, model, command);
    }
}

// Key released event handler
pub fn key_released(app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    if let Some(command) = model.input.key_released(key) {
        app::apply_command(app, model, command);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
