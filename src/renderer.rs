/*
 * Renderer Module
 *
 * This module handles the rendering of the flocking simulation.
 * It draws the boids, the pillars and the help text, then the egui panel on top.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::viewport::Viewport;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(rgb(0.2, 0.2, 0.2));

    let window_rect = app.window_rect();
    let viewport = Viewport::new(window_rect);

    ui::draw_instructions(
        &draw,
        window_rect,
        model.input.mode,
        model.flock.len(),
        model.pillars.len(),
        model.paused,
    );

    for boid in &model.flock {
        boid.draw(&draw, &viewport, model.params.visual_scale);
    }

    for pillar in &model.pillars {
        pillar.draw(&draw, &viewport);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::warn!("failed to draw frame: {:?}", e);
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::warn!("failed to draw settings panel: {:?}", e);
    }
}
