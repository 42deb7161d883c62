/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. The settings panel binds one slider to every Param, so
 * adding a parameter to the tuning table is enough to make it adjustable.
 * It also draws the on-canvas help text.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::input::SpawnMode;
use crate::params::{Param, SimulationParams};

// What happened in the settings panel this frame
#[derive(Debug, Default)]
pub struct UiResponse {
    pub changed: Vec<Param>,
    pub reset_params: bool,
    pub clear_all: bool,
}

// Update the settings panel. Nothing is shown while the panel is hidden, but
// egui still needs a frame every update.
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    panel_visible: bool,
    paused: &mut bool,
) -> UiResponse {
    let mut response = UiResponse::default();
    let ctx = egui.begin_frame();

    if !panel_visible {
        return response;
    }

    egui::Window::new("Settings")
        .default_pos([10.0, 140.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flocking Behavior", |ui| {
                for param in Param::ALL {
                    let spec = param.spec();
                    let mut value = params.get(param);
                    let slider = egui::Slider::new(&mut value, spec.range())
                        .step_by(spec.step as f64)
                        .text(spec.label);
                    if ui.add(slider).changed() {
                        params.set(param, value);
                        response.changed.push(param);
                    }
                }

                if ui.button("Reset Parameters").clicked() {
                    response.reset_params = true;
                }
            });

            ui.collapsing("Performance", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
                ui.label(format!("Steps: {}", debug_info.steps));
            });

            ui.checkbox(paused, "Pause Simulation");

            if ui.button("Clear Everything").clicked() {
                response.clear_all = true;
            }
        });

    response
}

// Draw the key bindings and counters in the top-left corner of the window
pub fn draw_instructions(
    draw: &Draw,
    window_rect: Rect,
    mode: SpawnMode,
    boid_count: usize,
    pillar_count: usize,
    paused: bool,
) {
    let margin = 10.0;
    let line_height = 20.0;
    let text_width = 300.0;

    let active = rgb(1.0, 1.0, 1.0);
    let inactive = rgb(0.78, 0.78, 0.78);
    let (boid_color, pillar_color) = match mode {
        SpawnMode::Boid => (active, inactive),
        SpawnMode::Pillar => (inactive, active),
    };

    let mut lines = vec![
        ("S: Save Canvas".to_string(), inactive),
        (format!("B: Click to create bird [{}]", boid_count), boid_color),
        (format!("P: Click to create pillar [{}]", pillar_count), pillar_color),
        ("G: Show/Hide Settings".to_string(), inactive),
        ("DEL: Clear everything".to_string(), inactive),
    ];
    if paused {
        lines.push(("SPACE: Paused".to_string(), active));
    }

    let text_x = window_rect.left() + margin + text_width / 2.0;

    for (i, (text, color)) in lines.iter().enumerate() {
        let y = window_rect.top() - margin - (i as f32 + 0.5) * line_height;

        draw.text(text)
            .x_y(text_x, y)
            .w(text_width)
            .left_justify()
            .color(*color)
            .font_size(12);
    }
}
