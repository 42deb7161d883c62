/*
 * Viewport Module
 *
 * The simulation world is laid out like a canvas: origin in the top-left
 * corner, x to the right, y downwards, and exactly as large as the window.
 * nannou draws with the origin in the middle of the window and y upwards.
 * The viewport converts between the two so the boid rules never need to know
 * about window coordinates.
 */

use nannou::prelude::*;

use crate::flock::Bounds;

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub window_rect: Rect,
}

impl Viewport {
    pub fn new(window_rect: Rect) -> Self {
        Self { window_rect }
    }

    // World dimensions follow the window, so resizing the window resizes the world
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.window_rect.w(), self.window_rect.h())
    }

    // Convert a point from world space to screen space
    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        vec2(
            self.window_rect.left() + point.x,
            self.window_rect.top() - point.y,
        )
    }

    // Convert a point from screen space to world space
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        vec2(
            point.x - self.window_rect.left(),
            self.window_rect.top() - point.y,
        )
    }

    // Headings flip sign because the y axis points the other way on screen
    pub fn world_to_screen_angle(&self, angle: f32) -> f32 {
        -angle
    }
}
