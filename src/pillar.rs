/*
 * Pillar Module
 *
 * A pillar is a static obstacle placed by the user. Boids steer away from
 * pillars using the same separation rule they use against each other, with
 * its own weight. Pillars never move and never align or cohere.
 */

use nannou::prelude::*;

use crate::locatable::Locatable;
use crate::viewport::Viewport;

// Diameter of the circle drawn for a pillar
pub const PILLAR_DIAMETER: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pillar {
    position: Vec2,
}

impl Pillar {
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: vec2(x, y) }
    }

    pub fn draw(&self, draw: &Draw, viewport: &Viewport) {
        let screen_pos = viewport.world_to_screen(self.position);

        draw.ellipse()
            .xy(screen_pos)
            .w_h(PILLAR_DIAMETER, PILLAR_DIAMETER)
            .color(rgba(0.78, 0.78, 0.78, 0.4))
            .stroke(WHITE)
            .stroke_weight(1.0);
    }
}

impl Locatable for Pillar {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }
}
