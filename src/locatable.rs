/*
 * Locatable Module
 *
 * Anything with a position in the world can act as a source for the
 * separation rule. Boids and pillars both implement this trait so the same
 * separation routine serves peers and obstacles.
 */

use nannou::prelude::*;

pub trait Locatable {
    fn position(&self) -> Vec2;
}
