/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * and additionally keeps its distance from pillars using the separation rule.
 *
 * Every boid reads the shared SimulationParams on each step, so changes made
 * in the settings panel take effect on the next frame.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::flock::Bounds;
use crate::locatable::Locatable;
use crate::params::SimulationParams;
use crate::pillar::Pillar;
use crate::vector::VectorExt;
use crate::viewport::Viewport;

// Distance below which boids and pillars push a boid away
pub const SEPARATION_RADIUS: f32 = 25.0;
// Distance below which peers count for alignment and cohesion
pub const NEIGHBOR_RADIUS: f32 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl Boid {
    pub fn new(x: f32, y: f32) -> Self {
        Self::with_rng(x, y, &mut rand::thread_rng())
    }

    // Spawn with a unit velocity pointing in a random direction
    pub fn with_rng<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        Self::with_velocity(vec2(x, y), vec2(angle.cos(), angle.sin()))
    }

    pub fn with_velocity(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
        }
    }

    // Apply a force to the boid
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Accumulate the weighted steering forces against the given snapshot
    pub fn flock(&mut self, boids: &[Boid], pillars: &[Pillar], params: &SimulationParams) {
        let separation = self.separation(boids, params) * params.separation_weight;
        let alignment = self.alignment(boids, params) * params.alignment_weight;
        let cohesion = self.cohesion(boids, params) * params.cohesion_weight;
        let pillar_separation = self.separation(pillars, params) * params.pillar_separation_weight;

        self.apply_force(separation);
        self.apply_force(alignment);
        self.apply_force(cohesion);
        self.apply_force(pillar_separation);
    }

    // Update the boid's position based on its velocity and acceleration
    pub fn update(&mut self, params: &SimulationParams) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(params.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    // Teleport to the opposite edge once the boid is fully outside the world
    pub fn wrap_edges(&mut self, bounds: Bounds, r: f32) {
        if self.position.x < -r {
            self.position.x = bounds.width + r;
        }
        if self.position.y < -r {
            self.position.y = bounds.height + r;
        }
        if self.position.x > bounds.width + r {
            self.position.x = -r;
        }
        if self.position.y > bounds.height + r {
            self.position.y = -r;
        }
    }

    // Reynolds: Steering = Desired - Velocity
    fn steer(&self, desired: Vec2, params: &SimulationParams) -> Vec2 {
        (desired.with_magnitude(params.max_speed) - self.velocity).limit(params.max_force)
    }

    // Steer towards a target position
    pub fn seek(&self, target: Vec2, params: &SimulationParams) -> Vec2 {
        self.steer(target - self.position, params)
    }

    // Calculate separation force (avoid crowding neighbors or pillars)
    pub fn separation<T: Locatable>(&self, others: &[T], params: &SimulationParams) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in others {
            let other_position = other.position();
            let d = self.position.distance(other_position);

            // Zero distance is the boid itself (or something sitting exactly on it)
            if d > 0.0 && d < SEPARATION_RADIUS {
                // Point away from the neighbor, weighted by distance
                let diff = (self.position - other_position).unit_or_zero() / d;
                steering += diff;
                count += 1;
            }
        }

        let steering = steering.mean(count);

        if steering.length_squared() > 0.0 {
            self.steer(steering, params)
        } else {
            Vec2::ZERO
        }
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn alignment(&self, boids: &[Boid], params: &SimulationParams) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for other in boids {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < NEIGHBOR_RADIUS {
                sum += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            self.steer(sum.mean(count), params)
        } else {
            Vec2::ZERO
        }
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, boids: &[Boid], params: &SimulationParams) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for other in boids {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < NEIGHBOR_RADIUS {
                sum += other.position;
                count += 1;
            }
        }

        if count > 0 {
            self.seek(sum.mean(count), params)
        } else {
            Vec2::ZERO
        }
    }

    // Draw the boid as a triangle pointing along its velocity
    pub fn draw(&self, draw: &Draw, viewport: &Viewport, scale: f32) {
        let screen_pos = viewport.world_to_screen(self.position);
        let angle = viewport.world_to_screen_angle(self.velocity.heading());

        let points = [
            pt2(scale * 2.0, 0.0),
            pt2(-scale * 2.0, scale),
            pt2(-scale * 2.0, -scale),
        ];

        draw.polygon()
            .color(rgba(0.78, 0.78, 0.78, 0.4))
            .stroke(WHITE)
            .stroke_weight(1.0)
            .points(points)
            .xy(screen_pos)
            .rotate(angle);
    }
}

impl Locatable for Boid {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }
}
