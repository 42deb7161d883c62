/*
 * Flock Module
 *
 * The flock owns the population of boids and advances it one step per frame.
 *
 * Every boid in a frame is evaluated against the same snapshot of the
 * population taken before any boid moves, so the order of the boids has no
 * influence on the result. Neighbor search is a plain scan over the whole
 * snapshot.
 */

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::pillar::Pillar;

// Size of the world the boids live in, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Flock {
    boids: Vec<Boid>,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, boid: Boid) {
        self.boids.push(boid);
    }

    pub fn clear(&mut self) {
        self.boids.clear();
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    // Advance every boid by one step
    pub fn update(&mut self, pillars: &[Pillar], params: &SimulationParams, bounds: Bounds) {
        // Start-of-frame snapshot that every boid reads from
        let snapshot = self.boids.clone();

        for boid in &mut self.boids {
            boid.flock(&snapshot, pillars, params);
            boid.update(params);
            boid.wrap_edges(bounds, params.visual_scale);
        }
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Boid;
    type IntoIter = std::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}

impl Extend<Boid> for Flock {
    fn extend<I: IntoIterator<Item = Boid>>(&mut self, iter: I) {
        self.boids.extend(iter);
    }
}
