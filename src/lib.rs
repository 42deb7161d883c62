/*
 * Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking application.
 * The simulation core (vector, locatable, pillar, boid, flock, params) has no
 * dependency on a window and can be driven headless; the remaining modules
 * wire it into nannou.
 */

// Re-export key components for easier access
pub use boid::{Boid, NEIGHBOR_RADIUS, SEPARATION_RADIUS};
pub use flock::{Bounds, Flock};
pub use locatable::Locatable;
pub use params::{Param, ParamSpec, SimulationParams};
pub use pillar::Pillar;
pub use vector::VectorExt;
pub use app::Model;

// Define modules
pub mod vector;
pub mod locatable;
pub mod pillar;
pub mod boid;
pub mod flock;
pub mod params;
pub mod viewport;
pub mod input;
pub mod debug;
pub mod ui;
pub mod renderer;
pub mod app;
