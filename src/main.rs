/*
 * Flocking Simulation
 *
 * Boids follow three rules, separation, alignment and cohesion, and steer
 * around pillars placed by the user. Parameters can be tuned live in the
 * settings panel (press G).
 *
 * Set RUST_LOG=debug to see spawns and parameter changes.
 */

use flocking::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options: app::Options = argh::from_env();
    app::set_options(options);

    nannou::app(app::model).update(app::update).run();
}
