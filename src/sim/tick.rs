//! Fixed-timestep simulation driver
//!
//! Owns the body and wall collections. Each tick: optionally spawn, integrate
//! every body, then run the three-stage resolver (borders, pairs in ascending
//! index order, walls) for the configured number of relaxation passes.
//! Single-threaded and deterministic: identical config and tick count give
//! identical state.
//!
//! Known limitation: the timestep is fixed per body at spawn time and is
//! decoupled from wall-clock frame duration. The driver does not sub-step to
//! absorb frame-time variance.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{SimConfig, SpawnerConfig};
use crate::error::SimError;
use crate::sim::body::{Body, LaunchParams};
use crate::sim::collision::{Bounds, Collide};
use crate::sim::wall::Wall;

/// Presentation interface: one call per body and per wall, once per tick,
/// after resolution. The kernel performs no drawing.
pub trait RenderSink {
    fn ball(&mut self, position: Vec2, radius: f32);
    fn wall(&mut self, wall: &Wall);
}

/// Timed auto-spawner, producing launch parameters on a fixed simulation-time
/// cadence with a seeded radius draw.
#[derive(Debug, Clone)]
struct Spawner {
    config: SpawnerConfig,
    rng: Pcg32,
    clock: f32,
}

impl Spawner {
    fn new(config: SpawnerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            clock: 0.0,
        }
    }

    fn poll(&mut self, dt: f32) -> Option<LaunchParams> {
        self.clock += dt;
        if self.clock < self.config.delay {
            return None;
        }
        self.clock = 0.0;
        Some(LaunchParams {
            radius: self
                .rng
                .random_range(self.config.min_radius..=self.config.max_radius),
            position: self.config.position,
            speed: self.config.speed,
            angle: self.config.angle,
        })
    }
}

/// The simulation, generic over the integration scheme. The scheme is fixed
/// for the whole run by the choice of `B`.
pub struct Simulation<B: Collide> {
    bodies: Vec<B>,
    walls: Vec<Wall>,
    bounds: Bounds,
    step: f32,
    iterations: u32,
    max_balls: usize,
    spawner: Option<Spawner>,
    ticks: u64,
}

impl<B: Collide> Simulation<B> {
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let walls = config
            .walls
            .iter()
            .map(Wall::from_config)
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "simulation: {}x{} bounds, {} walls, cap {} bodies, {} solver pass(es)",
            config.width,
            config.height,
            walls.len(),
            config.max_balls,
            config.solver.iterations
        );

        Ok(Self {
            bodies: Vec::with_capacity(config.max_balls),
            walls,
            bounds: Bounds::new(config.width, config.height),
            step: config.step,
            iterations: config.solver.iterations,
            max_balls: config.max_balls,
            spawner: config.spawner.map(|s| Spawner::new(s, config.seed)),
            ticks: 0,
        })
    }

    /// Construct and append a body. Returns `Ok(false)` without spawning when
    /// the collection is at capacity.
    pub fn spawn(&mut self, params: &LaunchParams) -> Result<bool, SimError> {
        if self.bodies.len() >= self.max_balls {
            log::debug!("body cap {} reached, declining spawn", self.max_balls);
            return Ok(false);
        }
        let mut body = B::from_launch(params, self.bounds)?;
        body.set_step(self.step)?;
        self.bodies.push(body);
        Ok(true)
    }

    /// Advance one fixed timestep.
    pub fn tick(&mut self) {
        let params = match &mut self.spawner {
            Some(spawner) if self.bodies.len() < self.max_balls => spawner.poll(self.step),
            _ => None,
        };
        if let Some(params) = params {
            if let Err(err) = self.spawn(&params) {
                log::warn!("auto-spawn failed: {err}");
            }
        }

        for body in &mut self.bodies {
            body.integrate();
        }
        self.resolve();

        self.ticks += 1;
        debug_assert!(
            self.bodies
                .iter()
                .all(|b| b.position().is_finite() && b.velocity().is_finite()),
            "non-finite body state after tick {}",
            self.ticks
        );
    }

    /// Borders, then pairs in ascending index order, then walls, repeated for
    /// the configured number of relaxation passes.
    fn resolve(&mut self) {
        for _ in 0..self.iterations {
            for i in 0..self.bodies.len() {
                self.bodies[i].resolve_border(self.bounds);

                for j in (i + 1)..self.bodies.len() {
                    let (head, tail) = self.bodies.split_at_mut(j);
                    B::resolve_pair(&mut head[i], &mut tail[0]);
                }

                for wall in &self.walls {
                    self.bodies[i].resolve_wall(wall);
                }
            }
        }
    }

    /// Read-only presentation pass for an external renderer.
    pub fn present(&self, sink: &mut impl RenderSink) {
        for body in &self.bodies {
            sink.ball(body.position(), body.radius());
        }
        for wall in &self.walls {
            sink.wall(wall);
        }
    }

    pub fn bodies(&self) -> &[B] {
        &self.bodies
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::VerletBall;

    fn no_spawner_config() -> SimConfig {
        SimConfig {
            spawner: None,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_spawn_declines_at_capacity() {
        let mut config = no_spawner_config();
        config.max_balls = 2;
        let mut sim: Simulation<VerletBall> = Simulation::new(&config).unwrap();

        let params = LaunchParams {
            radius: 10.0,
            position: Vec2::new(100.0, 100.0),
            speed: 0.0,
            angle: 0.0,
        };
        assert_eq!(sim.spawn(&params), Ok(true));
        assert_eq!(sim.spawn(&params), Ok(true));
        assert_eq!(sim.spawn(&params), Ok(false));
        assert_eq!(sim.bodies().len(), 2);
    }

    #[test]
    fn test_auto_spawner_cadence() {
        // Dyadic step and delay so the cadence is exact: one spawn per 4 ticks
        let mut config = SimConfig::default();
        config.step = 1.0 / 128.0;
        config.spawner.as_mut().unwrap().delay = 1.0 / 32.0;
        let mut sim: Simulation<VerletBall> = Simulation::new(&config).unwrap();

        for _ in 0..16 {
            sim.tick();
        }
        assert_eq!(sim.bodies().len(), 4);
    }

    #[test]
    fn test_auto_spawner_respects_cap() {
        let mut config = SimConfig::default();
        config.max_balls = 5;
        let mut sim: Simulation<VerletBall> = Simulation::new(&config).unwrap();
        for _ in 0..100 {
            sim.tick();
        }
        assert_eq!(sim.bodies().len(), 5);
    }

    #[test]
    fn test_bodies_stay_inside_bounds() {
        let mut sim: Simulation<VerletBall> = Simulation::new(&no_spawner_config()).unwrap();
        for (x, angle) in [(200.0, 0.0), (500.0, 1.2), (800.0, -2.0)] {
            sim.spawn(&LaunchParams {
                radius: 12.0,
                position: Vec2::new(x, 200.0),
                speed: 6.0,
                angle,
            })
            .unwrap();
        }

        for _ in 0..600 {
            sim.tick();
        }

        let bounds = sim.bounds();
        for body in sim.bodies() {
            let p = body.position();
            let r = body.radius();
            assert!(p.is_finite());
            assert!(p.x >= r - 1e-2 && p.x <= bounds.width - r + 1e-2);
            assert!(p.y >= r - 1e-2 && p.y <= bounds.height - r + 1e-2);
        }
    }

    #[test]
    fn test_determinism_across_runs() {
        let config = SimConfig::default();
        let mut first: Simulation<VerletBall> = Simulation::new(&config).unwrap();
        let mut second: Simulation<VerletBall> = Simulation::new(&config).unwrap();

        for _ in 0..600 {
            first.tick();
            second.tick();
        }

        assert_eq!(first.bodies().len(), second.bodies().len());
        for (a, b) in first.bodies().iter().zip(second.bodies()) {
            assert_eq!(a.position(), b.position());
            assert_eq!(a.velocity(), b.velocity());
        }
    }

    #[test]
    fn test_present_visits_every_body_and_wall() {
        struct Counter {
            balls: usize,
            walls: usize,
        }
        impl RenderSink for Counter {
            fn ball(&mut self, _position: Vec2, _radius: f32) {
                self.balls += 1;
            }
            fn wall(&mut self, _wall: &Wall) {
                self.walls += 1;
            }
        }

        let mut sim: Simulation<VerletBall> = Simulation::new(&SimConfig::default()).unwrap();
        for _ in 0..30 {
            sim.tick();
        }

        let mut counter = Counter { balls: 0, walls: 0 };
        sim.present(&mut counter);
        assert_eq!(counter.balls, sim.bodies().len());
        assert_eq!(counter.walls, 2);
    }

    #[test]
    fn test_extra_solver_passes_still_separate() {
        let mut config = no_spawner_config();
        config.solver.iterations = 4;
        let mut sim: Simulation<VerletBall> = Simulation::new(&config).unwrap();

        // A column of balls dropped onto the floor stacks into resting contact
        for i in 0..6 {
            sim.spawn(&LaunchParams {
                radius: 15.0,
                position: Vec2::new(500.0, 900.0 - i as f32 * 40.0),
                speed: 0.0,
                angle: 0.0,
            })
            .unwrap();
        }
        for _ in 0..240 {
            sim.tick();
        }

        // A pile under gravity settles without residual deep overlap
        let bodies = sim.bodies();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let dist = (bodies[j].position() - bodies[i].position()).length();
                let min_dist = bodies[i].radius() + bodies[j].radius();
                assert!(dist > min_dist * 0.8, "deep overlap: {dist} vs {min_dist}");
            }
        }
    }
}
