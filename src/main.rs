//! Ballpit entry point
//!
//! Headless demo: builds the classic two-ramp scene, runs it at the fixed
//! timestep, and logs progress once per simulated second. Pass a JSON config
//! path as the first argument to run a custom scene.

use ballpit::SimConfig;
use ballpit::sim::{Body, Simulation, VerletBall};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => {
                log::info!("loaded config from {path}");
                config
            }
            Err(err) => {
                log::error!("failed to load config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };

    let mut sim: Simulation<VerletBall> = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            log::error!("invalid config: {err}");
            std::process::exit(1);
        }
    };

    let seconds = 30;
    let ticks_per_second = (1.0 / config.step).round().max(1.0) as u32;
    log::info!("running {seconds}s at {ticks_per_second} Hz");

    for second in 1..=seconds {
        for _ in 0..ticks_per_second {
            sim.tick();
        }

        let bodies = sim.bodies();
        let mean_speed = if bodies.is_empty() {
            0.0
        } else {
            bodies.iter().map(|b| b.speed()).sum::<f32>() / bodies.len() as f32
        };
        log::info!(
            "t={second:>3}s bodies={} mean speed={mean_speed:.1} px/s",
            bodies.len()
        );
    }

    log::info!(
        "done: {} ticks, {} bodies",
        sim.tick_count(),
        sim.bodies().len()
    );
}

fn load_config(path: &str) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    let config: SimConfig = serde_json::from_str(&json)?;
    Ok(config)
}
