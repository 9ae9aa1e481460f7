pub mod config;
pub mod controller;
pub mod grid;
pub mod render;
pub mod rng;
pub mod step;

use std::time::Instant;

use config::Params;
use controller::Controller;
use grid::Grid;
use rng::Rng;

/// One headless run: the seeded starting grid plus every generation it
/// produced, in order.
pub struct SimRun {
    pub frames: Vec<Grid>,
    pub generations: u64,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Headless simulation entry used by the CLI and the server. Seeds and
/// randomizes a controller, then drives its tick loop the way a frame
/// clock would, capturing the grid after each generation.
pub fn simulate(seed: u64, params: &Params, generations: u64) -> (SimRun, Vec<Timing>) {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let mut rng = Rng::new(seed);
    let mut controller = Controller::new(params);

    let t = Instant::now();
    controller.randomize(&mut rng);
    timings.push(Timing {
        name: "randomize",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let t = Instant::now();
    let mut frames = vec![controller.grid.clone()];
    controller.toggle_running();
    while controller.generation < generations {
        if controller.tick() {
            frames.push(controller.grid.clone());
        }
    }
    timings.push(Timing {
        name: "step_loop",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    let run = SimRun {
        frames,
        generations: controller.generation,
    };
    (run, timings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_produces_one_frame_per_generation() {
        let params = Params {
            width: 20,
            height: 20,
            cadence: 3,
            ..Params::default()
        };
        let (run, _timings) = simulate(7, &params, 4);
        assert_eq!(run.generations, 4);
        // Initial frame plus one per generation.
        assert_eq!(run.frames.len(), 5);
        for frame in &run.frames {
            assert_eq!((frame.w, frame.h), (20, 20));
        }
    }

    #[test]
    fn simulate_is_deterministic_per_seed() {
        let params = Params::default();
        let (a, _) = simulate(123, &params, 3);
        let (b, _) = simulate(123, &params, 3);
        assert_eq!(a.frames, b.frames);
    }
}
