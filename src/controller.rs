use crate::config::{CADENCE_MAX, CADENCE_MIN, Params};
use crate::grid::Grid;
use crate::rng::Rng;
use crate::step::step;

/// Playback state around a grid: owns the current generation, the running
/// flag, and the tick cadence. The display adapter drives `tick` from its
/// frame clock and edits cells between ticks; everything stays on one
/// thread of control.
#[derive(Debug)]
pub struct Controller {
    pub grid: Grid,
    pub running: bool,
    cadence: u32,
    ticks: u64,
    pub generation: u64,
}

impl Controller {
    pub fn new(params: &Params) -> Self {
        Self {
            grid: Grid::new(params.width, params.height),
            running: false,
            cadence: params.cadence.clamp(CADENCE_MIN, CADENCE_MAX),
            ticks: 0,
            generation: 0,
        }
    }

    /// One external tick. Advances a generation when running and the tick
    /// counter lands on the cadence. Returns whether a generation ran.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.running && self.ticks % self.cadence as u64 == 0 {
            self.grid = step(&self.grid);
            self.generation += 1;
            return true;
        }
        false
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Stop action: pause and wipe the grid.
    pub fn stop(&mut self) {
        self.running = false;
        self.grid.clear();
    }

    pub fn cadence(&self) -> u32 {
        self.cadence
    }

    pub fn set_cadence(&mut self, cadence: u32) {
        self.cadence = cadence.clamp(CADENCE_MIN, CADENCE_MAX);
    }

    /// Direct cell edit. The adapter clamps pointer coordinates to the
    /// grid before calling in.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.grid.set(x, y, alive);
    }

    /// Randomize request: the target count is itself drawn uniformly in
    /// `[0, w*h)`, then sampled onto the grid with replacement.
    pub fn randomize(&mut self, rng: &mut Rng) {
        let count = rng.range_usize(self.grid.w * self.grid.h);
        self.grid.randomize(rng, count);
    }

    /// Resize request: swaps in a new grid with the overlap preserved.
    pub fn resize(&mut self, new_w: usize, new_h: usize) {
        self.grid = self.grid.resized(new_w, new_h);
    }
}
