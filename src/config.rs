/// All tunable parameters, consumed by the CLI and server front-ends.
#[derive(Clone, Debug)]
pub struct Params {
    // Grid
    pub width: usize,
    pub height: usize,

    // Playback
    pub cadence: u32,

    // Display adapter scale (pixels per cell)
    pub cell_size: usize,
}

/// Generations are triggered every `cadence` ticks, clamped to this range.
pub const CADENCE_MIN: u32 = 1;
pub const CADENCE_MAX: u32 = 500;

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            cadence: 5,
            cell_size: 10,
        }
    }
}
