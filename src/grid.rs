use crate::rng::Rng;

/// Row-major flat cell matrix. No per-row allocation, bool friendly.
/// Topology is toroidal: both axes wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub cells: Vec<bool>,
    pub w: usize,
    pub h: usize,
}

impl Grid {
    /// All-dead grid. Zero dimensions are a contract violation.
    pub fn new(w: usize, h: usize) -> Self {
        assert!(w > 0 && h > 0, "grid dimensions must be positive");
        Self {
            cells: vec![false; w * h],
            w,
            h,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.idx(x, y);
        self.cells[i] = alive;
    }

    /// New grid of the given dimensions with the top-left overlap copied.
    /// Cells outside the overlap start dead. The caller replaces its old
    /// grid with the result.
    pub fn resized(&self, new_w: usize, new_h: usize) -> Self {
        let mut out = Self::new(new_w, new_h);
        for y in 0..self.h.min(new_h) {
            for x in 0..self.w.min(new_w) {
                out.set(x, y, self.get(x, y));
            }
        }
        out
    }

    /// Set `count` uniformly sampled cells alive, with replacement.
    /// Compounds onto whatever is already alive: duplicates and hits on
    /// already-live cells mean the population grows by at most `count`.
    pub fn randomize(&mut self, rng: &mut Rng, count: usize) {
        for _ in 0..count {
            let x = rng.range_usize(self.w);
            let y = rng.range_usize(self.h);
            self.set(x, y, true);
        }
    }

    /// Kill every cell in place.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Wrap a coordinate pair onto the torus. Exact for any offset, not just
/// wrap distance 1.
#[inline]
pub fn wrap_xy(x: i32, y: i32, w: usize, h: usize) -> (usize, usize) {
    let wx = ((x % w as i32) + w as i32) as usize % w;
    let wy = ((y % h as i32) + h as i32) as usize % h;
    (wx, wy)
}

/// 8-connected neighbors with wraparound on both axes.
pub fn neighbors8_wrap(x: usize, y: usize, w: usize, h: usize) -> impl Iterator<Item = (usize, usize)> {
    let offsets: [(i32, i32); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0),           (1, 0),
        (-1, 1),  (0, 1),  (1, 1),
    ];
    offsets
        .into_iter()
        .map(move |(dx, dy)| wrap_xy(x as i32 + dx, y as i32 + dy, w, h))
}
