use rayon::prelude::*;

use crate::grid::{Grid, neighbors8_wrap};

/// Conway's rule: survival on 2 or 3 neighbors, birth on exactly 3.
#[inline]
fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

#[inline]
fn alive_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    neighbors8_wrap(x, y, grid.w, grid.h)
        .filter(|&(nx, ny)| grid.get(nx, ny))
        .count() as u8
}

/// One generation. Reads only the old grid and writes a fresh buffer, so
/// no cell's new value can leak into another cell's neighbor count.
pub fn step(grid: &Grid) -> Grid {
    let mut out = Grid::new(grid.w, grid.h);
    for y in 0..grid.h {
        for x in 0..grid.w {
            let alive = grid.get(x, y);
            out.set(x, y, next_state(alive, alive_neighbors(grid, x, y)));
        }
    }
    out
}

/// Row-parallel variant. No cell's new value depends on any other cell's
/// new value, so rows split cleanly. Results match `step` exactly.
pub fn step_par(grid: &Grid) -> Grid {
    let mut out = Grid::new(grid.w, grid.h);
    let w = grid.w;
    out.cells
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..w {
                let alive = grid.get(x, y);
                row[x] = next_state(alive, alive_neighbors(grid, x, y));
            }
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(w: usize, h: usize, alive: &[(usize, usize)]) -> Grid {
        let mut g = Grid::new(w, h);
        for &(x, y) in alive {
            g.set(x, y, true);
        }
        g
    }

    #[test]
    fn block_is_a_still_life() {
        let g = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        assert_eq!(step(&g), g);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let g = grid_with(7, 7, &[(2, 3), (3, 3), (4, 3)]);
        let once = step(&g);
        assert_ne!(once, g);
        assert_eq!(step(&once), g);
    }

    #[test]
    fn corner_cell_counts_once_for_each_wrapped_neighbor() {
        let g = grid_with(5, 4, &[(0, 0)]);
        for (x, y) in [
            (4, 3), (4, 0), (4, 1),
            (0, 3),         (0, 1),
            (1, 3), (1, 0), (1, 1),
        ] {
            assert_eq!(alive_neighbors(&g, x, y), 1, "({x},{y})");
        }
        // The corner itself sees no one.
        assert_eq!(alive_neighbors(&g, 0, 0), 0);
    }

    #[test]
    fn vertical_blinker_wraps_across_the_seam() {
        // Column of three straddling the top/bottom edge behaves like any
        // other blinker on the torus.
        let g = grid_with(5, 5, &[(2, 4), (2, 0), (2, 1)]);
        assert_eq!(step(&step(&g)), g);
    }

    #[test]
    fn empty_grid_stays_empty() {
        let g = Grid::new(10, 10);
        assert_eq!(step(&g).population(), 0);
    }

    #[test]
    fn underpopulation_and_overpopulation_kill() {
        // Lone cell dies.
        let lone = grid_with(6, 6, &[(3, 3)]);
        assert!(!step(&lone).get(3, 3));
        // Cell with 4 neighbors dies.
        let crowded = grid_with(6, 6, &[(3, 3), (2, 2), (4, 2), (2, 4), (4, 4)]);
        assert!(!step(&crowded).get(3, 3));
    }

    #[test]
    fn step_is_pure() {
        let g = grid_with(8, 8, &[(1, 1), (2, 1), (3, 1), (5, 5), (5, 6)]);
        let snapshot = g.clone();
        assert_eq!(step(&g), step(&snapshot));
        // Input untouched.
        assert_eq!(g, snapshot);
    }

    #[test]
    fn parallel_matches_serial() {
        let mut g = Grid::new(31, 17);
        let mut rng = crate::rng::Rng::new(2024);
        g.randomize(&mut rng, 200);
        for _ in 0..5 {
            let next = step(&g);
            assert_eq!(step_par(&g), next);
            g = next;
        }
    }
}
