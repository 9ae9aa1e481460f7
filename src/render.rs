use rayon::prelude::*;

use crate::grid::Grid;

const ALIVE: [u8; 4] = [255, 255, 255, 255];
const DEAD: [u8; 4] = [0, 0, 0, 255];
const GRID_LINE: [u8; 4] = [150, 150, 150, 255];

/// Render one frame to RGBA at `cell_size` pixels per cell, with 1px grid
/// lines on cell boundaries.
pub fn render_frame(grid: &Grid, cell_size: usize) -> Vec<u8> {
    assert!(cell_size > 0, "cell size must be positive");
    let pw = grid.w * cell_size;
    let ph = grid.h * cell_size;
    let mut rgba = vec![0u8; pw * ph * 4];

    rgba.par_chunks_mut(pw * 4)
        .enumerate()
        .for_each(|(py, row)| {
            let y = py / cell_size;
            let on_h_line = py % cell_size == 0;
            for px in 0..pw {
                let color = if on_h_line || px % cell_size == 0 {
                    GRID_LINE
                } else if grid.get(px / cell_size, y) {
                    ALIVE
                } else {
                    DEAD
                };
                row[px * 4..px * 4 + 4].copy_from_slice(&color);
            }
        });

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_expected_size() {
        let g = Grid::new(5, 3);
        let rgba = render_frame(&g, 10);
        assert_eq!(rgba.len(), 50 * 30 * 4);
    }

    #[test]
    fn alive_cell_renders_white_inside_its_square() {
        let mut g = Grid::new(4, 4);
        g.set(1, 2, true);
        let rgba = render_frame(&g, 10);
        let pw = 40;
        // Interior pixel of cell (1,2), off the grid lines.
        let (px, py) = (15, 25);
        let i = (py * pw + px) * 4;
        assert_eq!(&rgba[i..i + 4], &ALIVE);
        // A dead cell's interior stays dark.
        let (px, py) = (25, 25);
        let i = (py * pw + px) * 4;
        assert_eq!(&rgba[i..i + 4], &DEAD);
    }

    #[test]
    fn cell_boundaries_carry_grid_lines() {
        let g = Grid::new(3, 3);
        let rgba = render_frame(&g, 10);
        let pw = 30;
        let i = (7 * pw + 10) * 4; // px on a vertical boundary
        assert_eq!(&rgba[i..i + 4], &GRID_LINE);
    }
}
