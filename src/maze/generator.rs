//! Maze generation using randomized depth-first backtracking.
//!
//! The generator carves a perfect maze: starting from cell (0, 0) it
//! repeatedly steps into a uniformly random unvisited neighbor, removing the
//! wall between the two cells, and backtracks one step through an explicit
//! predecessor stack whenever it dead-ends. The traversal visits every cell
//! exactly once, so the open walls form a spanning tree over the grid:
//! connected, acyclic, exactly `w * h - 1` walls removed.
//!
//! All randomness flows through an injected [`Rng`], so generation is fully
//! deterministic under a seeded source and cannot fail for any valid grid.

use rand::Rng;

use crate::maze::grid::{Direction, Grid};

/// Carves a perfect maze into a grid.
///
/// The path stack records, for each forward step taken, the cell stepped
/// *from*; popping it backtracks the cursor one step at a time. The stack is
/// reused across runs so regeneration does not reallocate.
#[derive(Debug, Default)]
pub struct MazeGenerator {
    path_stack: Vec<(usize, usize)>,
}

impl MazeGenerator {
    /// Creates a generator with an empty path stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the grid and carves a fresh maze into it.
    ///
    /// Neighbors are enumerated in the fixed order North, East, South, West and
    /// chosen uniformly among the eligible ones, so a given RNG sequence
    /// always reproduces the same maze.
    pub fn generate(&mut self, grid: &mut Grid, rng: &mut impl Rng) {
        grid.reset();
        self.path_stack.clear();

        let mut current = (0, 0);
        grid.mark_visited(0, 0);

        loop {
            let neighbours = unvisited_neighbours(grid, current);
            if !neighbours.is_empty() {
                let next = neighbours[rng.gen_range(0..neighbours.len())];
                grid.remove_wall(current, next);
                grid.mark_visited(next.0, next.1);
                self.path_stack.push(current);
                current = next;
            } else if let Some(previous) = self.path_stack.pop() {
                current = previous;
            } else {
                break;
            }
        }

        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            "maze generation complete"
        );
    }
}

/// In-bounds, not-yet-visited 4-neighbours of a cell, in enumeration order.
fn unvisited_neighbours(grid: &Grid, (x, y): (usize, usize)) -> Vec<(usize, usize)> {
    let mut neighbours = Vec::new();

    for direction in Direction::ALL {
        let (dx, dy) = direction.delta();
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if let Some(cell) = grid.get_cell(nx, ny) {
            if !cell.visited {
                neighbours.push((nx as usize, ny as usize));
            }
        }
    }

    neighbours
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn generated(width: usize, height: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        MazeGenerator::new().generate(&mut grid, &mut rng);
        grid
    }

    /// Flood-fills from (0, 0) over open walls and returns the number of
    /// cells reached.
    fn reachable_cells(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.width() * grid.height()];
        let mut queue = VecDeque::from([(0usize, 0usize)]);
        seen[0] = true;
        let mut count = 0;

        while let Some((x, y)) = queue.pop_front() {
            count += 1;
            let cell = grid.get_cell(x as isize, y as isize).unwrap();
            for direction in Direction::ALL {
                if cell.wall(direction) {
                    continue;
                }
                let (dx, dy) = direction.delta();
                let nx = (x as isize + dx) as usize;
                let ny = (y as isize + dy) as usize;
                let index = ny * grid.width() + nx;
                if !seen[index] {
                    seen[index] = true;
                    queue.push_back((nx, ny));
                }
            }
        }

        count
    }

    /// Renders the wall layout as an ASCII grid, one character per cell,
    /// wall slot, and post: open cells and removed walls are spaces,
    /// everything else `#`.
    fn render_walls(grid: &Grid) -> String {
        let mut rows = vec![vec![b'#'; grid.width() * 2 + 1]; grid.height() * 2 + 1];
        for cell in grid.cells() {
            rows[2 * cell.y + 1][2 * cell.x + 1] = b' ';
            if !cell.wall(Direction::North) {
                rows[2 * cell.y + 2][2 * cell.x + 1] = b' ';
            }
            if !cell.wall(Direction::East) {
                rows[2 * cell.y + 1][2 * cell.x + 2] = b' ';
            }
        }
        let lines: Vec<String> = rows
            .into_iter()
            .map(|row| String::from_utf8(row).unwrap())
            .collect();
        lines.join("\n")
    }

    fn assert_wall_symmetry(grid: &Grid) {
        for cell in grid.cells() {
            for direction in Direction::ALL {
                let (dx, dy) = direction.delta();
                let nx = cell.x as isize + dx;
                let ny = cell.y as isize + dy;
                match grid.get_cell(nx, ny) {
                    Some(neighbour) => assert_eq!(
                        cell.wall(direction),
                        neighbour.wall(direction.opposite()),
                        "asymmetric wall between ({}, {}) and ({nx}, {ny})",
                        cell.x,
                        cell.y,
                    ),
                    // The outer boundary is never opened.
                    None => assert!(cell.wall(direction)),
                }
            }
        }
    }

    /// Tests the spanning-tree property: exactly `w * h - 1` walls removed
    /// (two flags cleared per removal) and every cell reachable from the
    /// origin, which together also rule out cycles.
    #[test]
    fn generated_maze_is_a_spanning_tree() {
        for (width, height) in [(5, 5), (20, 20), (7, 3)] {
            let grid = generated(width, height, 42);
            assert_eq!(grid.open_wall_flags(), 2 * (width * height - 1));
            assert_eq!(reachable_cells(&grid), width * height);
        }
    }

    #[test]
    fn every_cell_is_visited() {
        let grid = generated(20, 20, 7);
        assert!(grid.cells().all(|cell| cell.visited));
    }

    #[test]
    fn walls_stay_symmetric() {
        for seed in 0..5 {
            let grid = generated(9, 6, seed);
            assert_wall_symmetry(&grid);
        }
    }

    /// Tests that a fixed seed reproduces an identical wall configuration.
    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let first = generated(5, 5, 1234);
        let second = generated(5, 5, 1234);

        for (a, b) in first.cells().zip(second.cells()) {
            assert_eq!(a.walls(), b.walls());
        }
    }

    /// Tests the exact layout carved for one pinned seed. Any change to the
    /// neighbor enumeration order, the per-step RNG consumption, or the carving
    /// loop itself shows up here as a wall diff instead of passing silently.
    /// Row 0 is the south edge; `#` is a wall or post, space is open.
    #[test]
    fn pinned_seed_carves_a_known_layout() {
        let grid = generated(5, 5, 1234);
        let expected = "\
###########
#   #     #
### ##### #
# #     # #
# ##### # #
# #   # # #
# # # # # #
# # #   # #
# # ##### #
#         #
###########";
        assert_eq!(render_walls(&grid), expected);
    }

    #[test]
    fn different_seeds_produce_different_mazes() {
        let first = generated(10, 10, 1);
        let second = generated(10, 10, 2);

        let differs = first
            .cells()
            .zip(second.cells())
            .any(|(a, b)| a.walls() != b.walls());
        assert!(differs);
    }

    #[test]
    fn trivial_grid_generates() {
        let grid = generated(1, 1, 0);
        assert_eq!(grid.open_wall_flags(), 0);
        assert!(grid.get_cell(0, 0).unwrap().visited);
    }

    /// Tests that regeneration reuses the grid cleanly: old walls are gone
    /// and the new layout is again a spanning tree.
    #[test]
    fn regeneration_is_idempotent() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut generator = MazeGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        generator.generate(&mut grid, &mut rng);
        generator.generate(&mut grid, &mut rng);

        assert_eq!(grid.open_wall_flags(), 2 * (8 * 8 - 1));
        assert_eq!(reachable_cells(&grid), 64);
        assert_wall_symmetry(&grid);
    }
}
