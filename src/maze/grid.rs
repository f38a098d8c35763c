//! Maze grid and wall model.
//!
//! The grid is a flat, arena-indexed array of [`Cell`]s (index `y * width + x`),
//! fixed in size for its lifetime. Each cell carries four wall flags indexed
//! by [`Direction`]. A wall between two adjacent cells is stored on both
//! sides; the flags are private and the only mutation path is
//! [`Grid::remove_wall`], which clears both sides in one call, so the two
//! views can never desynchronize.

use crate::config::ConfigError;

/// The four cardinal sides of a cell.
///
/// North is the +z side of the cell in world space (the grid's y axis maps
/// to world z), East the +x side. The discriminant doubles as the index into
/// a cell's wall flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// +z side.
    North = 0,
    /// +x side.
    East = 1,
    /// -z side.
    South = 2,
    /// -x side.
    West = 3,
}

impl Direction {
    /// All directions in the fixed enumeration order used by generation.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The side facing back toward this one from the neighboring cell.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Grid-coordinate offset of the neighbor on this side.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// A single cell of the maze grid.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Column index within the grid.
    pub x: usize,
    /// Row index within the grid.
    pub y: usize,
    /// Set once by the generator's traversal; meaningless after generation
    /// completes.
    pub visited: bool,
    walls: [bool; 4],
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            visited: false,
            walls: [true; 4],
        }
    }

    /// Whether the wall on the given side is present.
    pub fn wall(&self, direction: Direction) -> bool {
        self.walls[direction as usize]
    }

    /// All four wall flags, indexed by [`Direction`].
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }
}

/// A fixed-size grid of maze cells.
///
/// Writable only through [`Grid::reset`] and [`Grid::remove_wall`]; the
/// collision and NPC systems take shared references.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every wall present and every cell unvisited.
    ///
    /// Dimensions of zero are a construction-time error, not a runtime one.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Looks up a cell by signed coordinates.
    ///
    /// Out-of-bounds coordinates return `None` rather than panicking; the
    /// collision classifier relies on this to fail closed.
    pub fn get_cell(&self, x: isize, y: isize) -> Option<&Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(&self.cells[self.index(x as usize, y as usize)])
    }

    pub(crate) fn mark_visited(&mut self, x: usize, y: usize) {
        let index = self.index(x, y);
        self.cells[index].visited = true;
    }

    /// Reinitializes every cell to all-walls-present, unvisited.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
            cell.walls = [true; 4];
        }
    }

    /// Removes the wall between two 4-adjacent cells, clearing the flag on
    /// both sides in one step.
    ///
    /// Calling this with non-adjacent cells is a contract violation: it
    /// asserts in debug builds and is a no-op in release builds. It never
    /// touches any other wall.
    pub fn remove_wall(&mut self, a: (usize, usize), b: (usize, usize)) {
        let dx = b.0 as isize - a.0 as isize;
        let dy = b.1 as isize - a.1 as isize;

        let direction = match (dx, dy) {
            (0, 1) => Direction::North,
            (1, 0) => Direction::East,
            (0, -1) => Direction::South,
            (-1, 0) => Direction::West,
            _ => {
                debug_assert!(false, "remove_wall called with non-adjacent cells {a:?}, {b:?}");
                return;
            }
        };

        let index_a = self.index(a.0, a.1);
        let index_b = self.index(b.0, b.1);
        self.cells[index_a].walls[direction as usize] = false;
        self.cells[index_b].walls[direction.opposite() as usize] = false;
    }

    /// Total number of open wall flags across all cells.
    ///
    /// Each removed wall clears one flag on each side, so a perfect maze over
    /// `w * h` cells reports exactly `2 * (w * h - 1)`.
    pub fn open_wall_flags(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.walls.iter().filter(|present| !**present).count())
            .sum()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
