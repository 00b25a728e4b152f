pub mod cell;
pub mod grid;

use std::collections::HashMap;
use std::fmt::{self, Write};

use glam::Vec3;

pub use cell::{GridCell, Marker};
use grid::Grid;

/// The four movement directions, in the fixed order neighbors are enumerated.
///
/// Grid `y` maps to world `z` (see [`Maze::cell_to_world`]), so `Up` is `+y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Enumeration order for neighbor lookups. Greedy tie-breaking depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Steps one cell from `coord` in this direction.
    ///
    /// NOTE: Underflow wraps to `u16::MAX` and overflow saturates to `u16::MAX`; both are
    /// filtered out by any bounds check since the largest valid index is `u16::MAX - 1`.
    pub fn step(self, coord: (u16, u16)) -> (u16, u16) {
        let (x, y) = coord;
        match self {
            Direction::Up => (x, y.saturating_add(1)),
            Direction::Down => (x, y.wrapping_sub(1)),
            Direction::Right => (x.saturating_add(1), y),
            Direction::Left => (x.wrapping_sub(1), y),
        }
    }
}

/// A rectangular maze over a grid of floor and wall cells.
///
/// Maze rooms ("lattice cells") sit at odd grid coordinates `(1 + 2cx, 1 + 2cy)`; the grid cells
/// between two adjacent rooms are wall slots that can be carved open.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid,
    cells_x: u16,
    cells_y: u16,
    cell_size: f32,
}

impl Maze {
    pub const MIN_DIMENSION: u16 = 5;

    /// Raises each dimension to at least [`Maze::MIN_DIMENSION`] and makes it odd.
    pub fn normalize_dimensions(width: u16, height: u16) -> (u16, u16) {
        let normalize = |n: u16| {
            let n = n.max(Self::MIN_DIMENSION);
            if n % 2 == 0 {
                // u16::MAX is odd, so an even value always has room for +1
                n + 1
            } else {
                n
            }
        };
        (normalize(width), normalize(height))
    }

    /// Creates a new maze of (normalized) `width` x `height` grid cells.
    /// Every lattice cell starts as floor, every other cell as wall.
    pub fn new(width: u16, height: u16, cell_size: f32) -> Self {
        let (width, height) = Self::normalize_dimensions(width, height);
        let mut maze = Maze {
            grid: Grid::new(width, height, GridCell::Wall),
            cells_x: (width - 1) / 2,
            cells_y: (height - 1) / 2,
            cell_size,
        };
        (0..maze.cells_y).for_each(|cy| {
            (0..maze.cells_x).for_each(|cx| {
                let coord = maze.lattice_to_grid(cx, cy);
                maze.grid.set(coord, GridCell::Floor);
            });
        });
        maze
    }

    /// Builds a maze from ASCII rows, `#` being wall and anything else floor.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u16;
        let mut grid = Grid::new(width, height, GridCell::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c != '#' {
                    grid.set((x as u16, y as u16), GridCell::Floor);
                }
            }
        }
        Maze {
            grid,
            cells_x: width.saturating_sub(1) / 2,
            cells_y: height.saturating_sub(1) / 2,
            cell_size: 1.0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the width of the maze in grid cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the maze in grid cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Number of lattice cells along x.
    pub fn cells_x(&self) -> u16 {
        self.cells_x
    }

    /// Number of lattice cells along y.
    pub fn cells_y(&self) -> u16 {
        self.cells_y
    }

    pub fn cell_count(&self) -> usize {
        self.cells_x as usize * self.cells_y as usize
    }

    /// The fixed start cell, top-left lattice cell.
    pub fn start(&self) -> (u16, u16) {
        (1, 1)
    }

    /// The fixed goal cell, bottom-right lattice cell.
    pub fn goal(&self) -> (u16, u16) {
        (self.width() - 2, self.height() - 2)
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Bounds-checked floor lookup. Out-of-range cells are not walkable.
    pub fn is_walkable(&self, coord: (u16, u16)) -> bool {
        self.is_in_bounds(coord) && self.grid[coord].is_floor()
    }

    /// Opens `coord` to floor, returning `true` if it was a wall.
    pub fn carve(&mut self, coord: (u16, u16)) -> bool {
        self.grid.set(coord, GridCell::Floor)
    }

    pub fn floor_count(&self) -> usize {
        self.grid.count(GridCell::Floor)
    }

    /// Grid coordinate of the lattice cell `(cx, cy)`.
    pub fn lattice_to_grid(&self, cx: u16, cy: u16) -> (u16, u16) {
        (1 + cx * 2, 1 + cy * 2)
    }

    /// Lattice index `cy * cells_x + cx` of the lattice cell `(cx, cy)`.
    pub fn lattice_index(&self, cx: u16, cy: u16) -> usize {
        cy as usize * self.cells_x as usize + cx as usize
    }

    /// Grid coordinate of the lattice cell with the given lattice index.
    pub fn lattice_index_to_grid(&self, index: usize) -> (u16, u16) {
        let cx = (index % self.cells_x as usize) as u16;
        let cy = (index / self.cells_x as usize) as u16;
        self.lattice_to_grid(cx, cy)
    }

    /// Lattice index of a grid coordinate, or `None` if the coordinate is not a lattice cell.
    pub fn grid_to_lattice(&self, coord: (u16, u16)) -> Option<usize> {
        let (x, y) = coord;
        if x % 2 == 0 || y % 2 == 0 {
            return None;
        }
        let (cx, cy) = ((x - 1) / 2, (y - 1) / 2);
        (cx < self.cells_x && cy < self.cells_y).then(|| self.lattice_index(cx, cy))
    }

    /// Maps a grid cell to its world position. Grid `y` maps to world `z`; world `y` is 0.
    pub fn cell_to_world(&self, coord: (u16, u16)) -> Vec3 {
        Vec3::new(
            coord.0 as f32 * self.cell_size,
            0.0,
            coord.1 as f32 * self.cell_size,
        )
    }

    /// Maps a world position back to the nearest grid cell, `None` if outside the grid.
    pub fn world_to_cell(&self, position: Vec3) -> Option<(u16, u16)> {
        let x = (position.x / self.cell_size).round();
        let y = (position.z / self.cell_size).round();
        if !(x >= 0.0 && y >= 0.0 && x < self.width() as f32 && y < self.height() as f32) {
            return None;
        }
        Some((x as u16, y as u16))
    }

    /// Renders the maze as text into `out`, drawing `markers` over the cells they cover.
    pub fn render_with(
        &self,
        out: &mut impl Write,
        markers: &HashMap<(u16, u16), Marker>,
    ) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                match markers.get(&(x, y)) {
                    Some(marker) => write!(out, "{}", marker)?,
                    None => write!(out, "{}", self.grid[(x, y)])?,
                }
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers = HashMap::from([(self.start(), Marker::Start), (self.goal(), Marker::Goal)]);
        self.render_with(f, &markers)
    }
}

/// Get the in-bounds neighbors of a grid cell in [`Direction::ALL`] order.
pub fn get_neighbors(coord: (u16, u16), maze: &Maze) -> impl Iterator<Item = (u16, u16)> + '_ {
    Direction::ALL
        .into_iter()
        .map(move |d| d.step(coord))
        .filter(move |&c| maze.is_in_bounds(c))
}
