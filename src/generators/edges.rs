use crate::maze::Maze;

/// Wall slot between two adjacent lattice cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Grid coordinate of the first cell.
    pub cell1: (u16, u16),
    /// Grid coordinate of the second cell, right of or below `cell1`.
    pub cell2: (u16, u16),
    /// Grid coordinate of the wall strictly between the two cells.
    pub wall: (u16, u16),
    /// Lattice indices of `cell1` and `cell2`, for union-find lookups.
    pub indices: (usize, usize),
}

/// Collects every candidate edge of the maze's lattice: for each cell, the edge to its right
/// neighbor and the edge to its lower neighbor, when those exist.
///
/// Yields `cells_x * (cells_y - 1) + cells_y * (cells_x - 1)` edges without duplicates.
pub fn build_edges(maze: &Maze) -> Vec<Edge> {
    let (width, height) = (maze.cells_x(), maze.cells_y());
    let edge = |(x1, y1): (u16, u16), (x2, y2): (u16, u16)| {
        let cell1 = maze.lattice_to_grid(x1, y1);
        let cell2 = maze.lattice_to_grid(x2, y2);
        Edge {
            cell1,
            cell2,
            wall: ((cell1.0 + cell2.0) / 2, (cell1.1 + cell2.1) / 2),
            indices: (maze.lattice_index(x1, y1), maze.lattice_index(x2, y2)),
        }
    };

    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            [
                (x + 1 < width).then(|| edge((x, y), (x + 1, y))),
                (y + 1 < height).then(|| edge((x, y), (x, y + 1))),
            ]
        })
        .flatten()
        .collect()
}
