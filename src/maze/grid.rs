use super::cell::GridCell;

/// Row-major storage of grid cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Box<[GridCell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: GridCell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Sets the cell at `coord`, returning whether its state changed.
    pub fn set(&mut self, coord: (u16, u16), cell: GridCell) -> bool {
        let idx = self.ravel_index(coord.0, coord.1);
        let old = self.data[idx];
        self.data[idx] = cell;
        old != cell
    }

    /// Iterates over all cells in row-major order together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((u16, u16), GridCell)> + '_ {
        let width = self.width;
        self.data.iter().enumerate().map(move |(i, &cell)| {
            (((i % width as usize) as u16, (i / width as usize) as u16), cell)
        })
    }

    pub fn count(&self, cell: GridCell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = GridCell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
