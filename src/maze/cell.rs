use std::fmt;

/// Represents a cell in the grid, which can be either walkable floor or a blocking wall.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Floor,
    #[default]
    Wall,
}

impl GridCell {
    pub fn is_floor(self) -> bool {
        self == GridCell::Floor
    }
}

/// Markers drawn on top of the grid when printing a maze together with a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The starting cell of the maze.
    Start,
    /// The goal cell of the maze.
    Goal,
    /// A cell on the walker's current trail.
    Trail,
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            GridCell::Floor => ' ',
            GridCell::Wall => '#',
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Marker::Start => 'S',
            Marker::Goal => 'G',
            Marker::Trail => '*',
        };
        write!(f, "{}", symbol)
    }
}
