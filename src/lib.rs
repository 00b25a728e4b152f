pub mod app;
pub mod config;
pub mod generators;
pub mod maze;
pub mod session;
pub mod solvers;

pub use config::{Cli, MazeConfig};
pub use maze::{GridCell, Maze};
pub use session::{GenerationStatus, MazeSession};
