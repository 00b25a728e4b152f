use std::time::Duration;

use clap::Parser;

use crate::{maze::Maze, solvers::Solver};

/// Options for generating and walking a maze.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    /// Grid width in cells. Normalized to an odd number of at least 5.
    pub width: u16,
    /// Grid height in cells. Normalized to an odd number of at least 5.
    pub height: u16,
    /// Number of carving agents. Clamped to at least 1.
    pub agent_count: usize,
    /// Inverse loop density in `[0, 1]`; 1.0 is a perfect maze.
    pub difficulty: f32,
    /// Carve one wall per tick instead of all at once.
    pub animate: bool,
    /// World-space size of one grid cell.
    pub cell_size: f32,
    /// Seed for reproducible mazes. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Pause between ticks when driving generation or a walk.
    pub step_delay: Duration,
    /// Walker used to solve the maze.
    pub solver: Solver,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            agent_count: 3,
            difficulty: 1.0,
            animate: true,
            cell_size: 1.0,
            seed: None,
            step_delay: Duration::from_millis(10),
            solver: Solver::Backtracking,
        }
    }
}

/// Multi-agent Kruskal maze generator and walker
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 21)]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 21)]
    pub height: u16,

    /// Number of carving agents
    #[arg(long = "agents", default_value_t = 3)]
    pub agent_count: usize,

    /// Inverse loop density; 1.0 is a perfect maze, 0.0 opens every loop
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub difficulty: f32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// World-space size of one grid cell
    #[arg(long, default_value_t = 1.0)]
    pub cell_size: f32,

    /// Pause between ticks in milliseconds
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Walker used to solve the maze
    #[arg(long, value_enum, default_value_t = Solver::Backtracking)]
    pub walker: Solver,

    /// Carve the whole maze at once instead of one wall per tick
    #[arg(long)]
    pub no_animate: bool,
}

impl From<Cli> for MazeConfig {
    fn from(cli: Cli) -> Self {
        MazeConfig {
            width: cli.width,
            height: cli.height,
            agent_count: cli.agent_count,
            difficulty: cli.difficulty,
            animate: !cli.no_animate,
            cell_size: cli.cell_size,
            seed: cli.seed,
            step_delay: Duration::from_millis(cli.delay_ms),
            solver: cli.walker,
        }
    }
}

impl MazeConfig {
    /// Returns a copy with every option brought into its valid range.
    /// Out-of-range values are adjusted, never rejected.
    pub fn normalized(&self) -> Self {
        let (width, height) = Maze::normalize_dimensions(self.width, self.height);
        let difficulty = if self.difficulty.is_nan() {
            1.0
        } else {
            self.difficulty.clamp(0.0, 1.0)
        };
        let cell_size = if self.cell_size.is_finite() && self.cell_size > 0.0 {
            self.cell_size
        } else {
            1.0
        };
        Self {
            width,
            height,
            agent_count: self.agent_count.max(1),
            difficulty,
            cell_size,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};

    #[test]
    fn test_normalized_clamps_everything() {
        let config = MazeConfig {
            width: 4,
            height: 10,
            agent_count: 0,
            difficulty: 1.7,
            cell_size: -3.0,
            ..MazeConfig::default()
        }
        .normalized();
        assert_eq!((config.width, config.height), (5, 11));
        assert_eq!(config.agent_count, 1);
        assert_eq!(config.difficulty, 1.0);
        assert_eq!(config.cell_size, 1.0);

        let config = MazeConfig {
            difficulty: f32::NAN,
            ..MazeConfig::default()
        }
        .normalized();
        assert_eq!(config.difficulty, 1.0);
        let config = MazeConfig {
            difficulty: -0.5,
            ..MazeConfig::default()
        }
        .normalized();
        assert_eq!(config.difficulty, 0.0);
    }

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let config = MazeConfig::from(Cli::try_parse_from(["mazeagents"]).unwrap());
        assert_eq!(config, MazeConfig::default());
    }

    #[test]
    fn test_cli_into_config() {
        let cli = Cli::try_parse_from([
            "mazeagents",
            "--width",
            "31",
            "--height",
            "15",
            "--agents",
            "5",
            "--difficulty",
            "0.3",
            "--seed",
            "99",
            "--cell-size",
            "2.5",
            "--delay-ms",
            "0",
            "--walker",
            "memoryless",
            "--no-animate",
        ])
        .unwrap();
        let config = MazeConfig::from(cli);
        assert_eq!((config.width, config.height), (31, 15));
        assert_eq!(config.agent_count, 5);
        assert_eq!(config.difficulty, 0.3);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.cell_size, 2.5);
        assert_eq!(config.step_delay, Duration::ZERO);
        assert_eq!(config.solver, Solver::Memoryless);
        assert!(!config.animate);
    }

    #[test]
    fn test_cli_negative_difficulty_is_normalized() {
        let cli = Cli::try_parse_from(["mazeagents", "--difficulty", "-0.5"]).unwrap();
        assert_eq!(MazeConfig::from(cli).normalized().difficulty, 0.0);
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        let kind = |args: &[&str]| Cli::try_parse_from(args.iter().copied()).unwrap_err().kind();
        assert_eq!(kind(&["mazeagents", "--bogus"]), ErrorKind::UnknownArgument);
        assert_eq!(
            kind(&["mazeagents", "--agents", "many"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            kind(&["mazeagents", "--width", "70000"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            kind(&["mazeagents", "--walker", "sideways"]),
            ErrorKind::InvalidValue
        );
        assert!(Cli::try_parse_from(["mazeagents", "--width"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
