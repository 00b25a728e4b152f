use glam::Vec3;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::MazeConfig,
    generators::{CarveStep, KruskalCarver, get_rng, inject_loops},
    maze::Maze,
    solvers::bfs::has_path,
};

/// Where a [`MazeSession`] is in its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    /// Walls are still being carved.
    Carving,
    /// Carving and loop injection are done; the maze is ready to walk.
    Complete,
}

enum Stage {
    Carving(KruskalCarver),
    Complete,
}

/// One maze generation: owns the grid and all in-progress generation state.
///
/// Consumers such as walkers borrow the maze through [`MazeSession::maze`]; nothing is global.
pub struct MazeSession {
    config: MazeConfig,
    maze: Maze,
    stage: Stage,
    rng: StdRng,
    loops_opened: usize,
}

impl MazeSession {
    /// Starts a fresh generation from `config`, normalizing it first.
    pub fn new(config: &MazeConfig) -> Self {
        let config = config.normalized();
        let mut rng = get_rng(config.seed);
        let maze = Maze::new(config.width, config.height, config.cell_size);
        let carver = KruskalCarver::new(&maze, config.agent_count, StdRng::from_rng(&mut rng));
        tracing::info!(
            "[session] New {}x{} maze with {} agents at difficulty {:.2}",
            maze.width(),
            maze.height(),
            config.agent_count,
            config.difficulty
        );
        MazeSession {
            config,
            maze,
            stage: Stage::Carving(carver),
            rng,
            loops_opened: 0,
        }
    }

    /// Throws away everything generated so far and starts over with `config`.
    pub fn regenerate(&mut self, config: &MazeConfig) {
        *self = MazeSession::new(config);
    }

    /// The normalized configuration this session runs with.
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn status(&self) -> GenerationStatus {
        match self.stage {
            Stage::Carving(_) => GenerationStatus::Carving,
            Stage::Complete => GenerationStatus::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == GenerationStatus::Complete
    }

    pub fn start(&self) -> (u16, u16) {
        self.maze.start()
    }

    pub fn goal(&self) -> (u16, u16) {
        self.maze.goal()
    }

    pub fn is_goal(&self, cell: (u16, u16)) -> bool {
        cell == self.goal()
    }

    pub fn is_walkable(&self, cell: (u16, u16)) -> bool {
        self.maze.is_walkable(cell)
    }

    pub fn cell_to_world(&self, cell: (u16, u16)) -> Vec3 {
        self.maze.cell_to_world(cell)
    }

    pub fn world_to_cell(&self, position: Vec3) -> Option<(u16, u16)> {
        self.maze.world_to_cell(position)
    }

    /// Number of extra cells opened by loop injection.
    pub fn loops_opened(&self) -> usize {
        self.loops_opened
    }

    /// Runs the whole generation at once.
    pub fn generate(&mut self) -> GenerationStatus {
        if let Stage::Carving(carver) = &mut self.stage {
            carver.run(&mut self.maze);
            self.finish();
        }
        self.status()
    }

    /// Performs one unit of carving work. Returns [`CarveStep::Done`] once the maze is complete.
    pub fn step(&mut self) -> CarveStep {
        let step = match &mut self.stage {
            Stage::Carving(carver) => carver.step(&mut self.maze),
            Stage::Complete => return CarveStep::Done,
        };
        if step.is_done() {
            self.finish();
        }
        step
    }

    fn finish(&mut self) {
        self.loops_opened = inject_loops(&mut self.maze, self.config.difficulty, &mut self.rng);
        self.stage = Stage::Complete;

        if !has_path(&self.maze, self.maze.start(), self.maze.goal()) {
            tracing::error!(
                "[session] Generated maze has no path from {:?} to {:?}",
                self.maze.start(),
                self.maze.goal()
            );
            panic!("generated maze is unsolvable; carving or loop injection is broken");
        }
        tracing::info!(
            "[session] Maze complete with {} floor cells ({} from extra loops)",
            self.maze.floor_count(),
            self.loops_opened
        );
    }
}
