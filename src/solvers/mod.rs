pub mod bfs;
pub mod memoryless;
pub mod navigator;

use clap::ValueEnum;

use crate::maze::Maze;
pub use bfs::has_path;
pub use memoryless::MemorylessWalker;
pub use navigator::GridNavigator;

/// Outcome of a single walker step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    /// The walker is standing on the goal. Terminal.
    Arrived,
    /// The walker moved forward onto a cell it had not visited.
    Advanced { to: (u16, u16) },
    /// The walker retreated along its trail out of a dead end.
    Backtracked { to: (u16, u16) },
    /// The walker has nowhere left to go. Terminal.
    Stuck,
}

/// How a whole walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    Arrived,
    Stuck,
    /// The step budget ran out before the walk terminated.
    StepLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    pub outcome: WalkOutcome,
    /// Number of moves made, forward and backward.
    pub steps: usize,
    /// Number of moves that retreated along the trail.
    pub backtracks: usize,
    /// Cell the walker ended on.
    pub position: (u16, u16),
}

/// An autonomous agent that walks a finished maze toward a goal, one cell per step.
pub trait Walker {
    /// Attempts one move.
    fn step(&mut self, maze: &Maze) -> NavStep;

    fn current(&self) -> (u16, u16);

    /// Steps until the walk terminates or `max_steps` moves have been made, handing each step
    /// and the cell it was taken from to `on_step`. The budget is checked before every move.
    fn walk_with(
        &mut self,
        maze: &Maze,
        max_steps: usize,
        on_step: &mut dyn FnMut(NavStep, (u16, u16)),
    ) -> WalkReport {
        let mut steps = 0;
        let mut backtracks = 0;
        let outcome = loop {
            if steps >= max_steps {
                break WalkOutcome::StepLimit;
            }
            let from = self.current();
            let step = self.step(maze);
            on_step(step, from);
            match step {
                NavStep::Arrived => break WalkOutcome::Arrived,
                NavStep::Stuck => break WalkOutcome::Stuck,
                NavStep::Advanced { .. } => {}
                NavStep::Backtracked { .. } => backtracks += 1,
            }
            steps += 1;
        };
        WalkReport {
            outcome,
            steps,
            backtracks,
            position: self.current(),
        }
    }

    fn walk(&mut self, maze: &Maze, max_steps: usize) -> WalkReport {
        self.walk_with(maze, max_steps, &mut |_, _| {})
    }
}

/// Available walkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Solver {
    /// Greedy depth-first search with a visited set and a backtrack stack.
    #[default]
    Backtracking,
    /// Greedy stepping that only remembers the previous cell.
    Memoryless,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Backtracking => write!(f, "Greedy Backtracking DFS"),
            Solver::Memoryless => write!(f, "Memoryless Greedy"),
        }
    }
}

impl Solver {
    /// Creates a walker of this kind standing on `start`.
    pub fn walker(self, start: (u16, u16), goal: (u16, u16)) -> Box<dyn Walker> {
        match self {
            Solver::Backtracking => Box::new(GridNavigator::new(start, goal)),
            Solver::Memoryless => Box::new(MemorylessWalker::new(start, goal)),
        }
    }
}

pub fn manhattan_distance(a: (u16, u16), b: (u16, u16)) -> usize {
    a.0.abs_diff(b.0) as usize + a.1.abs_diff(b.1) as usize
}

/// Picks the candidate closest to `goal`. Ties go to the earliest candidate.
fn nearest_to_goal(
    candidates: impl Iterator<Item = (u16, u16)>,
    goal: (u16, u16),
) -> Option<(u16, u16)> {
    let mut best: Option<((u16, u16), usize)> = None;
    for candidate in candidates {
        let distance = manhattan_distance(candidate, goal);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(cell, _)| cell)
}
