use std::collections::HashSet;

use super::{NavStep, Walker, nearest_to_goal};
use crate::maze::{Maze, get_neighbors};

/// Greedy depth-first walker with memory.
///
/// Each step moves to the unvisited walkable neighbor closest to the goal (Manhattan distance,
/// first neighbor in [`crate::maze::Direction::ALL`] order on ties) and pushes the cell it left
/// onto the backtrack stack. When no unvisited neighbor remains it pops the stack and retreats.
/// This finds the goal whenever it is reachable, though not along a shortest path.
#[derive(Debug, Clone)]
pub struct GridNavigator {
    current: (u16, u16),
    goal: (u16, u16),
    visited: HashSet<(u16, u16)>,
    backtrack_stack: Vec<(u16, u16)>,
    stuck: bool,
}

impl GridNavigator {
    pub fn new(start: (u16, u16), goal: (u16, u16)) -> Self {
        GridNavigator {
            current: start,
            goal,
            visited: HashSet::from([start]),
            backtrack_stack: Vec::new(),
            stuck: false,
        }
    }

    pub fn reached_goal(&self) -> bool {
        self.current == self.goal
    }

    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    pub fn visited(&self) -> &HashSet<(u16, u16)> {
        &self.visited
    }

    /// Cells to retreat to, most recent last.
    pub fn backtrack_stack(&self) -> &[(u16, u16)] {
        &self.backtrack_stack
    }

    /// The walker's current route from the start: the backtrack stack followed by the current cell.
    pub fn trail(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.backtrack_stack
            .iter()
            .copied()
            .chain(std::iter::once(self.current))
    }
}

impl Walker for GridNavigator {
    fn step(&mut self, maze: &Maze) -> NavStep {
        if self.reached_goal() {
            return NavStep::Arrived;
        }
        if self.stuck {
            return NavStep::Stuck;
        }

        let candidates = get_neighbors(self.current, maze)
            .filter(|&c| maze.is_walkable(c) && !self.visited.contains(&c));

        match nearest_to_goal(candidates, self.goal) {
            Some(next) => {
                self.backtrack_stack.push(self.current);
                self.current = next;
                self.visited.insert(next);
                tracing::debug!("[navigator] Moving to new cell at {:?}", next);
                NavStep::Advanced { to: next }
            }
            None => match self.backtrack_stack.pop() {
                Some(previous) => {
                    self.current = previous;
                    tracing::debug!("[navigator] Backtracking to {:?}", previous);
                    NavStep::Backtracked { to: previous }
                }
                None => {
                    tracing::info!(
                        "[navigator] No path to {:?}, explored {} cells",
                        self.goal,
                        self.visited.len()
                    );
                    self.stuck = true;
                    NavStep::Stuck
                }
            },
        }
    }

    fn current(&self) -> (u16, u16) {
        self.current
    }
}
