use super::{NavStep, Walker, nearest_to_goal};
use crate::maze::{Maze, get_neighbors};

/// Greedy walker that only remembers the cell it just left.
///
/// Forbidding the immediate step back stops two-cell oscillation, but nothing more: it walks
/// into dead ends it cannot leave and circles loops forever. Kept as a baseline for
/// [`super::GridNavigator`].
#[derive(Debug, Clone)]
pub struct MemorylessWalker {
    current: (u16, u16),
    previous: Option<(u16, u16)>,
    goal: (u16, u16),
}

impl MemorylessWalker {
    pub fn new(start: (u16, u16), goal: (u16, u16)) -> Self {
        MemorylessWalker {
            current: start,
            previous: None,
            goal,
        }
    }
}

impl Walker for MemorylessWalker {
    fn step(&mut self, maze: &Maze) -> NavStep {
        if self.current == self.goal {
            return NavStep::Arrived;
        }

        let candidates = get_neighbors(self.current, maze)
            .filter(|&c| maze.is_walkable(c) && Some(c) != self.previous);
        match nearest_to_goal(candidates, self.goal) {
            Some(next) => {
                self.previous = Some(self.current);
                self.current = next;
                NavStep::Advanced { to: next }
            }
            None => NavStep::Stuck,
        }
    }

    fn current(&self) -> (u16, u16) {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{GridNavigator, WalkOutcome};

    #[test]
    fn test_follows_corridor() {
        let maze = Maze::from_rows(&["#######", "#.....#", "#####.#", "#####.#", "#######"]);
        let report = MemorylessWalker::new((1, 1), (5, 3)).walk(&maze, 50);
        assert_eq!(report.outcome, WalkOutcome::Arrived);
        assert_eq!(report.steps, 6);
    }

    #[test]
    fn test_trapped_by_dead_end_that_navigator_escapes() {
        let maze = Maze::from_rows(&[
            "#######", "#.....#", "###.#.#", "#####.#", "#####.#", "#####.#", "#######",
        ]);
        let report = MemorylessWalker::new((1, 1), (5, 5)).walk(&maze, 50);
        assert_eq!(report.outcome, WalkOutcome::Stuck);
        assert_eq!(report.position, (3, 2));

        let report = GridNavigator::new((1, 1), (5, 5)).walk(&maze, 50);
        assert_eq!(report.outcome, WalkOutcome::Arrived);
    }

    #[test]
    fn test_circles_a_loop_around_a_walled_goal() {
        // The goal sits inside a closed ring, so the walker keeps circling it
        let maze = Maze::from_rows(&[
            "#######", "#.....#", "#.###.#", "#.#.#.#", "#.###.#", "#.....#", "#######",
        ]);
        let report = MemorylessWalker::new((1, 1), (3, 3)).walk(&maze, 200);
        assert_eq!(report.outcome, WalkOutcome::StepLimit);
        assert_eq!(report.steps, 200);
    }
}
