use rand::{Rng, seq::SliceRandom};

use crate::maze::{Maze, get_neighbors};

/// Difficulties at or above this are treated as a perfect maze and skip injection entirely.
const PERFECT_MAZE_THRESHOLD: f32 = 0.999;

/// Interior wall cells with at least two floor neighbors, in row-major order.
/// Opening any of them joins two or more existing passages.
pub fn loop_candidates(maze: &Maze) -> Vec<(u16, u16)> {
    let grid = maze.grid();
    grid.iter()
        .filter(|&((x, y), cell)| !cell.is_floor() && !grid.is_boundary(x, y))
        .map(|(coord, _)| coord)
        .filter(|&coord| {
            get_neighbors(coord, maze)
                .filter(|&n| maze.is_walkable(n))
                .count()
                >= 2
        })
        .collect()
}

/// Reopens a share of the loop candidates to add alternate routes.
///
/// `difficulty` is clamped to `[0, 1]`: 1.0 opens nothing, 0.0 opens every candidate, and values
/// in between open `round(candidates * (1 - difficulty))` of them, chosen at random.
/// Returns the number of cells opened.
pub fn inject_loops<R: Rng + ?Sized>(maze: &mut Maze, difficulty: f32, rng: &mut R) -> usize {
    let difficulty = difficulty.clamp(0.0, 1.0);
    if difficulty >= PERFECT_MAZE_THRESHOLD {
        return 0;
    }

    let mut candidates = loop_candidates(maze);
    if candidates.is_empty() {
        return 0;
    }
    candidates.shuffle(rng);

    let to_carve = ((candidates.len() as f32 * (1.0 - difficulty)).round() as usize)
        .min(candidates.len());
    candidates[..to_carve].iter().for_each(|&coord| {
        maze.carve(coord);
    });

    tracing::info!(
        "[difficulty] Opened {} of {} loop candidates at difficulty {:.2}",
        to_carve,
        candidates.len(),
        difficulty
    );
    to_carve
}
