use std::collections::VecDeque;

use crate::maze::{Maze, get_neighbors};

/// Breadth-first flood over walkable cells from `start`, calling `on_visit` for each cell
/// reached. Stops early once `on_visit` returns `true`.
fn flood(maze: &Maze, start: (u16, u16), mut on_visit: impl FnMut((u16, u16)) -> bool) -> bool {
    if !maze.is_walkable(start) {
        return false;
    }

    let width = maze.width() as usize;
    let mut visited = vec![false; width * maze.height() as usize];
    let index = |(x, y): (u16, u16)| y as usize * width + x as usize;

    let mut queue = VecDeque::from([start]);
    visited[index(start)] = true;

    while let Some(current) = queue.pop_front() {
        if on_visit(current) {
            return true;
        }
        for neighbor in get_neighbors(current, maze) {
            if maze.is_walkable(neighbor) && !visited[index(neighbor)] {
                visited[index(neighbor)] = true;
                queue.push_back(neighbor);
            }
        }
    }
    false
}

/// Checks whether `goal` is reachable from `start` through 4-directionally adjacent floor cells.
pub fn has_path(maze: &Maze, start: (u16, u16), goal: (u16, u16)) -> bool {
    maze.is_walkable(goal) && flood(maze, start, |cell| cell == goal)
}

/// Counts the floor cells reachable from `start`, including `start` itself.
pub fn reachable_count(maze: &Maze, start: (u16, u16)) -> usize {
    let mut count = 0;
    flood(maze, start, |_| {
        count += 1;
        false
    });
    count
}
