use std::time::Instant;

use mazeagents::{MazeConfig, MazeSession};

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    let config = MazeConfig {
        width: 1001,
        height: 1001,
        agent_count: 8,
        difficulty: 0.5,
        animate: false,
        seed: Some(0),
        ..MazeConfig::default()
    };

    let started = Instant::now();
    let mut session = MazeSession::new(&config);
    for _ in 0..num_iters {
        session.regenerate(&config);
        session.generate();
    }
    let elapsed = started.elapsed();
    println!(
        "Generated {} mazes of {}x{} in {:?} ({:?} per maze)",
        num_iters,
        config.width,
        config.height,
        elapsed,
        elapsed / num_iters.max(1) as u32
    );
}
