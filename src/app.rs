use std::{collections::HashMap, io::Write};

use crate::{
    config::MazeConfig,
    generators::CarveStep,
    maze::Marker,
    session::MazeSession,
    solvers::{NavStep, WalkReport, Walker},
};

/// Drives a generation session and a walker on the configured schedule, then prints the result.
pub struct App {
    config: MazeConfig,
}

impl App {
    pub fn new(config: MazeConfig) -> Self {
        App {
            config: config.normalized(),
        }
    }

    fn pause(&self) {
        if !self.config.step_delay.is_zero() {
            std::thread::sleep(self.config.step_delay);
        }
    }

    /// Generates the maze, either one carve per tick or all at once.
    fn generate(&self) -> MazeSession {
        let mut session = MazeSession::new(&self.config);
        if !self.config.animate {
            session.generate();
            return session;
        }

        let mut ticks = 0usize;
        loop {
            match session.step() {
                CarveStep::Done => break,
                CarveStep::Carved { .. } => self.pause(),
                CarveStep::Skipped { agent } => {
                    tracing::debug!("[app] Agent {} had nothing to carve this round", agent);
                }
            }
            ticks += 1;
        }
        tracing::info!("[app] Animated generation finished after {} ticks", ticks);
        session
    }

    /// Runs one generate-and-walk cycle, writing the final maze and a summary to `out`.
    pub fn run(&self, out: &mut impl Write) -> std::io::Result<WalkReport> {
        let session = self.generate();
        let maze = session.maze();

        // Every cell is either visited once forward and once backward, or the walker is looping
        let max_steps = 2 * maze.floor_count();
        let mut walker = self.config.solver.walker(session.start(), session.goal());
        let mut markers = HashMap::from([(session.start(), Marker::Trail)]);

        let report = walker.walk_with(maze, max_steps, &mut |step, from| {
            match step {
                NavStep::Advanced { to } => {
                    markers.insert(to, Marker::Trail);
                }
                // A dead end is no longer part of the trail
                NavStep::Backtracked { .. } => {
                    markers.remove(&from);
                }
                NavStep::Arrived | NavStep::Stuck => return,
            }
            self.pause();
        });

        markers.insert(session.start(), Marker::Start);
        markers.insert(session.goal(), Marker::Goal);
        let mut frame = String::new();
        maze.render_with(&mut frame, &markers).map_err(std::io::Error::other)?;
        out.write_all(frame.as_bytes())?;
        writeln!(
            out,
            "{} on a {}x{} maze: {:?} after {} steps ({} backtracks, {} extra loops)",
            self.config.solver,
            maze.width(),
            maze.height(),
            report.outcome,
            report.steps,
            report.backtracks,
            session.loops_opened()
        )?;
        out.flush()?;
        Ok(report)
    }
}
