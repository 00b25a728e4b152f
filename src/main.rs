use clap::Parser;
use mazeagents::{Cli, MazeConfig, app::App};
use tracing::Level;

/// Log to a file: stdout belongs to the maze output.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazeagents.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => Level::DEBUG,
        _ => Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let config: MazeConfig = Cli::parse().into();
    tracing::info!("Starting with {:?}", config);
    let report = App::new(config).run(&mut std::io::stdout())?;
    tracing::info!("Walk finished: {:?}", report);
    Ok(())
}
