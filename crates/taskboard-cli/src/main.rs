mod cli;
mod context;
mod handlers;
mod output;

use clap::Parser;
use cli::Cli;
use context::CliContext;
use taskboard_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries JSON responses
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let mut ctx = CliContext::load(cli.data_dir.as_deref(), cli.config.as_deref())?;

    match cli.command {
        None => {
            tracing::info!("Opening board in {}", ctx.data_dir.display());
            let settings = ctx.config.terminal_scroll;
            let mut app = App::new(ctx.service, settings);
            app.run().await?;
        }
        Some(command) => handlers::task::handle(&mut ctx, command)?,
    }

    Ok(())
}
