// Main entry point - Dependency injection and CLI dispatch
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::application::indicator_service::IndicatorService;
use crate::infrastructure::config::load_client_config;
use crate::infrastructure::http_gateway::HttpIndicatorGateway;
use crate::presentation::board::IndicatorBoard;
use crate::presentation::session::run_session;
use crate::presentation::terminal::{TerminalListView, TerminalNotifier};

#[derive(Parser, Debug)]
#[command(
    name = "tracking-progress-updates",
    about = "Form client for the Tracking Progress updates API"
)]
struct Cli {
    /// Override the endpoint base URL from the config file
    #[arg(long, env = "TRACKING_PROGRESS_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current indicator list and exit
    List,
    /// Report an indicator as updated
    Add { name: String },
    /// Retract a previously reported indicator
    Remove { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration; the CLI flag wins over the file
    let config = load_client_config()?;
    let base_url = cli.base_url.unwrap_or(config.endpoint.base_url);

    // Create gateway (infrastructure layer)
    let gateway = Arc::new(HttpIndicatorGateway::new(&base_url));

    // Create service (application layer) and board (presentation layer)
    let service = IndicatorService::new(gateway);
    let mut board = IndicatorBoard::new(service, TerminalListView::new(), TerminalNotifier::new());

    match cli.command {
        None => run_session(board).await,
        Some(Command::List) => {
            board.refresh().await?;
            board.view().draw(&mut std::io::stdout())?;
            Ok(())
        }
        Some(Command::Add { name }) => {
            board.submit_add(&name).await?;
            board.view().draw(&mut std::io::stdout())?;
            Ok(())
        }
        Some(Command::Remove { name }) => {
            board.submit_remove(&name).await?;
            board.view().draw(&mut std::io::stdout())?;
            Ok(())
        }
    }
}
