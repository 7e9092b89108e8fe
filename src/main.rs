use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use herald::commands;
use herald::config::Config;
use herald::http::Http;
use herald::server::{self, AppState};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Discord interactions endpoint", long_about = None)]
struct Opts {
    /// Image attached by the /files and /combined commands
    #[arg(long, global = true, env = "HERALD_IMAGE_URL", default_value = commands::DEFAULT_IMAGE_URL)]
    image_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the interactions endpoint (default)
    Serve,
    /// Overwrite the application's global slash commands with the bundled ones
    Register,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may be set another way.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let opts = Opts::parse();
    let config = Config::from_env().context("loading configuration")?;

    match opts.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, &opts.image_url).await,
        Command::Register => register(config).await,
    }
}

async fn serve(config: Config, image_url: &str) -> anyhow::Result<()> {
    let http = Arc::new(Http::new(&config.api_base, config.token.clone())?);
    let dispatcher = commands::dispatcher(http, image_url).build();
    let supervisor = dispatcher.supervisor().clone();

    let state = AppState::new(config.application_id, config.verifier()?, dispatcher);
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    server::serve(listener, state, shutdown_signal()).await?;

    info!("Waiting up to {:?} for deferred responses", config.shutdown_grace);
    supervisor.shutdown(config.shutdown_grace).await;
    Ok(())
}

async fn register(config: Config) -> anyhow::Result<()> {
    anyhow::ensure!(config.token.is_some(), "DISCORD_TOKEN is required to register commands");

    let http = Http::new(&config.api_base, config.token.clone())?;
    let definitions = commands::definitions();

    info!("Started refreshing application (/) commands.");
    let registered = http
        .create_global_commands(config.application_id, &definitions)
        .await
        .context("registering commands")?;
    info!(count = registered.len(), "Successfully reloaded application (/) commands.");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(why) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {why}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(why) => {
                warn!("Failed to install SIGTERM handler: {why}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
