use clap::Parser;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod routing;
mod server;
mod utils;

/// REST service exposing string, number, boolean and array utilities
#[derive(Debug, Parser)]
#[command(name = "utility-api", version, about)]
struct Cli {
    /// Configuration file path without extension (e.g. `config` for config.toml)
    #[arg(short, long, default_value = "config")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::Config::load_from(&cli.config)?;
    logger::init(&cfg)?;

    // Worker threads from config, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(&cfg));
    let active_connections = Arc::new(AtomicUsize::new(0));

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(&listener.local_addr()?, &cfg);

    // Connection tasks are spawned with spawn_local
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_server(
            listener,
            state,
            active_connections,
            Arc::clone(&signals.shutdown),
        ))
        .await;

    Ok(())
}
