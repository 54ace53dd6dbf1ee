use std::process::ExitCode;
use std::sync::Arc;

use greeter::config::{AppState, Config, DEFAULT_CONFIG_PATH};
use greeter::error::ServerError;
use greeter::routing::RouteTable;
use greeter::{logger, server};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ServerError> {
    // Optional config file path (without extension) as the only argument
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;

    logger::init(&cfg.logging.level);

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers.filter(|&w| w > 0) {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(ServerError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), ServerError> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;

    let local_addr = listener.local_addr().unwrap_or(addr);

    logger::announce_listening(&local_addr);
    logger::log_server_start(&local_addr, &cfg);

    let state = Arc::new(AppState::new(cfg, RouteTable::greetings()?));
    server::run(listener, state, server::shutdown_signal()).await;

    Ok(())
}
