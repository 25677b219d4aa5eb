use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::Config::load()?;

    // Single optional CLI argument: the listen port
    if let Some(arg) = std::env::args().nth(1) {
        cfg.server.port = arg
            .parse()
            .map_err(|e| format!("Invalid port '{arg}': {e}"))?;
    }

    logger::init(&cfg)?;

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
    let state = Arc::new(config::AppState::new(cfg));

    logger::log_server_start(&addr, &state.config);

    // LocalSet for spawn_local support in connection tasks
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let signals = Arc::new(server::signal::SignalHandler::new());
            server::signal::start_signal_handler(Arc::clone(&signals));

            let shutdown = Arc::clone(&signals.shutdown);
            server::server_loop::run(listener, state, shutdown).await
        })
        .await?;

    logger::log_shutdown_complete();
    Ok(())
}
