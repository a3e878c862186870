use std::sync::Arc;

use localview::browser;
use localview::config::{AppState, Config};
use localview::logger;
use localview::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure (port in use, insufficient permission) is fatal at startup
    let listener = server::create_listener(addr).map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    let url = cfg.root_url();
    let state = Arc::new(AppState::new(cfg));

    logger::log_server_start(&addr, &state.config);

    // The accept loop starts immediately; the browser task sleeps out its
    // delay on its own and does not hold the server up
    let _browser_task = browser::spawn_open_task(url);

    server::serve(listener, state).await;
    Ok(())
}
