use clap::Parser;
use std::sync::Arc;

use exchange::cli::ServerArgs;
use exchange::config::{AppState, Config};
use exchange::logger::Logger;
use exchange::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();
    let cfg = Config::load(&args)?;
    let logger = Arc::new(Logger::init(&cfg.logging));

    // One thread; connections interleave on the event loop
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let state = Arc::new(AppState::new(cfg, logger));
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, server::run(state))
}
