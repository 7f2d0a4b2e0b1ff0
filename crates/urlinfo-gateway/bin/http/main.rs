mod cli;

use crate::cli::CLI;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use urlinfo_core::db::load_file;
use urlinfo_core::DbBackend;
use urlinfo_gateway::{App, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;

    urlinfo_telemetry::init(config.log_format.into())?;

    info!(
        datafile = %config.datafile.display(),
        listen_addr = %config.listen_addr,
        backend = %config.backend,
        "starting urlinfo gateway"
    );

    let db = DbBackend::from(config.backend).build();

    info!("loading malware urls");
    let loader = Arc::clone(&db);
    let datafile = config.datafile.clone();
    let loaded = tokio::task::spawn_blocking(move || load_file(loader.as_ref(), &datafile)).await??;
    info!(loaded, distinct = db.len(), "malware urls loaded");

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "serving lookups");

    axum::serve(listener, App::router(AppState::new(db))).await?;

    Ok(())
}
