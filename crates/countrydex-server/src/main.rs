use clap::Parser;
use countrydex_core::QueryService;
use countrydex_server::{AppState, Cli, Command, ServerConfig, create_router, logging};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::resolve(&cli)?;
    logging::init(&config.log)?;

    let service = QueryService::global();

    match cli.command {
        None | Some(Command::Serve { .. }) => serve(&config, service).await?,
        Some(Command::Validate { code }) => {
            println!("{}", serde_json::to_string_pretty(&service.validate(&code))?);
        }
        Some(Command::List { continent }) => {
            let records = service.list(continent.as_deref());
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

async fn serve(config: &ServerConfig, service: &'static QueryService) -> anyhow::Result<()> {
    // Build the catalog before accepting traffic
    let countries = service.catalog_len();

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, countries, "country code service listening");

    axum::serve(listener, create_router(AppState::new(service)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("country code service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}
