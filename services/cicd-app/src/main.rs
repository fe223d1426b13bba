use std::process::ExitCode;

use cicd_app::{bind, create_router, ServiceConfig, StartupError};

#[tokio::main]
async fn main() -> ExitCode {
    common::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("cicd-app: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServiceConfig::from_env()?;
    let listener = bind(&config).await?;
    tracing::info!(
        version = %config.version,
        environment = %config.environment,
        "cicd-app listening on {}",
        config.bind_addr()
    );

    axum::serve(listener, create_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("cicd-app stopped");
    Ok(())
}

/// Ctrl+C / SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
