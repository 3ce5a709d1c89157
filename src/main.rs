use anyhow::Context;
use category_api::{create_routes, db, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Configuración inválida")?;

    let pool = db::init_db(&config.database_url, &config.pool)
        .await
        .context("Error al conectar a la base de datos")?;
    db::ensure_schema(&pool, &config.database_url)
        .await
        .context("Error creando la tabla category")?;
    tracing::info!("Conexión a {} exitosa", db::backend_name(&config.database_url));

    let app = create_routes(AppState::new(pool.clone(), config.api_key.as_str()));

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Fallo al enlazar {}:{}", config.host, config.port))?;
    tracing::info!("Servidor corriendo en http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("El servidor terminó con error")?;

    pool.close().await;
    tracing::info!("Servidor detenido");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("No se pudo escuchar Ctrl-C: {:?}", e);
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
                tracing::error!("No se pudo escuchar SIGTERM: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Señal de apagado recibida");
}
