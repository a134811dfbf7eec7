use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vehicle_catalog::config::{DatabaseConfig, EnvironmentConfig, StoreBackend};
use vehicle_catalog::create_app;
use vehicle_catalog::database::{DocumentStore, MemoryStore, PostgresStore};
use vehicle_catalog::routes::{CARS_ROUTE, MOTORCYCLES_ROUTE};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Vehicle Catalog API");
    info!("=====================");

    let config = EnvironmentConfig::default();
    info!("⚙️ Entorno: {} | store: {}", config.environment, config.store);

    let store = match build_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!("❌ Error inicializando el store: {}", e);
            return Err(e);
        }
    };

    let app = create_app(store, &config);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    for route in [CARS_ROUTE, MOTORCYCLES_ROUTE] {
        info!("   POST   {} - Crear", route);
        info!("   GET    {} - Listar", route);
        info!("   GET    {}/:id - Obtener", route);
        info!("   PUT    {}/:id - Actualizar", route);
        info!("   DELETE {}/:id - Eliminar", route);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

async fn build_store(config: &EnvironmentConfig) -> Result<Arc<dyn DocumentStore>> {
    match config.store {
        StoreBackend::Memory => {
            if config.is_production() {
                warn!("⚠️ Store en memoria en producción: los datos se pierden al reiniciar");
            }
            info!("🧠 Usando store en memoria");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres => {
            let database = DatabaseConfig::from_env()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set when STORE=postgres"))?;
            let store = PostgresStore::connect(&database).await?;
            Ok(Arc::new(store))
        }
    }
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
