use futures::future::BoxFuture;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::{AnyConnection, AnyPool};

use crate::{config::PoolConfig, error::AppError};

// Alias para el pool: Postgres en producción, SQLite en tests
pub type DbPool = AnyPool;

const POSTGRES_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS category (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL
)
"#;

const SQLITE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS category (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL
)
"#;

pub async fn init_db(db_url: &str, limits: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(limits.max_connections)
        .min_connections(limits.min_connections)
        .max_lifetime(limits.max_lifetime)
        .idle_timeout(limits.idle_timeout)
        .acquire_timeout(limits.acquire_timeout)
        .connect(db_url)
        .await
}

// Pool de una sola conexión sobre SQLite en memoria.
// Cada conexión en memoria es una base distinta, así que no se recicla nunca.
pub async fn init_memory_db() -> Result<DbPool, sqlx::Error> {
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .max_lifetime(None)
        .idle_timeout(None)
        .connect("sqlite::memory:")
        .await?;

    ensure_schema(&pool, "sqlite::memory:").await?;
    Ok(pool)
}

// Crea la tabla si no existe (el DDL cambia según el motor)
pub async fn ensure_schema(pool: &DbPool, db_url: &str) -> Result<(), sqlx::Error> {
    let ddl = if db_url.starts_with("sqlite:") {
        SQLITE_SCHEMA
    } else {
        POSTGRES_SCHEMA
    };

    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

pub fn backend_name(db_url: &str) -> &'static str {
    if db_url.starts_with("sqlite:") {
        "SQLite"
    } else {
        "Postgres"
    }
}

// Ejecuta `work` dentro de una transacción: commit si devuelve Ok, rollback si devuelve Err.
// Si el future entra en pánico o se cancela, sqlx hace rollback al soltar la transacción.
pub async fn with_transaction<T, F>(pool: &DbPool, work: F) -> Result<T, AppError>
where
    F: for<'c> FnOnce(&'c mut AnyConnection) -> BoxFuture<'c, Result<T, AppError>>,
{
    let mut tx = pool.begin().await?;

    match work(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Error haciendo rollback: {:?}", rollback_err);
            }
            Err(err)
        }
    }
}
