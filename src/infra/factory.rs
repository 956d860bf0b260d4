use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::{producto_service::ProductoService, usuario_service::UsuarioService};
use crate::infra::repositories::{
    postgres_producto_repo::PostgresProductoRepo, postgres_usuario_repo::PostgresUsuarioRepo,
    sqlite_producto_repo::SqliteProductoRepo, sqlite_usuario_repo::SqliteUsuarioRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        ensure_postgres_schema(&pool).await;

        let usuario_repo = Arc::new(PostgresUsuarioRepo::new(pool.clone()));
        let producto_repo = Arc::new(PostgresProductoRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            usuario_service: Arc::new(UsuarioService::new(usuario_repo.clone())),
            producto_service: Arc::new(ProductoService::new(producto_repo, usuario_repo)),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        ensure_sqlite_schema(&pool).await;

        let usuario_repo = Arc::new(SqliteUsuarioRepo::new(pool.clone()));
        let producto_repo = Arc::new(SqliteProductoRepo::new(pool.clone()));

        AppState {
            config: config.clone(),
            usuario_service: Arc::new(UsuarioService::new(usuario_repo.clone())),
            producto_service: Arc::new(ProductoService::new(producto_repo, usuario_repo)),
        }
    }
}

/// Create-if-absent table setup, executed on every boot. There is no
/// migration diffing: the schema either exists or gets created as-is.
pub async fn ensure_sqlite_schema(pool: &SqlitePool) {
    let statements = [
        "CREATE TABLE IF NOT EXISTS usuarios (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            fecha_registro TEXT NOT NULL,
            activo BOOLEAN NOT NULL DEFAULT TRUE
        )",
        "CREATE TABLE IF NOT EXISTS productos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            descripcion TEXT,
            precio REAL NOT NULL,
            stock INTEGER NOT NULL DEFAULT 0,
            usuario_id INTEGER NOT NULL REFERENCES usuarios(id) ON DELETE CASCADE,
            fecha_creacion TEXT NOT NULL,
            activo BOOLEAN NOT NULL DEFAULT TRUE
        )",
        "CREATE INDEX IF NOT EXISTS idx_productos_usuario_id ON productos(usuario_id)",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to create SQLite schema");
    }
}

pub async fn ensure_postgres_schema(pool: &PgPool) {
    let statements = [
        "CREATE TABLE IF NOT EXISTS usuarios (
            id BIGSERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            fecha_registro TIMESTAMPTZ NOT NULL,
            activo BOOLEAN NOT NULL DEFAULT TRUE
        )",
        "CREATE TABLE IF NOT EXISTS productos (
            id BIGSERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            descripcion TEXT,
            precio DOUBLE PRECISION NOT NULL,
            stock INT NOT NULL DEFAULT 0,
            usuario_id BIGINT NOT NULL REFERENCES usuarios(id) ON DELETE CASCADE,
            fecha_creacion TIMESTAMPTZ NOT NULL,
            activo BOOLEAN NOT NULL DEFAULT TRUE
        )",
        "CREATE INDEX IF NOT EXISTS idx_productos_usuario_id ON productos(usuario_id)",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to create Postgres schema");
    }
}
