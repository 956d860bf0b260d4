use tienda_backend::{
    api::router::create_router,
    config::Config,
    domain::services::{producto_service::ProductoService, usuario_service::UsuarioService},
    infra::factory::ensure_sqlite_schema,
    infra::repositories::{
        sqlite_producto_repo::SqliteProductoRepo, sqlite_usuario_repo::SqliteUsuarioRepo,
    },
    state::AppState,
};

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        ensure_sqlite_schema(&pool).await;

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            api_v1_prefix: "/api/v1".to_string(),
        };

        let usuario_repo = Arc::new(SqliteUsuarioRepo::new(pool.clone()));
        let producto_repo = Arc::new(SqliteProductoRepo::new(pool.clone()));

        let state = Arc::new(AppState {
            config,
            usuario_service: Arc::new(UsuarioService::new(usuario_repo.clone())),
            producto_service: Arc::new(ProductoService::new(producto_repo, usuario_repo)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
