use crate::domain::{
    models::usuario::{NewUsuario, Usuario},
    ports::UsuarioRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteUsuarioRepo {
    pool: SqlitePool,
}

impl SqliteUsuarioRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioRepository for SqliteUsuarioRepo {
    async fn create(&self, nuevo: &NewUsuario) -> Result<Usuario, AppError> {
        sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (nombre, email, password, fecha_registro, activo) VALUES (?, ?, ?, ?, TRUE) RETURNING id, nombre, email, password, fecha_registro, activo",
        )
            .bind(&nuevo.nombre)
            .bind(&nuevo.email)
            .bind(&nuevo.password)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Usuario>, AppError> {
        sqlx::query_as::<_, Usuario>(
            "SELECT id, nombre, email, password, fecha_registro, activo FROM usuarios WHERE id = ? AND activo = TRUE",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        sqlx::query_as::<_, Usuario>(
            "SELECT id, nombre, email, password, fecha_registro, activo FROM usuarios WHERE email = ? AND activo = TRUE",
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
