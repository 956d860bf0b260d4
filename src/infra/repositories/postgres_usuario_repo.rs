use crate::domain::{
    models::usuario::{NewUsuario, Usuario},
    ports::UsuarioRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresUsuarioRepo {
    pool: PgPool,
}

impl PostgresUsuarioRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioRepository for PostgresUsuarioRepo {
    async fn create(&self, nuevo: &NewUsuario) -> Result<Usuario, AppError> {
        sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (nombre, email, password, fecha_registro, activo) VALUES ($1, $2, $3, $4, TRUE) RETURNING id, nombre, email, password, fecha_registro, activo",
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
            "SELECT id, nombre, email, password, fecha_registro, activo FROM usuarios WHERE id = $1 AND activo = TRUE",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        sqlx::query_as::<_, Usuario>(
            "SELECT id, nombre, email, password, fecha_registro, activo FROM usuarios WHERE email = $1 AND activo = TRUE",
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
