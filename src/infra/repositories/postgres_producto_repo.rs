use crate::domain::{
    models::producto::{NewProducto, Producto},
    ports::ProductoRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresProductoRepo {
    pool: PgPool,
}

impl PostgresProductoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductoRepository for PostgresProductoRepo {
    async fn create(&self, nuevo: &NewProducto) -> Result<Producto, AppError> {
        sqlx::query_as::<_, Producto>(
            "INSERT INTO productos (nombre, descripcion, precio, stock, usuario_id, fecha_creacion, activo) VALUES ($1, $2, $3, $4, $5, $6, TRUE) RETURNING id, nombre, descripcion, precio, stock, usuario_id, fecha_creacion, activo",
        )
            .bind(&nuevo.nombre)
            .bind(&nuevo.descripcion)
            .bind(nuevo.precio)
            .bind(nuevo.stock)
            .bind(nuevo.usuario_id)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_usuario(&self, usuario_id: i64) -> Result<Vec<Producto>, AppError> {
        sqlx::query_as::<_, Producto>(
            "SELECT id, nombre, descripcion, precio, stock, usuario_id, fecha_creacion, activo FROM productos WHERE usuario_id = $1 AND activo = TRUE ORDER BY id ASC",
        )
            .bind(usuario_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
