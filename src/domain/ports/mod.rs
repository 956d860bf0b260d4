use crate::domain::models::{
    producto::{NewProducto, Producto},
    usuario::{NewUsuario, Usuario},
};
use crate::error::AppError;
use async_trait::async_trait;

/// Rows with `activo = FALSE` are soft-deleted: every read method here
/// filters them out, inserts never resurrect them.
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    async fn create(&self, nuevo: &NewUsuario) -> Result<Usuario, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Usuario>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError>;
}

#[async_trait]
pub trait ProductoRepository: Send + Sync {
    async fn create(&self, nuevo: &NewProducto) -> Result<Producto, AppError>;
    async fn list_by_usuario(&self, usuario_id: i64) -> Result<Vec<Producto>, AppError>;
}
