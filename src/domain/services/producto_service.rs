use std::sync::Arc;

use tracing::info;

use crate::domain::models::producto::{NewProducto, Producto};
use crate::domain::ports::{ProductoRepository, UsuarioRepository};
use crate::error::AppError;

pub struct ProductoService {
    repo: Arc<dyn ProductoRepository>,
    usuario_repo: Arc<dyn UsuarioRepository>,
}

impl ProductoService {
    pub fn new(repo: Arc<dyn ProductoRepository>, usuario_repo: Arc<dyn UsuarioRepository>) -> Self {
        Self { repo, usuario_repo }
    }

    /// The owner must resolve to an active usuario before anything is
    /// inserted.
    pub async fn create(&self, nuevo: NewProducto) -> Result<Producto, AppError> {
        if self.usuario_repo.find_by_id(nuevo.usuario_id).await?.is_none() {
            return Err(AppError::NotFound("Usuario no encontrado".into()));
        }

        let creado = self.repo.create(&nuevo).await?;

        info!("Producto created: {} (usuario {})", creado.id, creado.usuario_id);
        Ok(creado)
    }

    /// An empty result set is reported as NotFound, not as an empty list.
    pub async fn get_by_usuario(&self, usuario_id: i64) -> Result<Vec<Producto>, AppError> {
        let productos = self.repo.list_by_usuario(usuario_id).await?;
        if productos.is_empty() {
            return Err(AppError::NotFound(format!(
                "No se encontraron productos para el usuario {}",
                usuario_id
            )));
        }
        Ok(productos)
    }
}
