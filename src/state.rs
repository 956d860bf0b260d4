use crate::config::Config;
use crate::domain::services::{producto_service::ProductoService, usuario_service::UsuarioService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub usuario_service: Arc<UsuarioService>,
    pub producto_service: Arc<ProductoService>,
}
