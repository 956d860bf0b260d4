use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{producto::Producto, usuario::Usuario};

/// Public projection of a Usuario row. The password hash never leaves the
/// service boundary.
#[derive(Serialize)]
pub struct UsuarioResponse {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub fecha_registro: DateTime<Utc>,
    pub activo: bool,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nombre: usuario.nombre,
            email: usuario.email,
            fecha_registro: usuario.fecha_registro,
            activo: usuario.activo,
        }
    }
}

#[derive(Serialize)]
pub struct ProductoResponse {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub usuario_id: i64,
    pub fecha_creacion: DateTime<Utc>,
    pub activo: bool,
}

impl From<Producto> for ProductoResponse {
    fn from(producto: Producto) -> Self {
        Self {
            id: producto.id,
            nombre: producto.nombre,
            descripcion: producto.descripcion,
            precio: producto.precio,
            stock: producto.stock,
            usuario_id: producto.usuario_id,
            fecha_creacion: producto.fecha_creacion,
            activo: producto.activo,
        }
    }
}
