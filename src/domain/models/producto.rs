use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub usuario_id: i64,
    pub fecha_creacion: DateTime<Utc>,
    pub activo: bool,
}

#[derive(Debug, Clone)]
pub struct NewProducto {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub usuario_id: i64,
}
