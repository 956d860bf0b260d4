use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Store account row. `password` holds the argon2 hash, never the plaintext.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub fecha_registro: DateTime<Utc>,
    pub activo: bool,
}

/// Insert shape. The id, registration timestamp and activo flag are assigned
/// by the storage layer.
#[derive(Debug, Clone)]
pub struct NewUsuario {
    pub nombre: String,
    pub email: String,
    pub password: String,
}
