use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateUsuarioRequest {
    #[validate(length(min = 2, max = 100))]
    pub nombre: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct CreateProductoRequest {
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,
    #[validate(length(max = 500))]
    pub descripcion: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub precio: f64,
    /// Defaults to 0 when omitted.
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    pub usuario_id: i64,
}
