use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::api::dtos::{requests::CreateProductoRequest, responses::ProductoResponse};
use crate::domain::models::producto::NewProducto;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_producto(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProductoRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let nuevo = NewProducto {
        nombre: payload.nombre,
        descripcion: payload.descripcion,
        precio: payload.precio,
        stock: payload.stock.unwrap_or(0),
        usuario_id: payload.usuario_id,
    };
    let producto = state.producto_service.create(nuevo).await?;

    Ok((StatusCode::CREATED, Json(ProductoResponse::from(producto))))
}

pub async fn list_productos_por_usuario(
    State(state): State<Arc<AppState>>,
    Path(usuario_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let productos = state.producto_service.get_by_usuario(usuario_id).await?;

    let body: Vec<ProductoResponse> = productos.into_iter().map(ProductoResponse::from).collect();
    Ok(Json(body))
}
