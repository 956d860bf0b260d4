use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::api::dtos::{requests::CreateUsuarioRequest, responses::UsuarioResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_usuario(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUsuarioRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let usuario = state
        .usuario_service
        .create(payload.nombre, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UsuarioResponse::from(usuario))))
}

pub async fn get_usuario(
    State(state): State<Arc<AppState>>,
    Path(usuario_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = state.usuario_service.get_by_id(usuario_id).await?;

    Ok(Json(UsuarioResponse::from(usuario)))
}

pub async fn get_usuario_by_email(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = state
        .usuario_service
        .get_by_email(&email)
        .await?
        .ok_or(AppError::NotFound("Usuario no encontrado".into()))?;

    Ok(Json(UsuarioResponse::from(usuario)))
}
