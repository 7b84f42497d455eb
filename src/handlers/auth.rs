//! 认证相关的 HTTP 处理器

use crate::{
    error::AppError,
    middleware::{AppState, ValidatedJson},
    models::auth::{LoginRequest, RegisterRequest},
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}

/// 注册（仅在功能开关打开时挂载）
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.auth_service.register(req).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
