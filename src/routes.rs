//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, middleware::AppState};

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点
    let public_routes = Router::new()
        .route("/", get(handlers::api::root))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/api/features", get(handlers::features::get_features));

    // 认证路由（无需令牌）
    let mut auth_routes = Router::new().route("/auth/login", post(handlers::auth::login));

    // 注册端点由功能开关决定是否挂载；关闭时请求落到 404
    if state.config.features.registration {
        auth_routes = auth_routes.route("/auth/register", post(handlers::auth::register));
    }

    // 受保护的 /api 命名空间
    let protected_routes = Router::new()
        .route("/api", get(handlers::api::api_index))
        .route("/api/user", get(handlers::api::get_current_user))
        .route_layer(axum::middleware::from_fn_with_state(
            state.jwt_service.clone(),
            crate::auth::middleware::jwt_auth_middleware,
        ));

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
