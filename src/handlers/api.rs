//! 根路由与受保护的 /api 处理器

use crate::auth::middleware::AuthContext;
use axum::Json;
use serde_json::json;

/// 公开首页
pub async fn root() -> &'static str {
    "Welcome to Open Registry API"
}

/// 受保护命名空间首页
pub async fn api_index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to protected API route",
    }))
}

/// 获取当前用户信息（来自令牌声明，不回查数据库）
pub async fn get_current_user(auth_context: AuthContext) -> Json<serde_json::Value> {
    Json(json!({
        "username": auth_context.username,
        "admin": auth_context.admin,
    }))
}
