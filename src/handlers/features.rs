//! 功能开关查询处理器

use crate::middleware::AppState;
use axum::{extract::State, Json};
use serde_json::json;
use std::sync::Arc;

/// 返回当前启用的功能，供前端决定是否展示注册入口
pub async fn get_features(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "features": {
            "authentication": {
                "register": state.config.features.registration,
            }
        }
    }))
}
