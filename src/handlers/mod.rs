//! HTTP 处理器

pub mod api;
pub mod auth;
pub mod features;
pub mod health;
