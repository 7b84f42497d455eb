//! Domain models and request/response DTOs

pub mod auth;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use user::{User, UserResponse};
