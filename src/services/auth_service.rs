//! 认证服务：登录、注册、管理员账号引导

use crate::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    error::AppError,
    models::{auth::*, user::*},
    repository::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

/// 引导管理员账号的保留用户名和初始凭证
const ADMIN_USERNAME: &str = "admin";
const ADMIN_DEFAULT_PASSWORD: &str = "admin123";
const ADMIN_EMAIL: &str = "admin@example.com";

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            db,
            jwt_service,
            hasher: PasswordHasher::new(),
        }
    }

    /// 用户登录
    ///
    /// 用户不存在与密码错误返回同一个 InvalidCredentials，
    /// 对外不可区分，避免用户名枚举
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        // 获取用户
        let user: User = user_repo
            .find_by_username(&req.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // 验证密码
        self.hasher.verify(&req.password, &user.password_hash)?;

        // 生成令牌
        let token = self
            .jwt_service
            .issue(&user.id, &user.username, user.is_admin)?;

        tracing::info!(username = %user.username, "User logged in");

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// 用户注册
    ///
    /// 先行唯一性检查不在事务中；并发竞争时由存储层唯一约束兜底，
    /// 约束冲突同样映射为 Conflict
    pub async fn register(&self, req: RegisterRequest) -> Result<UserResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        // 检查用户名是否已存在
        if user_repo.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::conflict("Username already exists"));
        }

        // 检查邮箱是否已存在
        if user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already exists"));
        }

        // 哈希密码并落库，注册用户永远不是管理员
        let password_hash = self.hasher.hash(&req.password)?;
        let user = user_repo
            .create(&req.username, &req.email, &password_hash, false)
            .await?;

        tracing::info!(username = %user.username, "User registered");

        Ok(UserResponse::from(user))
    }

    /// 引导管理员账号（幂等的启动副作用）
    ///
    /// 保留用户名存在则什么都不做；缺失时以固定初始密码创建
    pub async fn seed_admin(&self) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        if user_repo.find_by_username(ADMIN_USERNAME).await?.is_some() {
            tracing::debug!("Admin account already present");
            return Ok(());
        }

        let password_hash = self.hasher.hash(ADMIN_DEFAULT_PASSWORD)?;
        user_repo
            .create(ADMIN_USERNAME, ADMIN_EMAIL, &password_hash, true)
            .await?;

        tracing::info!("Admin account created with default password");
        Ok(())
    }
}
