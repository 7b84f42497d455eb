//! 测试公共模块
//! 提供测试配置、数据库初始化和应用构建辅助函数

use axum::Router;
use open_registry::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    config::{
        AppConfig, DatabaseConfig, FeaturesConfig, LoggingConfig, SecurityConfig, ServerConfig,
    },
    db,
    middleware::AppState,
    routes,
    services::AuthService,
};
use secrecy::Secret;
use sqlx::PgPool;
use std::sync::Arc;

#[allow(dead_code)]
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only-min-32-chars";

/// 创建测试配置
pub fn create_test_config(registration: bool) -> AppConfig {
    // 从环境变量获取测试数据库连接参数，缺省使用本地默认值
    let db_host = std::env::var("TEST_DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let db_name = std::env::var("TEST_DB_NAME").unwrap_or_else(|_| "open_registry_test".to_string());
    let db_user = std::env::var("TEST_DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let db_password = std::env::var("TEST_DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string());

    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            graceful_shutdown_timeout_secs: 5,
        },
        database: DatabaseConfig {
            host: db_host,
            port: 5432,
            user: db_user,
            password: Secret::new(db_password),
            name: db_name,
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 300,
            max_lifetime_secs: 1800,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            jwt_secret: Secret::new(TEST_JWT_SECRET.to_string()),
            token_exp_secs: 259_200,
        },
        features: FeaturesConfig { registration },
    }
}

/// 初始化测试数据库（建表后直接可用，测试用例之间以唯一用户名隔离）
#[allow(dead_code)]
pub async fn setup_test_db(config: &AppConfig) -> PgPool {
    let pool = db::create_pool(&config.database)
        .await
        .expect("Failed to create test database pool");

    db::ensure_schema(&pool)
        .await
        .expect("Failed to ensure test schema");

    pool
}

/// 构建完整的测试应用
#[allow(dead_code)]
pub fn create_test_app(config: AppConfig, pool: PgPool) -> Router {
    let jwt_service =
        Arc::new(JwtService::from_config(&config).expect("Failed to create JWT service"));
    let auth_service = Arc::new(AuthService::new(pool.clone(), jwt_service.clone()));

    let state = Arc::new(AppState {
        config,
        db: pool,
        auth_service,
        jwt_service,
    });

    routes::create_router(state)
}

/// 直接向数据库插入一个测试用户
#[allow(dead_code)]
pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    email: &str,
) -> Result<(), sqlx::Error> {
    let hasher = PasswordHasher::new();
    let password_hash = hasher.hash(password).expect("Failed to hash test password");

    sqlx::query(
        "INSERT INTO users (username, email, password_hash, is_admin) VALUES ($1, $2, $3, FALSE)",
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(())
}

/// 生成测试专用的唯一用户名，避免用例之间互相干扰
#[allow(dead_code)]
pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}
