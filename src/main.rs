use open_registry::{
    auth::jwt::JwtService, config::AppConfig, db, handlers::health, middleware::AppState, routes,
    services::AuthService, telemetry,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" => {
                println!("open-registry {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("未知参数: {}", args[1]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    dotenv::dotenv().ok();

    health::set_start_time();

    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        anyhow::anyhow!("Failed to load configuration: {}", e)
    })?;

    telemetry::init_telemetry(&config);
    telemetry::init_metrics();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        registration_enabled = config.features.registration,
        "Open Registry starting..."
    );

    // 存储连接失败直接终止进程
    let db_pool = db::create_pool(&config.database).await?;
    db::ensure_schema(&db_pool).await?;

    tracing::info!("Database initialized");

    let jwt_service = Arc::new(JwtService::from_config(&config)?);
    let auth_service = Arc::new(AuthService::new(db_pool.clone(), jwt_service.clone()));

    // 幂等的管理员账号引导
    auth_service.seed_admin().await?;

    let app_state = Arc::new(AppState {
        config: config.clone(),
        db: db_pool,
        auth_service,
        jwt_service,
    });

    let app = routes::create_router(app_state);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.graceful_shutdown_timeout_secs))
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Terminate signal received, starting graceful shutdown");
        },
    }

    tokio::time::sleep(tokio::time::Duration::from_secs(timeout_secs)).await;
    tracing::warn!("Graceful shutdown timeout reached, forcing exit");
}

fn print_help() {
    println!("open-registry {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("用法: open-registry [选项]");
    println!();
    println!("选项:");
    println!("  --version     打印版本信息并退出");
    println!("  --help        打印此帮助信息并退出");
    println!();
    println!("环境变量:");
    println!("  配置通过 REGISTRY_ 前缀的环境变量完成，");
    println!("  功能开关可放在可选的 open-registry.yaml 中");
}
