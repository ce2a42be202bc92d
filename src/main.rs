//! Speechlog - 朗读记录持久化服务
//!
//! 浏览器端负责语音合成播放；本服务负责：
//! - 保存每次朗读的记录（文本、音色、参数、时间戳）
//! - 历史 / 统计查询
//! - SQLite 与 Sled 双后端，部署时二选一

use std::sync::Arc;

use speechlog::application::SpeechStorePort;
use speechlog::config::{load_config, print_config, BackendKind};
use speechlog::infrastructure::http::{AppState, HttpServer, ServerConfig};
use speechlog::infrastructure::persistence::sled::{SledSpeechStore, SledStoreConfig};
use speechlog::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteSpeechStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    // 后端选择缺失或不可识别在这里直接失败
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},speechlog={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Speechlog - 朗读记录持久化服务");
    print_config(&config);

    // load_config 已保证 backend 存在
    let backend = config
        .database
        .backend
        .ok_or_else(|| anyhow::anyhow!("No database backend configured"))?;

    // 初始化选中的存储后端
    let store: Arc<dyn SpeechStorePort> = match backend {
        BackendKind::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.database.sqlite.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let db_config = DatabaseConfig {
                database_url: config.database.sqlite.database_url(),
                max_connections: config.database.sqlite.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;
            Arc::new(SqliteSpeechStore::new(pool))
        }
        BackendKind::Sled => {
            if let Some(parent) = std::path::Path::new(&config.database.sled.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let store_config = SledStoreConfig {
                db_path: config.database.sled.path.clone(),
            };
            Arc::new(SledSpeechStore::new(&store_config)?)
        }
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        config.server.cors_origins.clone(),
    );
    let state = AppState::new(store, backend.as_str());
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
