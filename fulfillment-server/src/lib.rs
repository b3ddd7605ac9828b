//! Fulfillment Server - 市场订单履约状态机服务
//!
//! # 架构概述
//!
//! 本模块是 Fulfillment Server 的主入口，提供以下核心功能：
//!
//! - **订单核心** (`orders`): 状态机引擎、动作表校验、审计账本
//! - **存储** (`orders::storage`): 嵌入式 redb 存储，乐观并发控制
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! fulfillment-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 订单状态机和存储
//! └── utils/         # 错误映射、日志
//! ```

pub mod api;
pub mod core;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use orders::{RedbOrderStore, TransitionEngine, TransitionError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: dotenv、工作目录、日志
pub fn setup_environment() -> std::io::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    std::fs::create_dir_all(&config.work_dir)?;
    let log_dir = std::path::Path::new(&config.work_dir).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    init_logger_with_file(Some(&config.log_level), log_dir.to_str());
    Ok(config)
}
