use std::path::Path;
use std::sync::Arc;

use crate::core::{Config, Result};
use crate::orders::{RedbOrderStore, TransitionEngine};

/// 服务器状态 - 持有配置和引擎的共享引用
///
/// 使用 Arc 实现浅拷贝，所有 HTTP handler 共享同一个引擎实例。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | engine | Arc<TransitionEngine> | 订单状态机 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 订单状态机 (Arc 共享所有权)
    pub engine: Arc<TransitionEngine<RedbOrderStore>>,
}

impl ServerState {
    /// 初始化服务器状态: 创建工作目录并打开嵌入式数据库
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let db_path = Path::new(&config.work_dir).join("orders.redb");
        let store = RedbOrderStore::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Order store opened");

        Ok(Self {
            config: config.clone(),
            engine: Arc::new(TransitionEngine::new(store)),
        })
    }
}
