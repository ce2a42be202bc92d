//! Application State

use std::sync::Arc;

use crate::application::{
    DeleteSpeechHandler, GetHistoryHandler, GetStatisticsHandler, SaveSpeechHandler,
    SpeechStorePort,
};

/// 应用状态
///
/// 存储适配器在进程启动时构造一次，经构造函数注入，
/// 不使用全局单例句柄
pub struct AppState {
    pub save_handler: SaveSpeechHandler,
    pub delete_handler: DeleteSpeechHandler,
    pub history_handler: GetHistoryHandler,
    pub statistics_handler: GetStatisticsHandler,

    /// 当前进程使用的后端名称（health 端点展示用）
    pub backend_name: &'static str,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn SpeechStorePort>, backend_name: &'static str) -> Self {
        Self {
            save_handler: SaveSpeechHandler::new(store.clone()),
            delete_handler: DeleteSpeechHandler::new(store.clone()),
            history_handler: GetHistoryHandler::new(store.clone()),
            statistics_handler: GetStatisticsHandler::new(store),
            backend_name,
        }
    }
}
