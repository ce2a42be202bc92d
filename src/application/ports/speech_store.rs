//! Speech Store Port - 朗读记录存储端口
//!
//! 两个后端（SQLite / Sled）在进程启动时二选一，
//! 运行期不可切换；处理器只依赖本 trait。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::NewSpeech;

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 已持久化的朗读记录
#[derive(Debug, Clone)]
pub struct SpeechRecord {
    pub id: Uuid,
    pub text: String,
    pub voice_name: String,
    pub language_code: String,
    pub pitch: f64,
    pub speed: f64,
    pub volume: f64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Speech Store Port
#[async_trait]
pub trait SpeechStorePort: Send + Sync {
    /// 插入记录，由后端分配 `id` 与 `created_at`
    async fn insert(&self, speech: &NewSpeech) -> Result<SpeechRecord, StoreError>;

    /// 查询记录，按创建时间倒序，最多 `limit` 条
    ///
    /// `user_id` 为 None 时返回全部用户的记录
    async fn query(
        &self,
        user_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SpeechRecord>, StoreError>;

    /// 按 id 删除，最多删除一条；id 不存在时为 no-op
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// 仅取出匹配记录的 text 字段（统计用）
    async fn select_texts(&self, user_id: Option<&str>) -> Result<Vec<String>, StoreError>;
}
