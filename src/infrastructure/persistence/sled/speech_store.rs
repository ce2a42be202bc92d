//! Sled Speech Store
//!
//! 文档型后端：每条记录 bincode 序列化后存在 `speech:{id}` 键下。
//! 查询时全量扫描前缀再过滤排序，数据量与使用场景匹配。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sled::Db;
use std::path::Path;
use uuid::Uuid;

use crate::application::ports::{SpeechRecord, SpeechStorePort, StoreError};
use crate::domain::NewSpeech;

/// 键前缀
const KEY_PREFIX: &str = "speech:";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库目录路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/speechlog.sled".to_string(),
        }
    }
}

/// 内部存储条目
///
/// created_at 以 UTC 微秒时间戳落盘
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpeechEntry {
    id: Uuid,
    text: String,
    voice_name: String,
    language_code: String,
    pitch: f64,
    speed: f64,
    volume: f64,
    user_id: String,
    created_at_micros: i64,
}

impl TryFrom<SpeechEntry> for SpeechRecord {
    type Error = StoreError;

    fn try_from(entry: SpeechEntry) -> Result<Self, Self::Error> {
        let created_at = DateTime::from_timestamp_micros(entry.created_at_micros).ok_or_else(
            || StoreError::SerializationError(format!(
                "Invalid timestamp: {}",
                entry.created_at_micros
            )),
        )?;
        Ok(SpeechRecord {
            id: entry.id,
            text: entry.text,
            voice_name: entry.voice_name,
            language_code: entry.language_code,
            pitch: entry.pitch,
            speed: entry.speed,
            volume: entry.volume,
            user_id: entry.user_id,
            created_at,
        })
    }
}

/// Sled Speech Store
pub struct SledSpeechStore {
    db: Db,
}

impl SledSpeechStore {
    /// 打开（或创建）数据库
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db =
            sled::open(&config.db_path).map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::info!(db_path = %config.db_path, "SledSpeechStore initialized");

        Ok(Self { db })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::new(&SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        })
    }

    /// 扫描全部条目，按 user_id 过滤
    fn scan(&self, user_id: Option<&str>) -> Result<Vec<SpeechEntry>, StoreError> {
        let mut entries = Vec::new();
        for item in self.db.scan_prefix(KEY_PREFIX) {
            let (_, value) = item.map_err(|e| StoreError::DatabaseError(e.to_string()))?;
            let entry: SpeechEntry = bincode::deserialize(&value)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?;
            if user_id.is_none() || user_id == Some(entry.user_id.as_str()) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

#[async_trait]
impl SpeechStorePort for SledSpeechStore {
    async fn insert(&self, speech: &NewSpeech) -> Result<SpeechRecord, StoreError> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        let entry = SpeechEntry {
            id,
            text: speech.text.clone(),
            voice_name: speech.voice_name.clone(),
            language_code: speech.language_code.clone(),
            pitch: speech.pitch,
            speed: speech.speed,
            volume: speech.volume,
            user_id: speech.user_id.clone(),
            created_at_micros: created_at.timestamp_micros(),
        };

        let value = bincode::serialize(&entry)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        self.db
            .insert(format!("{KEY_PREFIX}{id}"), value)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        SpeechRecord::try_from(entry)
    }

    async fn query(
        &self,
        user_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SpeechRecord>, StoreError> {
        let mut entries = self.scan(user_id)?;
        entries.sort_by(|a, b| b.created_at_micros.cmp(&a.created_at_micros));
        entries.truncate(limit);
        entries.into_iter().map(SpeechRecord::try_from).collect()
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.db
            .remove(format!("{KEY_PREFIX}{id}"))
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn select_texts(&self, user_id: Option<&str>) -> Result<Vec<String>, StoreError> {
        Ok(self
            .scan(user_id)?
            .into_iter()
            .map(|entry| entry.text)
            .collect())
    }
}
