//! In-Memory Speech Store Implementation
//!
//! 供测试替换真实后端；语义与 SQLite / Sled 实现一致。

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{SpeechRecord, SpeechStorePort, StoreError};
use crate::domain::NewSpeech;

/// 内存朗读记录存储
pub struct InMemorySpeechStore {
    records: DashMap<String, SpeechRecord>,
}

impl InMemorySpeechStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 当前记录数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemorySpeechStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechStorePort for InMemorySpeechStore {
    async fn insert(&self, speech: &NewSpeech) -> Result<SpeechRecord, StoreError> {
        let record = SpeechRecord {
            id: Uuid::new_v4(),
            text: speech.text.clone(),
            voice_name: speech.voice_name.clone(),
            language_code: speech.language_code.clone(),
            pitch: speech.pitch,
            speed: speech.speed,
            volume: speech.volume,
            user_id: speech.user_id.clone(),
            created_at: Utc::now(),
        };
        self.records.insert(record.id.to_string(), record.clone());
        Ok(record)
    }

    async fn query(
        &self,
        user_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SpeechRecord>, StoreError> {
        let mut records: Vec<SpeechRecord> = self
            .records
            .iter()
            .filter(|r| user_id.is_none() || user_id == Some(r.user_id.as_str()))
            .map(|r| r.value().clone())
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.records.remove(id);
        Ok(())
    }

    async fn select_texts(&self, user_id: Option<&str>) -> Result<Vec<String>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| user_id.is_none() || user_id == Some(r.user_id.as_str()))
            .map(|r| r.text.clone())
            .collect())
    }
}
