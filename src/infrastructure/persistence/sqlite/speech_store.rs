//! SQLite Speech Store

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{SpeechRecord, SpeechStorePort, StoreError};
use crate::domain::NewSpeech;

/// SQLite Speech Store
pub struct SqliteSpeechStore {
    pool: DbPool,
}

impl SqliteSpeechStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SpeechRow {
    id: String,
    text: String,
    voice_name: String,
    language_code: String,
    pitch: f64,
    speed: f64,
    volume: f64,
    user_id: String,
    created_at: String,
}

impl TryFrom<SpeechRow> for SpeechRecord {
    type Error = StoreError;

    fn try_from(row: SpeechRow) -> Result<Self, Self::Error> {
        Ok(SpeechRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?,
            text: row.text,
            voice_name: row.voice_name,
            language_code: row.language_code,
            pitch: row.pitch,
            speed: row.speed,
            volume: row.volume,
            user_id: row.user_id,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

const SELECT_COLUMNS: &str =
    "id, text, voice_name, language_code, pitch, speed, volume, user_id, created_at";

#[async_trait]
impl SpeechStorePort for SqliteSpeechStore {
    async fn insert(&self, speech: &NewSpeech) -> Result<SpeechRecord, StoreError> {
        let id = Uuid::new_v4();
        // TEXT 列按微秒精度落盘，返回值同样截断，保证与存储内容一致
        let now = Utc::now();
        let created_at = DateTime::from_timestamp_micros(now.timestamp_micros())
            .ok_or_else(|| {
                StoreError::SerializationError(format!("Invalid timestamp: {}", now))
            })?;

        sqlx::query(
            r#"
            INSERT INTO speeches (id, text, voice_name, language_code, pitch, speed, volume, user_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&speech.text)
        .bind(&speech.voice_name)
        .bind(&speech.language_code)
        .bind(speech.pitch)
        .bind(speech.speed)
        .bind(speech.volume)
        .bind(&speech.user_id)
        // 固定微秒精度，保证 TEXT 列上的字典序等于时间序
        .bind(created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(SpeechRecord {
            id,
            text: speech.text.clone(),
            voice_name: speech.voice_name.clone(),
            language_code: speech.language_code.clone(),
            pitch: speech.pitch,
            speed: speech.speed,
            volume: speech.volume,
            user_id: speech.user_id.clone(),
            created_at,
        })
    }

    async fn query(
        &self,
        user_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SpeechRecord>, StoreError> {
        // 防止超大 limit 转换后变负数（SQLite 将负 LIMIT 视为不限制）
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<SpeechRow> = match user_id {
            Some(user_id) => {
                sqlx::query_as(&format!(
                    "SELECT {SELECT_COLUMNS} FROM speeches WHERE user_id = ? ORDER BY created_at DESC LIMIT ?"
                ))
                .bind(user_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "SELECT {SELECT_COLUMNS} FROM speeches ORDER BY created_at DESC LIMIT ?"
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(SpeechRecord::try_from).collect()
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM speeches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn select_texts(&self, user_id: Option<&str>) -> Result<Vec<String>, StoreError> {
        let texts: Vec<(String,)> = match user_id {
            Some(user_id) => {
                sqlx::query_as("SELECT text FROM speeches WHERE user_id = ?")
                    .bind(user_id)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as("SELECT text FROM speeches")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(texts.into_iter().map(|(text,)| text).collect())
    }
}
