//! Speech Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechRecord, SpeechStorePort};
use crate::application::queries::{GetHistory, GetStatistics, DEFAULT_HISTORY_LIMIT};

// ============================================================================
// GetHistory
// ============================================================================

/// GetHistory Handler - 按创建时间倒序取最近记录
pub struct GetHistoryHandler {
    store: Arc<dyn SpeechStorePort>,
}

impl GetHistoryHandler {
    pub fn new(store: Arc<dyn SpeechStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetHistory) -> Result<Vec<SpeechRecord>, ApplicationError> {
        let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        let records = self.store.query(query.user_id.as_deref(), limit).await?;
        Ok(records)
    }
}

// ============================================================================
// GetStatistics
// ============================================================================

/// 统计结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechStatistics {
    pub total_speeches: usize,
    pub total_characters: u64,
    pub average_length: u64,
}

/// GetStatistics Handler - 基于 text 字段聚合
///
/// 平均长度四舍五入（half-up），无记录时全部为 0
pub struct GetStatisticsHandler {
    store: Arc<dyn SpeechStorePort>,
}

impl GetStatisticsHandler {
    pub fn new(store: Arc<dyn SpeechStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetStatistics) -> Result<SpeechStatistics, ApplicationError> {
        let texts = self.store.select_texts(query.user_id.as_deref()).await?;

        let total_speeches = texts.len();
        let total_characters: u64 = texts.iter().map(|t| t.chars().count() as u64).sum();
        let average_length = if total_speeches > 0 {
            (total_characters as f64 / total_speeches as f64).round() as u64
        } else {
            0
        };

        Ok(SpeechStatistics {
            total_speeches,
            total_characters,
            average_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::SaveSpeechHandler;
    use crate::application::commands::SaveSpeech;
    use crate::infrastructure::memory::InMemorySpeechStore;

    async fn seed(store: &Arc<InMemorySpeechStore>, text: &str, user_id: &str) {
        let handler = SaveSpeechHandler::new(store.clone() as Arc<dyn SpeechStorePort>);
        handler
            .handle(SaveSpeech {
                text: text.to_string(),
                voice_name: None,
                language_code: None,
                pitch: None,
                speed: None,
                volume: None,
                user_id: Some(user_id.to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_statistics_empty_store() {
        let store = Arc::new(InMemorySpeechStore::new());
        let handler = GetStatisticsHandler::new(store);

        let stats = handler.handle(GetStatistics::default()).await.unwrap();
        assert_eq!(
            stats,
            SpeechStatistics {
                total_speeches: 0,
                total_characters: 0,
                average_length: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_statistics_average_rounded() {
        let store = Arc::new(InMemorySpeechStore::new());
        seed(&store, "abc", "u1").await; // 3
        seed(&store, "abcde", "u1").await; // 5
        seed(&store, "abcdefghij", "u1").await; // 10

        let handler = GetStatisticsHandler::new(store);
        let stats = handler.handle(GetStatistics::default()).await.unwrap();
        assert_eq!(stats.total_speeches, 3);
        assert_eq!(stats.total_characters, 18);
        assert_eq!(stats.average_length, 6);
    }

    #[tokio::test]
    async fn test_statistics_filtered_by_user() {
        let store = Arc::new(InMemorySpeechStore::new());
        seed(&store, "abc", "u1").await;
        seed(&store, "abcdefghij", "u2").await;

        let handler = GetStatisticsHandler::new(store);
        let stats = handler
            .handle(GetStatistics {
                user_id: Some("u1".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(stats.total_speeches, 1);
        assert_eq!(stats.total_characters, 3);
    }

    #[tokio::test]
    async fn test_history_default_limit_and_order() {
        let store = Arc::new(InMemorySpeechStore::new());
        for i in 0..25 {
            seed(&store, &format!("speech {}", i), "u1").await;
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }

        let handler = GetHistoryHandler::new(store);
        let records = handler.handle(GetHistory::default()).await.unwrap();
        assert_eq!(records.len(), DEFAULT_HISTORY_LIMIT);
        // 最新的排最前
        assert_eq!(records[0].text, "speech 24");
        for pair in records.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_history_filtered_by_user() {
        let store = Arc::new(InMemorySpeechStore::new());
        seed(&store, "mine", "u1").await;
        seed(&store, "theirs", "u2").await;

        let handler = GetHistoryHandler::new(store);
        let records = handler
            .handle(GetHistory {
                user_id: Some("u1".to_string()),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "mine");
    }
}
