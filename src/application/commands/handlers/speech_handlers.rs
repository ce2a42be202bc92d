//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::{DeleteSpeech, SaveSpeech};
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechRecord, SpeechStorePort};
use crate::domain::NewSpeech;

// ============================================================================
// SaveSpeech
// ============================================================================

/// SaveSpeech Handler - 校验、填充默认值并写入存储
pub struct SaveSpeechHandler {
    store: Arc<dyn SpeechStorePort>,
}

impl SaveSpeechHandler {
    pub fn new(store: Arc<dyn SpeechStorePort>) -> Self {
        Self { store }
    }

    /// 校验失败时直接返回，不触达存储后端
    pub async fn handle(&self, command: SaveSpeech) -> Result<SpeechRecord, ApplicationError> {
        let speech = NewSpeech::new(
            &command.text,
            command.voice_name,
            command.language_code,
            command.pitch,
            command.speed,
            command.volume,
            command.user_id,
        )?;

        let record = self.store.insert(&speech).await?;

        tracing::info!(
            speech_id = %record.id,
            user_id = %record.user_id,
            chars = record.text.chars().count(),
            "Speech record saved"
        );

        Ok(record)
    }
}

// ============================================================================
// DeleteSpeech
// ============================================================================

/// DeleteSpeech Handler - 幂等删除，id 不存在也算成功
pub struct DeleteSpeechHandler {
    store: Arc<dyn SpeechStorePort>,
}

impl DeleteSpeechHandler {
    pub fn new(store: Arc<dyn SpeechStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeleteSpeech) -> Result<(), ApplicationError> {
        self.store.delete_by_id(&command.id).await?;

        tracing::info!(speech_id = %command.id, "Speech record deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemorySpeechStore;

    fn save_command(text: &str) -> SaveSpeech {
        SaveSpeech {
            text: text.to_string(),
            voice_name: None,
            language_code: None,
            pitch: None,
            speed: None,
            volume: None,
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_save_round_trip() {
        let store = Arc::new(InMemorySpeechStore::new());
        let handler = SaveSpeechHandler::new(store.clone());

        let record = handler.handle(save_command("  Hello world  ")).await.unwrap();
        assert_eq!(record.text, "Hello world");
        assert_eq!(record.voice_name, "Default");
        assert_eq!(record.pitch, 1.0);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_save_empty_text_never_reaches_store() {
        let store = Arc::new(InMemorySpeechStore::new());
        let handler = SaveSpeechHandler::new(store.clone());

        let err = handler.handle(save_command("   \n ")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_save_out_of_range_pitch_rejected() {
        let store = Arc::new(InMemorySpeechStore::new());
        let handler = SaveSpeechHandler::new(store.clone());

        let mut command = save_command("hi");
        command.pitch = Some(2.5);
        let err = handler.handle(command).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_id_is_ok() {
        let store = Arc::new(InMemorySpeechStore::new());
        let handler = DeleteSpeechHandler::new(store);

        let result = handler
            .handle(DeleteSpeech {
                id: "no-such-id".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = Arc::new(InMemorySpeechStore::new());
        let save = SaveSpeechHandler::new(store.clone());
        let delete = DeleteSpeechHandler::new(store.clone());

        let record = save.handle(save_command("hi")).await.unwrap();
        delete
            .handle(DeleteSpeech {
                id: record.id.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(store.len(), 0);
    }
}
