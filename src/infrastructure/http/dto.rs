//! Data Transfer Objects
//!
//! 与浏览器端约定的 JSON 均为 camelCase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{SpeechRecord, SpeechStatistics};

// ============================================================================
// Requests
// ============================================================================

/// 保存朗读记录请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSpeechRequest {
    /// 缺失与空串等价，统一走 "Text is required" 校验
    pub text: Option<String>,
    pub voice_name: Option<String>,
    pub language_code: Option<String>,
    pub pitch: Option<f64>,
    pub speed: Option<f64>,
    pub volume: Option<f64>,
    pub user_id: Option<String>,
}

/// history 查询参数
///
/// `limit` 以字符串接收，非数字在处理器中返回 400
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub user_id: Option<String>,
    pub limit: Option<String>,
}

/// statistics 查询参数
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsQuery {
    pub user_id: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// 朗读记录响应体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechDto {
    pub id: Uuid,
    pub text: String,
    pub voice_name: String,
    pub language_code: String,
    pub pitch: f64,
    pub speed: f64,
    pub volume: f64,
    pub user_id: String,
    pub created_at: String,
}

impl From<SpeechRecord> for SpeechDto {
    fn from(record: SpeechRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            voice_name: record.voice_name,
            language_code: record.language_code,
            pitch: record.pitch,
            speed: record.speed,
            volume: record.volume,
            user_id: record.user_id,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// save 响应
#[derive(Debug, Serialize)]
pub struct SaveSpeechResponse {
    pub success: bool,
    pub speech: SpeechDto,
    pub message: &'static str,
}

/// history 响应
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub speeches: Vec<SpeechDto>,
    pub count: usize,
}

/// statistics 响应
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub statistics: StatisticsDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub total_speeches: usize,
    pub total_characters: u64,
    pub average_length: u64,
}

impl From<SpeechStatistics> for StatisticsDto {
    fn from(stats: SpeechStatistics) -> Self {
        Self {
            total_speeches: stats.total_speeches,
            total_characters: stats.total_characters,
            average_length: stats.average_length,
        }
    }
}

/// delete 响应
#[derive(Debug, Serialize)]
pub struct DeleteSpeechResponse {
    pub success: bool,
    pub message: &'static str,
}

/// health 响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub database: &'static str,
}
