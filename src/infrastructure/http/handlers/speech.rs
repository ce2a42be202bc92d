//! Speech HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteSpeech, GetHistory, GetStatistics, SaveSpeech};
use crate::infrastructure::http::dto::{
    DeleteSpeechResponse, HistoryQuery, HistoryResponse, SaveSpeechRequest, SaveSpeechResponse,
    SpeechDto, StatisticsQuery, StatisticsResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 保存朗读记录
///
/// POST /api/tts/save
pub async fn save_speech(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveSpeechRequest>,
) -> Result<Json<SaveSpeechResponse>, ApiError> {
    let command = SaveSpeech {
        text: req.text.unwrap_or_default(),
        voice_name: req.voice_name,
        language_code: req.language_code,
        pitch: req.pitch,
        speed: req.speed,
        volume: req.volume,
        user_id: req.user_id,
    };

    let record = state.save_handler.handle(command).await?;

    Ok(Json(SaveSpeechResponse {
        success: true,
        speech: SpeechDto::from(record),
        message: "Speech record saved successfully",
    }))
}

/// 获取朗读历史
///
/// GET /api/tts/history?userId=&limit=
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    // limit 按字符串接收；非数字拒绝而不是静默回退默认值
    let limit = params
        .limit
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| ApiError::BadRequest(format!("Invalid limit parameter: {}", raw)))
        })
        .transpose()?;

    let query = GetHistory {
        user_id: params.user_id,
        limit,
    };

    let records = state.history_handler.handle(query).await?;
    let speeches: Vec<SpeechDto> = records.into_iter().map(SpeechDto::from).collect();
    let count = speeches.len();

    Ok(Json(HistoryResponse {
        success: true,
        speeches,
        count,
    }))
}

/// 获取朗读统计
///
/// GET /api/tts/statistics?userId=
pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatisticsQuery>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    let stats = state
        .statistics_handler
        .handle(GetStatistics {
            user_id: params.user_id,
        })
        .await?;

    Ok(Json(StatisticsResponse {
        success: true,
        statistics: stats.into(),
    }))
}

/// 删除朗读记录（幂等）
///
/// DELETE /api/tts/:id
pub async fn delete_speech(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteSpeechResponse>, ApiError> {
    state.delete_handler.handle(DeleteSpeech { id }).await?;

    Ok(Json(DeleteSpeechResponse {
        success: true,
        message: "Speech record deleted successfully",
    }))
}
