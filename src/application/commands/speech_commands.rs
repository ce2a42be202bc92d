//! Speech Commands

/// 保存朗读记录命令
///
/// 除 `text` 外均为可选，缺省值在领域层填充
#[derive(Debug, Clone)]
pub struct SaveSpeech {
    pub text: String,
    pub voice_name: Option<String>,
    pub language_code: Option<String>,
    pub pitch: Option<f64>,
    pub speed: Option<f64>,
    pub volume: Option<f64>,
    pub user_id: Option<String>,
}

/// 删除朗读记录命令（幂等）
#[derive(Debug, Clone)]
pub struct DeleteSpeech {
    pub id: String,
}
