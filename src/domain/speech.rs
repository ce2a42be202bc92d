//! Speech Domain - 朗读记录校验规则
//!
//! 所有字段的默认值与取值范围在此集中定义，
//! 存储适配器只负责持久化，不做二次校验。

use thiserror::Error;

/// 文本最大长度（字符数）
pub const MAX_TEXT_CHARS: usize = 5000;

/// pitch / speed 取值范围
pub const RATE_RANGE: (f64, f64) = (0.5, 2.0);

/// volume 取值范围
pub const VOLUME_RANGE: (f64, f64) = (0.0, 1.0);

/// 校验错误
#[derive(Debug, Error, PartialEq)]
pub enum SpeechValidationError {
    #[error("Text is required")]
    EmptyText,

    #[error("Text exceeds maximum length of {MAX_TEXT_CHARS} characters (got {0})")]
    TextTooLong(usize),

    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// 字段默认值
pub struct SpeechDefaults;

impl SpeechDefaults {
    pub const VOICE_NAME: &'static str = "Default";
    pub const LANGUAGE_CODE: &'static str = "en-US";
    pub const PITCH: f64 = 1.0;
    pub const SPEED: f64 = 1.0;
    pub const VOLUME: f64 = 1.0;
    pub const USER_ID: &'static str = "anonymous";
}

/// 已校验、已填充默认值的新记录
///
/// `id` 和 `created_at` 由存储适配器在插入时分配。
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpeech {
    pub text: String,
    pub voice_name: String,
    pub language_code: String,
    pub pitch: f64,
    pub speed: f64,
    pub volume: f64,
    pub user_id: String,
}

impl NewSpeech {
    /// 校验输入并填充默认值
    ///
    /// - `text` 去除首尾空白后必须非空且不超过 5000 字符
    /// - 数值字段超出范围时拒绝（不截断、不回退默认值），
    ///   两个后端行为一致
    pub fn new(
        text: &str,
        voice_name: Option<String>,
        language_code: Option<String>,
        pitch: Option<f64>,
        speed: Option<f64>,
        volume: Option<f64>,
        user_id: Option<String>,
    ) -> Result<Self, SpeechValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechValidationError::EmptyText);
        }
        let char_count = text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(SpeechValidationError::TextTooLong(char_count));
        }

        let pitch = pitch.unwrap_or(SpeechDefaults::PITCH);
        check_range("pitch", pitch, RATE_RANGE)?;
        let speed = speed.unwrap_or(SpeechDefaults::SPEED);
        check_range("speed", speed, RATE_RANGE)?;
        let volume = volume.unwrap_or(SpeechDefaults::VOLUME);
        check_range("volume", volume, VOLUME_RANGE)?;

        Ok(Self {
            text: text.to_string(),
            voice_name: voice_name.unwrap_or_else(|| SpeechDefaults::VOICE_NAME.to_string()),
            language_code: language_code
                .unwrap_or_else(|| SpeechDefaults::LANGUAGE_CODE.to_string()),
            pitch,
            speed,
            volume,
            user_id: user_id.unwrap_or_else(|| SpeechDefaults::USER_ID.to_string()),
        })
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), SpeechValidationError> {
    if value < min || value > max || !value.is_finite() {
        return Err(SpeechValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
