//! Wand payload decoding
//!
//! Payload приходит как JSON-объект. Сначала матчим имя заклинания (дешёвая
//! проверка, большинство сообщений на канале от чужих палочек), потом
//! десериализуем остальное.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("message on channel `{0}` is not a wand message")]
    WrongChannel(String),

    #[error("spell `{0}` is not handled here")]
    UnknownSpell(String),

    #[error("malformed wand payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Параметры выстрела из палочки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WandCast {
    pub name: String,
    pub damage: f32,
    /// Блоков за тик
    pub speed: f32,
    /// Half-width hit volume (визуальный scale = scale × visual_scale)
    pub scale: f32,
    /// Тиков до затухания
    pub lifetime: u32,
    /// Modifier ids; отсутствие и null = пустой список
    #[serde(default)]
    pub special: Option<Vec<String>>,
}

impl WandCast {
    pub fn decode(data: &Value, spell_name: &str) -> Result<Self, PayloadError> {
        let name = data.get("name").and_then(Value::as_str).unwrap_or_default();
        if name != spell_name {
            return Err(PayloadError::UnknownSpell(name.to_string()));
        }

        Ok(Self::deserialize(data)?)
    }

    pub fn modifiers(&self) -> &[String] {
        self.special.as_deref().unwrap_or_default()
    }
}
