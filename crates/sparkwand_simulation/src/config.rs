//! Spark tuning (resource)
//!
//! Все константы заклинания в одном месте: имена каналов, звуки, размеры кольца.
//! Хост может загрузить override из JSON; отсутствующие ключи берутся из Default.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid spark config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("ring needs at least one point")]
    EmptyRing,
}

/// Positioned sound played by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundCue {
    pub sound: String,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundCue {
    pub fn new(sound: impl Into<String>, volume: f32, pitch: f32) -> Self {
        Self {
            sound: sound.into(),
            volume,
            pitch,
        }
    }
}

/// Ring decoration geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Modifier id в `special` списке, который включает кольцо
    pub modifier: String,
    pub radius: f32,
    pub points: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            modifier: "kubejs:energy_surround".to_string(),
            radius: 2.0,
            points: 16,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkConfig {
    /// Единственное заклинание, на которое реагирует handler
    pub spell_name: String,
    /// Inbound канал (wand fire)
    pub wand_channel: String,
    /// Outbound канал (hit → owner)
    pub hit_channel: String,
    /// Высота глаз над позицией кастера
    pub eye_height: f32,
    /// Насколько близко к стене срабатывает столкновение
    pub wall_probe: f32,
    /// Визуальный scale = payload scale × multiplier
    pub visual_scale: f32,
    pub spark_particle: String,
    pub smoke_particle: String,
    pub smoke_count: u32,
    pub cast_sound: SoundCue,
    pub hit_sound: SoundCue,
    pub expire_sound: SoundCue,
    pub ring: RingConfig,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            spell_name: "basic_spark".to_string(),
            wand_channel: "wand".to_string(),
            hit_channel: "par_atk".to_string(),
            eye_height: 1.6,
            wall_probe: 0.5,
            visual_scale: 3.0,
            spark_particle: "electric_spark".to_string(),
            smoke_particle: "large_smoke".to_string(),
            smoke_count: 4,
            cast_sound: SoundCue::new("minecraft:block.note_block.chime", 0.8, 2.0),
            hit_sound: SoundCue::new("minecraft:entity.player.attack.crit", 0.4, 1.0),
            expire_sound: SoundCue::new("minecraft:block.lava.extinguish", 0.1, 2.0),
            ring: RingConfig::default(),
        }
    }
}

impl SparkConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        if config.ring.points == 0 {
            return Err(ConfigError::EmptyRing);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_basic_spark() {
        let config = SparkConfig::default();
        assert_eq!(config.spell_name, "basic_spark");
        assert_eq!(config.wall_probe, 0.5);
        assert_eq!(config.ring.points, 16);
        assert_eq!(config.ring.radius, 2.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SparkConfig::from_json_str(r#"{ "eye_height": 1.2, "ring": { "radius": 3.5 } }"#)
            .expect("valid config");

        assert_eq!(config.eye_height, 1.2);
        assert_eq!(config.ring.radius, 3.5);
        assert_eq!(config.ring.points, 16);
        assert_eq!(config.spell_name, "basic_spark");
    }

    #[test]
    fn test_empty_ring_rejected() {
        let result = SparkConfig::from_json_str(r#"{ "ring": { "points": 0 } }"#);
        assert!(matches!(result, Err(ConfigError::EmptyRing)));
    }

    #[test]
    fn test_garbage_rejected() {
        let result = SparkConfig::from_json_str("not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
