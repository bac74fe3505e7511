//! Spell events
//!
//! # Architecture
//!
//! **Inbound (хост → ECS):**
//! - `WandDataReceived`: сетевое сообщение от палочки (канал + JSON payload)
//!
//! **Outbound (ECS → хост):**
//! - `ParticleHit`: spark попал в моба, уходит владельцу по `hit_channel`
//! - `EffectCue`: звуки и дымовые вспышки, хост их проигрывает

use bevy::prelude::*;
use serde_json::{json, Value};

/// Event: пришли данные от палочки
#[derive(Event, Debug, Clone)]
pub struct WandDataReceived {
    /// Кто кастует (Transform = позиция ног + направление взгляда)
    pub caster: Entity,
    pub channel: String,
    pub data: Value,
}

impl WandDataReceived {
    pub fn new(caster: Entity, channel: impl Into<String>, data: Value) -> Self {
        Self {
            caster,
            channel: channel.into(),
            data,
        }
    }
}

/// Event: spark попал в не-игрока
///
/// Ровно один на projectile: после попадания projectile уже мёртв.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ParticleHit {
    /// Outbound канал (`SparkConfig::hit_channel`)
    pub channel: String,
    /// Кто выстрелил (получатель сообщения)
    pub owner: Entity,
    /// В кого попали
    pub target: Entity,
    pub position: Vec3,
    pub scale: f32,
    pub damage: f32,
}

impl ParticleHit {
    /// Payload в том формате, который ждёт серверный обработчик урона
    pub fn to_payload(&self) -> Value {
        json!({
            "x": self.position.x,
            "y": self.position.y,
            "z": self.position.z,
            "scale": self.scale,
            "damage": self.damage,
        })
    }
}

/// Event: аудио-визуальный эффект для хоста
#[derive(Event, Debug, Clone, PartialEq)]
pub enum EffectCue {
    Sound {
        sound: String,
        position: Vec3,
        volume: f32,
        pitch: f32,
    },
    Burst {
        particle: String,
        position: Vec3,
        count: u32,
    },
}

impl EffectCue {
    pub fn sound(cue: &crate::config::SoundCue, position: Vec3) -> Self {
        Self::Sound {
            sound: cue.sound.clone(),
            position,
            volume: cue.volume,
            pitch: cue.pitch,
        }
    }

    pub fn burst(particle: impl Into<String>, position: Vec3, count: u32) -> Self {
        Self::Burst {
            particle: particle.into(),
            position,
            count,
        }
    }
}
