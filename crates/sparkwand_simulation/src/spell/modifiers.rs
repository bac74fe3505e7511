//! Spell modifiers (resource)
//!
//! Modifier id из `special` → функция, которая спавнит эффект.
//! Новый modifier = `register` ещё одной функции, handler не меняется.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::components::Particle;
use crate::config::SparkConfig;
use crate::registry::EffectToken;
use crate::schedule::RepeatingTask;
use crate::spell::ring::RingDecoration;

/// Всё, что modifier знает про свой spark
#[derive(Debug, Clone, Copy)]
pub struct ModifierContext<'a> {
    pub token: EffectToken,
    /// Точка спавна spark'а
    pub origin: Vec3,
    pub scale: f32,
    pub lifetime: u32,
    pub config: &'a SparkConfig,
}

pub type ModifierFactory = fn(&mut Commands<'_, '_>, &ModifierContext<'_>) -> Entity;

#[derive(Resource, Clone, Default)]
pub struct ModifierRegistry {
    factories: HashMap<String, ModifierFactory>,
}

impl ModifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Встроенные modifiers (ring под id из конфига)
    pub fn with_builtin(config: &SparkConfig) -> Self {
        let mut registry = Self::new();
        registry.register(config.ring.modifier.clone(), spawn_energy_surround);
        registry
    }

    pub fn register(&mut self, id: impl Into<String>, factory: ModifierFactory) {
        self.factories.insert(id.into(), factory);
    }

    pub fn get(&self, id: &str) -> Option<ModifierFactory> {
        self.factories.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }
}

/// Energy surround: одна частица на кольце вокруг spark'а
pub fn spawn_energy_surround(commands: &mut Commands, context: &ModifierContext<'_>) -> Entity {
    let config = context.config;

    commands
        .spawn((
            Transform::from_translation(context.origin),
            Particle::new(
                config.spark_particle.clone(),
                context.scale * config.visual_scale,
                context.lifetime,
            ),
            RingDecoration::new(
                context.token,
                context.scale,
                context.lifetime,
                config.ring.radius,
                config.ring.points,
            ),
            RepeatingTask::every_tick(),
        ))
        .id()
}
