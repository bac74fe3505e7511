//! Spell domain: spark из палочки + декоративные modifiers
//!
//! Содержит:
//! - cast: WandDataReceived → spark entity (+ modifiers)
//! - projectile: SparkProjectile, step_projectile (движение + hit-test)
//! - ring: RingDecoration (energy surround)
//! - modifiers: ModifierRegistry (id → factory)
//! - payload: WandCast, PayloadError
//! - events: WandDataReceived, ParticleHit, EffectCue

use bevy::prelude::*;

pub mod cast;
pub mod events;
pub mod modifiers;
pub mod payload;
pub mod projectile;
pub mod ring;


pub use cast::{handle_wand_data, launch_point};
pub use events::{EffectCue, ParticleHit, WandDataReceived};
pub use modifiers::{ModifierContext, ModifierFactory, ModifierRegistry};
pub use payload::{PayloadError, WandCast};
pub use projectile::{advance_projectiles, step_projectile, HitCandidate, SparkProjectile, StepReport};
pub use ring::{advance_ring_decorations, ring_offsets, RingDecoration};

use crate::components::VoxelWorld;
use crate::config::SparkConfig;
use crate::registry::PositionRegistry;
use crate::schedule::reap_cancelled_tasks;

/// Swap двойных буферов spell событий (то, что делает `event_update_system` в First)
pub fn update_spell_events(world: &mut World) {
    update_events::<WandDataReceived>(world);
    update_events::<ParticleHit>(world);
    update_events::<EffectCue>(world);
}

fn update_events<E: Event>(world: &mut World) {
    if let Some(mut events) = world.get_resource_mut::<Events<E>>() {
        events.update();
    }
}

/// Spell Plugin
///
/// Регистрирует spell системы в FixedUpdate (один вызов = один игровой тик).
///
/// Порядок выполнения:
/// 1. handle_wand_data: новые spark'и и их modifiers
/// 2. advance_projectiles: registry.set, hit-test, termination, движение
/// 3. advance_ring_decorations: кольца читают registry после spark'ов
/// 4. reap_cancelled_tasks: despawn всего, что отменило свою задачу
#[derive(Default)]
pub struct SpellPlugin {
    pub config: SparkConfig,
}

impl SpellPlugin {
    pub fn with_config(config: SparkConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SpellPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WandDataReceived>()
            .add_event::<ParticleHit>()
            .add_event::<EffectCue>();

        app.insert_resource(self.config.clone())
            .insert_resource(ModifierRegistry::with_builtin(&self.config))
            .init_resource::<PositionRegistry>()
            .init_resource::<VoxelWorld>();

        // Токены нужны даже без SimulationPlugin
        if !app.world().contains_resource::<crate::DeterministicRng>() {
            app.insert_resource(crate::DeterministicRng::new(crate::DEFAULT_SEED));
        }

        app.add_systems(
            FixedUpdate,
            (
                handle_wand_data,
                advance_projectiles,
                advance_ring_decorations,
                reap_cancelled_tasks,
            )
                .chain(), // Последовательно: кольцо видит удаление токена в том же тике
        );
    }
}
