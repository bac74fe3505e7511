//! SPARKWAND Simulation Core
//!
//! ECS-симуляция заклинания "spark" на Bevy 0.16 (headless)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = логика эффекта (движение, hit-test, registry, кольца)
//! - Хост = рендер частиц, звук, сеть, реальные блоки
//!
//! Хост заливает мир (VoxelWorld, Hurtbox, Player), шлёт WandDataReceived,
//! крутит `run_ticks` раз в игровой тик и читает ParticleHit / EffectCue
//! сразу после тика: события живут до конца следующего тика.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod logger;
pub mod registry;
pub mod schedule;
pub mod spell;

pub use components::*;
pub use config::{ConfigError, RingConfig, SoundCue, SparkConfig};
pub use logger::{log, log_error, log_info, log_warning, init_logger};
pub use registry::{EffectToken, PositionRegistry};
pub use schedule::{reap_cancelled_tasks, RepeatingTask};
pub use spell::{
    EffectCue, ModifierContext, ModifierRegistry, ParticleHit, PayloadError, RingDecoration, SparkProjectile,
    SpellPlugin, WandCast, WandDataReceived,
};

/// Игровой тик: 20 Hz
pub const TICK_HZ: f64 = 20.0;

pub const DEFAULT_SEED: u64 = 42;

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SparkConfig,
}

impl SimulationPlugin {
    pub fn with_config(config: SparkConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ));

        // Seed от create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        app.add_plugins(SpellPlugin::with_config(self.config.clone()));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ));

    app
}

/// Прогнать `ticks` игровых тиков напрямую, без ожидания реального времени
///
/// FixedUpdate без Main schedule не чистит event буферы, поэтому каждый тик
/// начинается с `update_spell_events`. После вызова `iter_current_update_events`
/// отдаёт ровно события последнего тика.
pub fn run_ticks(app: &mut App, ticks: u32) {
    for _ in 0..ticks {
        let world = app.world_mut();
        spell::update_spell_events(world);
        world.run_schedule(FixedUpdate);
    }
}

/// Snapshot мира для сравнения детерминизма
///
/// Сортировка по Entity index, компоненты через Debug.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
