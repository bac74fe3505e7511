//! Spark projectile: прямолинейное движение + hit-test раз в тик
//!
//! Flow одного тика (`step_projectile`):
//! 1. age += 1
//! 2. Probe клетка чуть впереди по направлению полёта → блок
//! 3. AABB (half-width = scale) → первый не-игрок = попадание
//! 4. Стена / попадание / age >= lifetime → terminated
//!
//! Чистая функция ничего не знает про ECS; `advance_projectiles` оборачивает её
//! в систему: registry, events, cancel задачи, движение.

use bevy::ecs::component::HookContext;
use bevy::ecs::world::DeferredWorld;
use bevy::math::bounding::{Aabb3d, IntersectsVolume};
use bevy::prelude::*;

use crate::components::{BlockId, Hurtbox, Particle, Player, VoxelWorld};
use crate::config::SparkConfig;
use crate::registry::{EffectToken, PositionRegistry};
use crate::schedule::RepeatingTask;
use crate::spell::events::{EffectCue, ParticleHit};

/// Spark в полёте
///
/// Снятие компонента (despawn хостом в том числе) освобождает токен в registry,
/// так что декорации не переживают свой projectile.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[component(on_remove = release_spark_token)]
#[reflect(Component)]
pub struct SparkProjectile {
    /// Кто выстрелил (получатель ParticleHit)
    pub owner: Entity,
    pub token: EffectToken,
    /// Normalized направление полёта
    pub direction: Vec3,
    /// Смещение за тик
    pub velocity: Vec3,
    /// Half-width hit volume
    pub scale: f32,
    pub damage: f32,
    /// Прожито тиков (монотонно растёт)
    pub age: u32,
    pub lifetime: u32,
}

impl SparkProjectile {
    pub fn new(
        owner: Entity,
        token: EffectToken,
        direction: Vec3,
        speed: f32,
        scale: f32,
        damage: f32,
        lifetime: u32,
    ) -> Self {
        let direction = direction.normalize_or_zero();
        Self {
            owner,
            token,
            direction,
            velocity: direction * speed,
            scale,
            damage,
            age: 0,
            lifetime,
        }
    }

    /// Клетка, в которую spark войдёт через `probe` блоков
    pub fn probe_cell(&self, position: Vec3, probe: f32) -> IVec3 {
        VoxelWorld::cell_at(position + self.direction * probe)
    }

    pub fn hit_volume(&self, position: Vec3) -> Aabb3d {
        Aabb3d::new(position, Vec3::splat(self.scale.abs()))
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

fn release_spark_token(mut world: DeferredWorld, context: HookContext) {
    let Some(token) = world.get::<SparkProjectile>(context.entity).map(|spark| spark.token) else {
        return;
    };

    if let Some(mut registry) = world.get_resource_mut::<PositionRegistry>() {
        registry.remove(token);
    }
}

/// Кандидат на попадание (уже с world-space bounds)
#[derive(Debug, Clone, Copy)]
pub struct HitCandidate {
    pub entity: Entity,
    pub bounds: Aabb3d,
    pub is_player: bool,
}

/// Итог одного тика
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepReport {
    /// Первый задетый не-игрок
    pub hit: Option<Entity>,
    /// Непустой блок в probe клетке
    pub wall: Option<BlockId>,
    pub expired: bool,
}

impl StepReport {
    pub fn terminated(&self) -> bool {
        self.hit.is_some() || self.wall.is_some() || self.expired
    }
}

/// Один тик projectile в позиции `position`
///
/// Все три условия проверяются независимо; любое завершает projectile.
/// Попадание фиксируется только одно: остальные пересечения в том же тике игнорируются.
pub fn step_projectile(
    projectile: &mut SparkProjectile,
    position: Vec3,
    blocks: &VoxelWorld,
    candidates: impl IntoIterator<Item = HitCandidate>,
    wall_probe: f32,
) -> StepReport {
    projectile.age = projectile.age.saturating_add(1);

    let block = blocks.block_at(projectile.probe_cell(position, wall_probe));

    let volume = projectile.hit_volume(position);
    let hit = candidates
        .into_iter()
        .find(|candidate| !candidate.is_player && volume.intersects(&candidate.bounds))
        .map(|candidate| candidate.entity);

    StepReport {
        hit,
        wall: (!block.is_air()).then_some(block),
        expired: projectile.is_expired(),
    }
}

/// Система: тик всех живых spark'ов
///
/// Порядок внутри тика: registry.set → step → (hit events) → (termination) → движение.
pub fn advance_projectiles(
    mut projectiles: Query<(
        Entity,
        &mut Transform,
        &mut SparkProjectile,
        &mut RepeatingTask,
        Option<&mut Particle>,
    )>,
    targets: Query<(Entity, &Transform, &Hurtbox, Has<Player>), Without<SparkProjectile>>,
    blocks: Res<VoxelWorld>,
    config: Res<SparkConfig>,
    mut registry: ResMut<PositionRegistry>,
    mut hit_events: EventWriter<ParticleHit>,
    mut cues: EventWriter<EffectCue>,
) {
    for (entity, mut transform, mut projectile, mut task, particle) in projectiles.iter_mut() {
        if !task.tick() {
            continue;
        }

        let position = transform.translation;
        registry.set(projectile.token, position);

        let candidates = targets
            .iter()
            .map(|(target, target_transform, hurtbox, is_player)| HitCandidate {
                entity: target,
                bounds: hurtbox.bounds(target_transform.translation),
                is_player,
            });

        let report = step_projectile(&mut projectile, position, &blocks, candidates, config.wall_probe);

        if let Some(target) = report.hit {
            hit_events.write(ParticleHit {
                channel: config.hit_channel.clone(),
                owner: projectile.owner,
                target,
                position,
                scale: projectile.scale,
                damage: projectile.damage,
            });
            cues.write(EffectCue::burst(&config.smoke_particle, position, config.smoke_count));
            cues.write(EffectCue::sound(&config.hit_sound, position));
            registry.remove(projectile.token);

            crate::log(&format!(
                "Spark {} hit {:?} at {} (damage {})",
                projectile.token, target, position, projectile.damage
            ));
        }

        if let Some(block) = &report.wall {
            registry.remove(projectile.token);
            crate::log(&format!("Spark {} hit wall {}", projectile.token, block.as_str()));
        }

        if report.terminated() {
            cues.write(EffectCue::sound(&config.expire_sound, position));
            cues.write(EffectCue::burst(&config.smoke_particle, position, config.smoke_count));
            registry.remove(projectile.token);
            task.cancel();

            crate::log(&format!(
                "Spark {} ({:?}) terminated at age {}/{}",
                projectile.token, entity, projectile.age, projectile.lifetime
            ));
            continue;
        }

        // Держим скорость постоянной: хост мог её погасить
        transform.translation += projectile.velocity;
        if let Some(mut particle) = particle {
            particle.velocity = projectile.velocity;
        }
    }
}
