//! Wand cast handling: WandDataReceived → spark (+ modifiers)

use bevy::prelude::*;

use crate::components::Particle;
use crate::config::SparkConfig;
use crate::registry::{EffectToken, PositionRegistry};
use crate::schedule::RepeatingTask;
use crate::spell::events::{EffectCue, WandDataReceived};
use crate::spell::modifiers::{ModifierContext, ModifierRegistry};
use crate::spell::payload::{PayloadError, WandCast};
use crate::spell::projectile::SparkProjectile;

/// Откуда и куда летит spark
///
/// Точка спавна = ноги кастера + 1 блок вперёд по взгляду + высота глаз.
pub fn launch_point(caster: &Transform, eye_height: f32) -> (Vec3, Vec3) {
    let direction = caster.forward().as_vec3();
    let origin = caster.translation + direction + Vec3::Y * eye_height;
    (origin, direction)
}

/// Проверка канала + декодирование payload
pub fn decode_wand_message(message: &WandDataReceived, config: &SparkConfig) -> Result<WandCast, PayloadError> {
    if message.channel != config.wand_channel {
        return Err(PayloadError::WrongChannel(message.channel.clone()));
    }
    WandCast::decode(&message.data, &config.spell_name)
}

/// Система: обработка сообщений от палочки
///
/// Flow:
/// 1. Чужой канал / чужое заклинание / битый payload → тихо игнорируем (debug log)
/// 2. Новый токен → registry (позиция спавна)
/// 3. Spawn spark entity (Particle + SparkProjectile + RepeatingTask)
/// 4. Звук каста у кастера
/// 5. Каждый modifier из `special` → factory из ModifierRegistry
#[allow(clippy::too_many_arguments)]
pub fn handle_wand_data(
    mut commands: Commands,
    mut messages: EventReader<WandDataReceived>,
    casters: Query<&Transform>,
    config: Res<SparkConfig>,
    modifiers: Res<ModifierRegistry>,
    mut rng: ResMut<crate::DeterministicRng>,
    mut registry: ResMut<PositionRegistry>,
    mut cues: EventWriter<EffectCue>,
) {
    for message in messages.read() {
        let cast = match decode_wand_message(message, &config) {
            Ok(cast) => cast,
            Err(err) => {
                crate::log(&format!("Ignoring wand message from {:?}: {}", message.caster, err));
                continue;
            }
        };

        let Ok(caster) = casters.get(message.caster) else {
            crate::log_warning(&format!("Wand caster {:?} has no Transform, cast dropped", message.caster));
            continue;
        };

        let (origin, direction) = launch_point(caster, config.eye_height);
        let token = EffectToken::generate(&mut rng.rng);
        registry.set(token, origin);

        let projectile = SparkProjectile::new(
            message.caster,
            token,
            direction,
            cast.speed,
            cast.scale,
            cast.damage,
            cast.lifetime,
        );
        let particle = Particle::new(
            config.spark_particle.clone(),
            cast.scale * config.visual_scale,
            cast.lifetime,
        )
        .with_velocity(projectile.velocity);

        let spark = commands
            .spawn((
                Transform::from_translation(origin),
                particle,
                projectile,
                RepeatingTask::every_tick(),
            ))
            .id();

        cues.write(EffectCue::sound(&config.cast_sound, caster.translation));

        crate::log_info(&format!(
            "Caster {:?} fired {} as {:?} (token {}, lifetime {})",
            message.caster, cast.name, spark, token, cast.lifetime
        ));

        let context = ModifierContext {
            token,
            origin,
            scale: cast.scale,
            lifetime: cast.lifetime,
            config: &config,
        };

        for id in cast.modifiers() {
            match modifiers.get(id) {
                Some(factory) => {
                    let effect = factory(&mut commands, &context);
                    crate::log(&format!("Modifier {} attached to {} as {:?}", id, token, effect));
                }
                None => {
                    crate::log_warning(&format!("Unknown spell modifier {}, skipped", id));
                }
            }
        }
    }
}
