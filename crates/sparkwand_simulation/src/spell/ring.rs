//! Energy ring: частица, бегающая по кольцу вокруг spark'а
//!
//! Декорация только читает registry: позиция spark'а → центр кольца.
//! Как только токен пропал (spark умер), декорация отменяет свою задачу,
//! а reaper освобождает частицу.

use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::registry::{EffectToken, PositionRegistry};
use crate::schedule::RepeatingTask;

/// Offsets точек кольца в горизонтальной плоскости (XZ), старт на +X
pub fn ring_offsets(radius: f32, points: usize, phase: f32) -> Vec<Vec3> {
    (0..points)
        .map(|i| {
            let angle = phase + TAU * i as f32 / points as f32;
            Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect()
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct RingDecoration {
    pub token: EffectToken,
    pub scale: f32,
    pub lifetime: u32,
    /// Индекс следующей точки (0..offsets.len())
    pub rotation: usize,
    offsets: Vec<Vec3>,
}

impl RingDecoration {
    pub fn new(token: EffectToken, scale: f32, lifetime: u32, radius: f32, points: usize) -> Self {
        Self {
            token,
            scale,
            lifetime,
            rotation: 0,
            offsets: ring_offsets(radius, points.max(1), 0.0),
        }
    }

    pub fn offsets(&self) -> &[Vec3] {
        &self.offsets
    }

    /// Следующая точка кольца вокруг `center`; счётчик идёт по модулю числа точек
    pub fn advance(&mut self, center: Vec3) -> Vec3 {
        let point = center + self.offsets[self.rotation];
        self.rotation = (self.rotation + 1) % self.offsets.len();
        point
    }
}

/// Система: двигать кольца вслед за spark'ами
///
/// Должна идти после `advance_projectiles`: тогда кольцо умирает
/// в тот же тик, что и spark.
pub fn advance_ring_decorations(
    mut rings: Query<(Entity, &mut Transform, &mut RingDecoration, &mut RepeatingTask)>,
    registry: Res<PositionRegistry>,
) {
    for (entity, mut transform, mut ring, mut task) in rings.iter_mut() {
        if !task.tick() {
            continue;
        }

        let Some(center) = registry.get(ring.token) else {
            task.cancel();
            crate::log(&format!("Ring {:?} lost spark {}, releasing", entity, ring.token));
            continue;
        };

        transform.translation = ring.advance(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_on_radius() {
        let offsets = ring_offsets(2.0, 16, 0.0);
        assert_eq!(offsets.len(), 16);

        for offset in &offsets {
            assert!((offset.length() - 2.0).abs() < 1e-5);
            assert_eq!(offset.y, 0.0);
        }

        assert!((offsets[0] - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
        assert!((offsets[4] - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_offsets_are_distinct() {
        let offsets = ring_offsets(2.0, 16, 0.0);
        for (i, a) in offsets.iter().enumerate() {
            for b in offsets.iter().skip(i + 1) {
                assert!(a.distance(*b) > 0.1);
            }
        }
    }

    #[test]
    fn test_advance_wraps_after_full_turn() {
        let mut ring = RingDecoration::new(EffectToken(1), 1.0, 20, 2.0, 16);
        let center = Vec3::new(10.0, 5.0, -3.0);

        let first = ring.advance(center);
        for _ in 1..16 {
            ring.advance(center);
        }
        assert_eq!(ring.rotation, 0);
        assert_eq!(ring.advance(center), first);
    }

    #[test]
    fn test_advance_follows_moving_center() {
        let mut ring = RingDecoration::new(EffectToken(1), 1.0, 20, 2.0, 16);

        for step in 0..40 {
            let center = Vec3::new(step as f32, 0.5 * step as f32, 0.0);
            let point = ring.advance(center);
            assert!((point.distance(center) - 2.0).abs() < 1e-4);
        }
    }
}
