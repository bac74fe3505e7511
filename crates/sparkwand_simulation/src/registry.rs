//! Shared position registry
//!
//! Projectile пишет свою позицию каждый тик, декоративные эффекты только читают.
//! Запись существует, пока жив projectile: отсутствие токена для декорации
//! означает "projectile умер, пора убираться".
//!
//! Доступ идёт через `Res`/`ResMut`, так что scheduler сам гарантирует
//! одного writer'а даже при multi_threaded executor.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

/// Opaque token связывающий projectile и его декорации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct EffectToken(pub u128);

impl EffectToken {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self(rng.gen())
    }
}

impl fmt::Display for EffectToken {
    /// UUID layout (8-4-4-4-12), чтобы совпадать с тем, что видит хост в логах
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = format!("{:032x}", self.0);
        write!(
            f,
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct PositionRegistry {
    entries: HashMap<EffectToken, Vec3>,
}

impl PositionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, token: EffectToken, position: Vec3) {
        self.entries.insert(token, position);
    }

    pub fn get(&self, token: EffectToken) -> Option<Vec3> {
        self.entries.get(&token).copied()
    }

    /// Идемпотентно: повторное удаление просто возвращает false
    pub fn remove(&mut self, token: EffectToken) -> bool {
        self.entries.remove(&token).is_some()
    }

    pub fn contains(&self, token: EffectToken) -> bool {
        self.entries.contains_key(&token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_set_get_overwrite() {
        let mut registry = PositionRegistry::new();
        let token = EffectToken(7);

        assert_eq!(registry.get(token), None);

        registry.set(token, Vec3::new(1.0, 2.0, 3.0));
        registry.set(token, Vec3::new(4.0, 5.0, 6.0));

        assert_eq!(registry.get(token), Some(Vec3::new(4.0, 5.0, 6.0)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = PositionRegistry::new();
        let token = EffectToken(1);
        registry.set(token, Vec3::ZERO);

        assert!(registry.remove(token));
        assert!(!registry.remove(token));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_tokens_do_not_collide() {
        let mut registry = PositionRegistry::new();
        registry.set(EffectToken(1), Vec3::X);
        registry.set(EffectToken(2), Vec3::Y);

        registry.remove(EffectToken(1));

        assert!(!registry.contains(EffectToken(1)));
        assert_eq!(registry.get(EffectToken(2)), Some(Vec3::Y));
    }

    #[test]
    fn test_generated_tokens_are_seeded() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        let first = EffectToken::generate(&mut a);
        assert_eq!(first, EffectToken::generate(&mut b));
        assert_ne!(first, EffectToken::generate(&mut a));
    }

    #[test]
    fn test_display_uuid_layout() {
        let token = EffectToken(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        assert_eq!(token.to_string(), "01234567-89ab-cdef-0123-456789abcdef");
    }
}
