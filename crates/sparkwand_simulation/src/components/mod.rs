//! ECS Components для мира вокруг заклинания
//!
//! Организация по доменам:
//! - actor: кто может получить попадание (Player, Hurtbox)
//! - particle: визуальная частица для хоста (Particle)
//! - world: блоки (BlockId, VoxelWorld)

pub mod actor;
pub mod particle;
pub mod world;

pub use actor::*;
pub use particle::*;
pub use world::*;
