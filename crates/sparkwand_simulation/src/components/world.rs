//! Block world: BlockId, VoxelWorld
//!
//! Хост заливает сюда блоки вокруг игрока (chunk sync), projectile только читает.
//! Неизвестная клетка = воздух.

use bevy::prelude::*;
use std::collections::HashMap;

pub const AIR: &str = "minecraft:air";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn air() -> Self {
        Self::new(AIR)
    }

    pub fn is_air(&self) -> bool {
        self.0 == AIR
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Integer block grid (resource)
#[derive(Resource, Debug, Default, Clone)]
pub struct VoxelWorld {
    blocks: HashMap<IVec3, BlockId>,
}

impl VoxelWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Поставить блок; воздух просто очищает клетку
    pub fn set_block(&mut self, cell: IVec3, block: BlockId) {
        if block.is_air() {
            self.blocks.remove(&cell);
        } else {
            self.blocks.insert(cell, block);
        }
    }

    pub fn block_at(&self, cell: IVec3) -> BlockId {
        self.blocks.get(&cell).cloned().unwrap_or_else(BlockId::air)
    }

    pub fn is_solid(&self, cell: IVec3) -> bool {
        self.blocks.contains_key(&cell)
    }

    /// Клетка, в которой лежит world-точка (floor по каждой оси)
    pub fn cell_at(point: Vec3) -> IVec3 {
        point.floor().as_ivec3()
    }
}
