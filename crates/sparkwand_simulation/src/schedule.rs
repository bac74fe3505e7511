//! Repeating tasks: "run every N ticks until cancelled"
//!
//! Каждый живой эффект (spark, ring) несёт `RepeatingTask`. Тикает его сам
//! эффект в своей системе; отменяет тоже сам (cooperative cancel).
//! `reap_cancelled_tasks` идёт последним в цепочке и освобождает particle
//! (despawn entity) у всех отменённых задач.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct RepeatingTask {
    /// Период в тиках (>= 1)
    interval: u32,
    countdown: u32,
    cancelled: bool,
}

impl Default for RepeatingTask {
    fn default() -> Self {
        Self::every_tick()
    }
}

impl RepeatingTask {
    pub fn every(interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            countdown: interval,
            cancelled: false,
        }
    }

    pub fn every_tick() -> Self {
        Self::every(1)
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Продвинуть таймер на один тик; true = тело задачи выполняется в этом тике
    pub fn tick(&mut self) -> bool {
        if self.cancelled {
            return false;
        }

        self.countdown -= 1;
        if self.countdown == 0 {
            self.countdown = self.interval;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Система: despawn entities с отменёнными задачами (release particle)
pub fn reap_cancelled_tasks(mut commands: Commands, tasks: Query<(Entity, &RepeatingTask)>) {
    for (entity, task) in tasks.iter() {
        if task.is_cancelled() {
            commands.entity(entity).despawn();
            crate::log(&format!("Released effect entity {:?}", entity));
        }
    }
}
