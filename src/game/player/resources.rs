// Health and fire pools

use super::stats::PlayerStats;
use crate::core::math::clamp;

/// Health and fire, each clamped to `[0, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resources {
    health: i32,
    max_health: i32,
    fire: i32,
    max_fire: i32,
}

impl Resources {
    /// Full pools
    pub fn new(max_health: i32, max_fire: i32) -> Self {
        let max_health = max_health.max(0);
        let max_fire = max_fire.max(0);
        Self {
            health: max_health,
            max_health,
            fire: max_fire,
            max_fire,
        }
    }

    pub fn from_stats(stats: &PlayerStats) -> Self {
        Self::new(stats.max_health, stats.max_fire)
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn fire(&self) -> i32 {
        self.fire
    }

    pub fn max_fire(&self) -> i32 {
        self.max_fire
    }

    /// Health has run out
    pub fn is_depleted(&self) -> bool {
        self.health == 0
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = clamp(health, 0, self.max_health);
    }

    pub fn restore_health(&mut self) {
        self.health = self.max_health;
    }

    /// Subtract damage and return the health left
    pub fn take_damage(&mut self, damage: i32) -> i32 {
        self.set_health(self.health.saturating_sub(damage));
        self.health
    }

    /// Passive per-tick regeneration
    pub fn regen_fire(&mut self, amount: i32) {
        self.fire = clamp(self.fire.saturating_add(amount), 0, self.max_fire);
    }

    /// Spend `cost` fire if strictly more than `cost` is available
    pub fn try_spend_fire(&mut self, cost: i32) -> bool {
        if self.fire > cost {
            self.fire = clamp(self.fire - cost, 0, self.max_fire);
            true
        } else {
            false
        }
    }
}
