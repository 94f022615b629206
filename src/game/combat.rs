// Contracts between the player and the actors it fights

use glam::Vec2;

use crate::engine::physics::{Aabb, TileCollider};
use crate::engine::render::RenderTarget;

/// Horizontal facing of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1 for right, -1 for left
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn is_right(self) -> bool {
        self == Self::Right
    }
}

/// Hostile actor the player can damage and be damaged by
///
/// Enemies are owned by the level; the player only reads their geometry and
/// reports damage through [`Enemy::hit`].
pub trait Enemy {
    /// Centre of the enemy
    fn position(&self) -> Vec2;
    fn collision_box(&self) -> Aabb;
    /// Damage dealt to the player on body contact
    fn contact_damage(&self) -> i32;
    fn hit(&mut self, damage: i32);
}

/// Ranged attack owned by the actor that fired it
pub trait Projectile {
    /// Advance one tick
    fn update(&mut self, tiles: &dyn TileCollider);
    /// True once the projectile should be dropped by its owner
    fn should_remove(&self) -> bool;
    fn intersects(&self, target: &Aabb) -> bool;
    /// Mark the projectile as spent after it damaged something
    fn set_hit(&mut self);
    fn has_hit(&self) -> bool;
    fn draw(&self, target: &mut dyn RenderTarget);
}

/// Creates projectiles when an actor fires
pub trait ProjectileFactory {
    fn spawn(&mut self, origin: Vec2, facing: Facing) -> Box<dyn Projectile>;
}
