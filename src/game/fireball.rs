// Default fireball projectile

use glam::Vec2;

use super::combat::{Facing, Projectile, ProjectileFactory};
use crate::engine::assets::TextureHandle;
use crate::engine::physics::{hitbox, overlaps, Aabb, Body, TileCollider};
use crate::engine::render::{RenderTarget, SpriteDraw, TextureRegion};

/// Horizontal speed in units per tick
pub const FIREBALL_SPEED: f32 = 3.8;
/// Drawn size
pub const FIREBALL_SIZE: Vec2 = Vec2::new(30.0, 30.0);
/// Size used for hit tests and terrain
pub const FIREBALL_COLLISION_SIZE: Vec2 = Vec2::new(14.0, 14.0);
/// Ticks a fireball flies before it burns out
pub const FIREBALL_LIFETIME: u32 = 180;
/// Ticks the impact sprite stays up after a hit
pub const FIREBALL_IMPACT_TICKS: u32 = 9;

/// Fireball that flies straight until it hits something
#[derive(Debug, Clone)]
pub struct Fireball {
    position: Vec2,
    velocity: Vec2,
    facing: Facing,
    age: u32,
    /// Ticks since impact; `Some` once the fireball is spent
    impact: Option<u32>,
    remove: bool,
    texture: TextureHandle,
    flying: TextureRegion,
    burst: TextureRegion,
}

impl Fireball {
    pub fn new(origin: Vec2, facing: Facing, sprites: &FireballSprites) -> Self {
        Self {
            position: origin,
            velocity: Vec2::new(FIREBALL_SPEED * facing.sign(), 0.0),
            facing,
            age: 0,
            impact: None,
            remove: false,
            texture: sprites.texture,
            flying: sprites.flying,
            burst: sprites.burst,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    fn collision_box(&self) -> Aabb {
        hitbox(self.position, FIREBALL_COLLISION_SIZE)
    }
}

impl Projectile for Fireball {
    fn update(&mut self, tiles: &dyn TileCollider) {
        if let Some(ticks) = self.impact.as_mut() {
            *ticks += 1;
            if *ticks >= FIREBALL_IMPACT_TICKS {
                self.remove = true;
            }
            return;
        }

        let contact = tiles.resolve(&Body {
            position: self.position,
            velocity: self.velocity,
            collision_size: FIREBALL_COLLISION_SIZE,
            falling: false,
        });
        self.position = contact.position;

        // Stopped by a wall
        if contact.velocity.x == 0.0 {
            self.set_hit();
            return;
        }

        self.age += 1;
        if self.age >= FIREBALL_LIFETIME {
            self.remove = true;
        }
    }

    fn should_remove(&self) -> bool {
        self.remove
    }

    fn intersects(&self, target: &Aabb) -> bool {
        overlaps(&self.collision_box(), target)
    }

    fn set_hit(&mut self) {
        if self.impact.is_none() {
            self.impact = Some(0);
            self.velocity = Vec2::ZERO;
        }
    }

    fn has_hit(&self) -> bool {
        self.impact.is_some()
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        let region = if self.has_hit() {
            self.burst
        } else {
            self.flying
        };
        target.draw_sprite(SpriteDraw {
            texture: self.texture,
            region,
            position: self.position,
            size: FIREBALL_SIZE,
            flip_horizontal: self.facing == Facing::Left,
        });
    }
}

/// Sprite regions for a fireball
#[derive(Debug, Clone, Copy)]
pub struct FireballSprites {
    pub texture: TextureHandle,
    pub flying: TextureRegion,
    pub burst: TextureRegion,
}

/// Spawns [`Fireball`]s
#[derive(Debug, Clone, Copy)]
pub struct FireballLauncher {
    sprites: FireballSprites,
}

impl FireballLauncher {
    pub fn new(sprites: FireballSprites) -> Self {
        Self { sprites }
    }
}

impl ProjectileFactory for FireballLauncher {
    fn spawn(&mut self, origin: Vec2, facing: Facing) -> Box<dyn Projectile> {
        Box::new(Fireball::new(origin, facing, &self.sprites))
    }
}
