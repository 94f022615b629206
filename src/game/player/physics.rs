// Player velocity integration
//
// Computes the velocity the player wants this tick. Terrain is not
// consulted here; the caller hands the result to a tile collider.

use glam::Vec2;

use super::action::AirModifier;
use super::stats::PlayerStats;
use crate::core::math::approach_zero;

/// Movement flags read and written by the integrator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionFlags {
    pub left: bool,
    pub right: bool,
    /// Jump held and still on the way up
    pub jumping: bool,
    /// Airborne
    pub falling: bool,
}

impl MotionFlags {
    pub fn is_grounded(&self) -> bool {
        !self.jumping && !self.falling
    }
}

/// Outcome of one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integration {
    pub velocity: Vec2,
    pub flags: MotionFlags,
    /// A jump impulse was applied this tick
    pub jumped: bool,
}

/// Advance velocity by one tick
///
/// `rooted` pins the player horizontally while on the ground (an attack is
/// playing); airborne attacks keep their momentum.
pub fn integrate(
    velocity: Vec2,
    mut flags: MotionFlags,
    air: AirModifier,
    rooted: bool,
    stats: &PlayerStats,
) -> Integration {
    let mut dx = velocity.x;
    let mut dy = velocity.y;

    if flags.left {
        dx = (dx - stats.move_speed).max(-stats.max_speed);
    } else if flags.right {
        dx = (dx + stats.move_speed).min(stats.max_speed);
    } else {
        dx = approach_zero(dx, stats.stop_speed);
    }

    if rooted && flags.is_grounded() {
        dx = 0.0;
    }

    let jumped = flags.jumping && !flags.falling;
    if jumped {
        dy = stats.jump_start;
        flags.falling = true;
    }

    if flags.falling {
        if dy > 0.0 && air == AirModifier::Glide {
            dy += stats.fall_speed * stats.glide_gravity_scale;
        } else {
            dy += stats.fall_speed;
        }

        if dy > 0.0 {
            flags.jumping = false;
        }
        if dy < 0.0 && !flags.jumping {
            dy += stats.stop_jump_speed;
        }

        dy = dy.min(stats.max_fall_speed);
    }

    Integration {
        velocity: Vec2::new(dx, dy),
        flags,
        jumped,
    }
}
