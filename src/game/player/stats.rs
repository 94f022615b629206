// Player tuning constants

use std::time::Duration;

/// Fixed player tuning, chosen at construction and never changed afterwards
///
/// Distances are in world pixels, speeds in pixels per tick. The y axis
/// points down, so a negative vertical speed moves the player up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    // Resources
    pub max_health: i32,
    pub max_fire: i32,
    /// Fire spent per fireball
    pub fire_cost: i32,
    /// Fire regained every tick
    pub fire_regen: i32,

    // Combat
    pub fireball_damage: i32,
    pub scratch_damage: i32,
    /// Horizontal reach of the scratch in front of the player
    pub scratch_range: f32,
    /// Invulnerability window after taking a hit
    pub flinch_duration: Duration,
    /// Visibility toggles every period while flinching
    pub blink_period: Duration,

    // Movement
    pub move_speed: f32,
    pub max_speed: f32,
    /// Horizontal deceleration when no direction is held
    pub stop_speed: f32,
    /// Gravity applied per tick while airborne
    pub fall_speed: f32,
    pub max_fall_speed: f32,
    /// Vertical speed set by a jump
    pub jump_start: f32,
    /// Extra deceleration while rising after the jump button is released
    pub stop_jump_speed: f32,
    /// Fraction of gravity applied when gliding downward
    pub glide_gravity_scale: f32,

    // Dimensions
    pub width: f32,
    pub height: f32,
    pub collision_width: f32,
    pub collision_height: f32,
}

pub const DRAGO_STATS: PlayerStats = PlayerStats {
    max_health: 5,
    max_fire: 2500,
    fire_cost: 200,
    fire_regen: 1,

    fireball_damage: 5,
    scratch_damage: 8,
    scratch_range: 40.0,
    flinch_duration: Duration::from_millis(1000),
    blink_period: Duration::from_millis(100),

    move_speed: 0.3,
    max_speed: 1.6,
    stop_speed: 0.4,
    fall_speed: 0.15,
    max_fall_speed: 4.0,
    jump_start: -4.8,
    stop_jump_speed: 0.3,
    glide_gravity_scale: 0.1,

    width: 30.0,
    height: 30.0,
    collision_width: 20.0,
    collision_height: 20.0,
};

impl Default for PlayerStats {
    fn default() -> Self {
        DRAGO_STATS
    }
}

impl PlayerStats {
    pub fn standard() -> Self {
        DRAGO_STATS
    }
}
