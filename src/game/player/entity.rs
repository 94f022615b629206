// The player entity

use std::fmt;
use std::time::Duration;

use glam::{UVec2, Vec2};
use log::{debug, info, trace};

use super::action::{
    select_action, ActionStateMachine, AirModifier, AttackState, FireStage, PlayerAction,
    SelectionInput,
};
use super::physics::{integrate, MotionFlags};
use super::resources::Resources;
use super::sprites::PlayerSprites;
use super::stats::PlayerStats;
use crate::engine::assets::{AssetError, SoundHandle, TextureHandle};
use crate::engine::audio::AudioSink;
use crate::engine::clock::Clock;
use crate::engine::physics::{hitbox, overlaps, Aabb, Body, TileCollider};
use crate::engine::render::{RenderTarget, SpriteDraw};
use crate::game::animation::Animation;
use crate::game::combat::{Enemy, Facing, Projectile, ProjectileFactory};

/// Decoded input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub glide: bool,
    pub scratch: bool,
    pub fire: bool,
}

/// Pre-loaded assets the player draws and plays
#[derive(Debug, Clone, Copy)]
pub struct PlayerAssets {
    pub sheet: TextureHandle,
    /// Sheet size in pixels
    pub sheet_size: UVec2,
    pub jump_sound: SoundHandle,
    pub scratch_sound: SoundHandle,
}

/// Host capabilities the player calls into
pub struct PlayerServices {
    pub clock: Box<dyn Clock>,
    pub audio: Box<dyn AudioSink>,
    pub launcher: Box<dyn ProjectileFactory>,
}

/// The controllable player
pub struct Player {
    stats: PlayerStats,

    // Motion
    position: Vec2,
    velocity: Vec2,
    /// Current sprite width; grows during a scratch
    width: f32,
    facing: Facing,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    jumping: bool,
    falling: bool,
    air: AirModifier,

    // Combat
    attack: AttackState,
    resources: Resources,
    flinch_started: Option<Duration>,
    fireballs: Vec<Box<dyn Projectile>>,

    // Presentation
    actions: ActionStateMachine,
    animation: Animation,
    sprites: PlayerSprites,
    jump_sound: SoundHandle,
    scratch_sound: SoundHandle,

    clock: Box<dyn Clock>,
    audio: Box<dyn AudioSink>,
    launcher: Box<dyn ProjectileFactory>,
}

impl Player {
    /// Create a player at the origin, idle and facing right
    ///
    /// Fails if the sprite sheet cannot be sliced into every action's frames.
    pub fn new(
        stats: PlayerStats,
        assets: PlayerAssets,
        services: PlayerServices,
    ) -> Result<Self, AssetError> {
        let sprites = PlayerSprites::from_sheet(
            assets.sheet,
            assets.sheet_size.x,
            assets.sheet_size.y,
            stats.width.round() as u32,
            stats.height.round() as u32,
        )?;

        let mut player = Self {
            stats,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            width: stats.width,
            facing: Facing::Right,
            left: false,
            right: false,
            up: false,
            down: false,
            jumping: false,
            falling: false,
            air: AirModifier::None,
            attack: AttackState::Ready,
            resources: Resources::from_stats(&stats),
            flinch_started: None,
            fireballs: Vec::new(),
            actions: ActionStateMachine::new(),
            animation: Animation::new(),
            sprites,
            jump_sound: assets.jump_sound,
            scratch_sound: assets.scratch_sound,
            clock: services.clock,
            audio: services.audio,
            launcher: services.launcher,
        };
        let now = player.clock.now();
        player.enter_action(PlayerAction::Idle, now);

        debug!(
            "Player created: {} health, {} fire",
            player.resources.health(),
            player.resources.fire()
        );
        Ok(player)
    }

    // --- Input ---

    /// Apply this tick's decoded input
    ///
    /// Attack intents only start an attack; releasing them does not cancel
    /// one in progress.
    pub fn set_intents(&mut self, intents: &Intents) {
        self.left = intents.left;
        self.right = intents.right;
        self.up = intents.up;
        self.down = intents.down;
        self.jumping = intents.jump;
        self.set_gliding(intents.glide);
        if intents.scratch {
            self.set_scratching();
        }
        if intents.fire {
            self.set_firing();
        }
    }

    pub fn set_left(&mut self, held: bool) {
        self.left = held;
    }

    pub fn set_right(&mut self, held: bool) {
        self.right = held;
    }

    pub fn set_up(&mut self, held: bool) {
        self.up = held;
    }

    pub fn set_down(&mut self, held: bool) {
        self.down = held;
    }

    pub fn set_jumping(&mut self, held: bool) {
        self.jumping = held;
    }

    pub fn set_gliding(&mut self, held: bool) {
        self.air = if held {
            AirModifier::Glide
        } else {
            AirModifier::None
        };
    }

    /// Start a scratch; a fireball in progress resumes after the swing
    pub fn set_scratching(&mut self) {
        self.attack = self.attack.with_scratch();
    }

    /// Start a fireball, or queue it behind a scratch in progress
    pub fn set_firing(&mut self) {
        self.attack = self.attack.with_fire();
    }

    // --- Tick ---

    /// Advance the player one tick
    pub fn update(&mut self, tiles: &dyn TileCollider) {
        let now = self.clock.now();

        self.apply_motion(tiles);
        self.finish_attack();

        self.resources.regen_fire(self.stats.fire_regen);
        if self.attack == AttackState::Firing(FireStage::Charging) {
            self.launch_fireball();
            self.attack = AttackState::Firing(FireStage::Launched);
        }
        self.update_fireballs(tiles);

        self.expire_flinch(now);

        let next = select_action(&SelectionInput {
            attack: self.attack,
            dy: self.velocity.y,
            air: self.air,
            moving: self.left || self.right,
        });
        if self.actions.transition(next) {
            self.enter_action(next, now);
        }
        self.animation.update(now);

        self.update_facing();
    }

    fn apply_motion(&mut self, tiles: &dyn TileCollider) {
        let flags = MotionFlags {
            left: self.left,
            right: self.right,
            jumping: self.jumping,
            falling: self.falling,
        };
        let rooted = self.actions.state().is_attack();
        let step = integrate(self.velocity, flags, self.air, rooted, &self.stats);

        if step.jumped {
            self.audio.play(self.jump_sound);
        }

        let contact = tiles.resolve(&Body {
            position: self.position,
            velocity: step.velocity,
            collision_size: self.collision_size(),
            falling: step.flags.falling,
        });
        self.position = contact.position;
        self.velocity = contact.velocity;
        self.falling = contact.falling;
        self.jumping = step.flags.jumping;
    }

    /// Release the attack slot once its animation has played through
    fn finish_attack(&mut self) {
        let Some(action) = self.attack.action() else {
            return;
        };
        if self.actions.state() == action && self.animation.has_played_once() {
            trace!("{} finished", action.animation_name());
            self.attack = self.attack.completed();
        }
    }

    fn launch_fireball(&mut self) {
        if !self.resources.try_spend_fire(self.stats.fire_cost) {
            trace!(
                "Not enough fire to launch ({} <= {})",
                self.resources.fire(),
                self.stats.fire_cost
            );
            return;
        }

        let fireball = self.launcher.spawn(self.position, self.facing);
        self.fireballs.push(fireball);
        debug!(
            "Fireball launched {:?} from {:?}, {} fire left",
            self.facing,
            self.position,
            self.resources.fire()
        );
    }

    /// Advance every projectile, then drop the ones that are done
    fn update_fireballs(&mut self, tiles: &dyn TileCollider) {
        for fireball in &mut self.fireballs {
            fireball.update(tiles);
        }
        self.fireballs.retain(|fireball| !fireball.should_remove());
    }

    fn expire_flinch(&mut self, now: Duration) {
        if let Some(started) = self.flinch_started {
            if now.saturating_sub(started) >= self.stats.flinch_duration {
                self.flinch_started = None;
            }
        }
    }

    fn enter_action(&mut self, action: PlayerAction, now: Duration) {
        if action == PlayerAction::Scratching {
            self.audio.play(self.scratch_sound);
        }
        self.animation.set_frames(self.sprites.frames(action), now);
        self.animation.set_delay(action.frame_delay());
        self.width = self.stats.width * action.width_scale();
        debug!("Player action -> {}", action.animation_name());
    }

    /// Attacks lock the facing until they finish
    fn update_facing(&mut self) {
        if self.actions.state().is_attack() {
            return;
        }
        if self.right {
            self.facing = Facing::Right;
        }
        if self.left {
            self.facing = Facing::Left;
        }
    }

    // --- Combat ---

    /// Resolve attacks against the level's enemies
    ///
    /// For each enemy, in order: scratch hitbox, then at most one fireball,
    /// then body contact damage to the player.
    pub fn check_attack<E: Enemy>(&mut self, enemies: &mut [E]) {
        for enemy in enemies.iter_mut() {
            if self.attack.is_scratching() && self.in_scratch_reach(enemy.position()) {
                enemy.hit(self.stats.scratch_damage);
            }

            let target = enemy.collision_box();
            if let Some(fireball) = self
                .fireballs
                .iter_mut()
                .find(|fireball| !fireball.has_hit() && fireball.intersects(&target))
            {
                enemy.hit(self.stats.fireball_damage);
                fireball.set_hit();
            }

            if overlaps(&self.collision_box(), &target) {
                self.hit(enemy.contact_damage());
            }
        }
    }

    fn in_scratch_reach(&self, target: Vec2) -> bool {
        let (x, y) = (self.position.x, self.position.y);
        let half_height = self.stats.height / 2.0;
        let range = self.stats.scratch_range;

        let in_front = match self.facing {
            Facing::Right => target.x > x && target.x < x + range,
            Facing::Left => target.x < x && target.x > x - range,
        };
        in_front && target.y > y - half_height && target.y < y + half_height
    }

    /// Take damage, unless still flinching from the last hit
    pub fn hit(&mut self, damage: i32) {
        if self.is_flinching() {
            trace!("Hit for {} ignored while flinching", damage);
            return;
        }

        self.stop();
        let remaining = self.resources.take_damage(damage);
        self.flinch_started = Some(self.clock.now());

        if remaining == 0 {
            info!("Player died");
        } else {
            debug!("Player hit for {}, {} health left", damage, remaining);
        }
    }

    // --- Lifecycle ---

    /// Release held movement, end flinching and cancel a scratch
    pub fn stop(&mut self) {
        self.left = false;
        self.right = false;
        self.up = false;
        self.down = false;
        self.jumping = false;
        self.flinch_started = None;
        if self.attack.is_scratching() {
            self.attack = self.attack.completed();
        }
    }

    /// Restore the player for a level restart
    pub fn reset(&mut self) {
        self.stop();
        self.resources.restore_health();
        self.facing = Facing::Right;
        self.attack = AttackState::Ready;
        self.air = AirModifier::None;

        let now = self.clock.now();
        self.actions.force(PlayerAction::Idle);
        self.enter_action(PlayerAction::Idle, now);
        info!("Player reset");
    }

    // --- Rendering ---

    /// Visibility of the player sprite; blinks while flinching
    pub fn is_visible(&self) -> bool {
        let Some(started) = self.flinch_started else {
            return true;
        };
        let period = self.stats.blink_period.as_millis().max(1);
        let elapsed = self.clock.now().saturating_sub(started).as_millis();
        (elapsed / period) % 2 == 0
    }

    /// Draw projectiles, then the player on top
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        for fireball in &self.fireballs {
            fireball.draw(target);
        }

        if !self.is_visible() {
            return;
        }
        let Some(region) = self.animation.frame_region() else {
            return;
        };
        target.draw_sprite(SpriteDraw {
            texture: self.sprites.sheet(),
            region,
            position: self.position,
            size: Vec2::new(self.width, self.stats.height),
            flip_horizontal: self.facing == Facing::Left,
        });
    }

    // --- Accessors ---

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.stats.height
    }

    pub fn collision_size(&self) -> Vec2 {
        Vec2::new(self.stats.collision_width, self.stats.collision_height)
    }

    pub fn collision_box(&self) -> Aabb {
        hitbox(self.position, self.collision_size())
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn facing_right(&self) -> bool {
        self.facing.is_right()
    }

    pub fn current_action(&self) -> PlayerAction {
        self.actions.state()
    }

    pub fn attack_state(&self) -> AttackState {
        self.attack
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn is_holding_up(&self) -> bool {
        self.up
    }

    pub fn is_holding_down(&self) -> bool {
        self.down
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn is_falling(&self) -> bool {
        self.falling
    }

    pub fn is_gliding(&self) -> bool {
        self.air == AirModifier::Glide
    }

    pub fn is_flinching(&self) -> bool {
        self.flinch_started.is_some()
    }

    pub fn health(&self) -> i32 {
        self.resources.health()
    }

    pub fn max_health(&self) -> i32 {
        self.resources.max_health()
    }

    /// Set health directly (clamped); zero health means dead
    pub fn set_health(&mut self, health: i32) {
        self.resources.set_health(health);
    }

    pub fn fire(&self) -> i32 {
        self.resources.fire()
    }

    pub fn max_fire(&self) -> i32 {
        self.resources.max_fire()
    }

    pub fn is_dead(&self) -> bool {
        self.resources.is_depleted()
    }

    pub fn fireballs(&self) -> &[Box<dyn Projectile>] {
        &self.fireballs
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("facing", &self.facing)
            .field("action", &self.actions.state())
            .field("attack", &self.attack)
            .field("health", &self.resources.health())
            .field("fire", &self.resources.fire())
            .field("flinching", &self.is_flinching())
            .field("fireballs", &self.fireballs.len())
            .finish_non_exhaustive()
    }
}
