// Fakes for exercising a Player without a real game around it

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use glam::{UVec2, Vec2};

use super::entity::{Player, PlayerAssets, PlayerServices};
use super::stats::PlayerStats;
use crate::engine::assets::{AssetHandle, SoundHandle};
use crate::engine::audio::AudioSink;
use crate::engine::clock::ManualClock;
use crate::engine::physics::{hitbox, Aabb, FlatGround, TileCollider};
use crate::engine::render::{RenderTarget, SpriteDraw, TextureRegion};
use crate::game::combat::{Enemy, Facing, Projectile, ProjectileFactory};

/// Simulated frame time
pub const TICK: Duration = Duration::from_millis(16);
pub const FLOOR_Y: f32 = 200.0;
pub const START_X: f32 = 100.0;

pub fn jump_sound() -> SoundHandle {
    AssetHandle::from_path("sfx/jump.wav")
}

pub fn scratch_sound() -> SoundHandle {
    AssetHandle::from_path("sfx/scratch.wav")
}

pub fn assets() -> PlayerAssets {
    PlayerAssets {
        sheet: AssetHandle::from_path("sprites/player/playersprites.gif"),
        sheet_size: UVec2::new(300, 210),
        jump_sound: jump_sound(),
        scratch_sound: scratch_sound(),
    }
}

/// Audio sink that remembers what it was asked to play
pub struct RecordingAudio {
    played: Rc<RefCell<Vec<SoundHandle>>>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: SoundHandle) {
        self.played.borrow_mut().push(sound);
    }
}

/// Externally controlled projectile state
#[derive(Debug, Default)]
pub struct ProbeState {
    pub origin: Vec2,
    pub facing: Facing,
    pub updates: u32,
    /// Reported by `should_remove`
    pub expired: bool,
    pub hit: bool,
    /// Reported by `intersects`, for any target
    pub reach: bool,
}

pub type Probe = Rc<RefCell<ProbeState>>;

struct ProbeProjectile(Probe);

impl Projectile for ProbeProjectile {
    fn update(&mut self, _tiles: &dyn TileCollider) {
        self.0.borrow_mut().updates += 1;
    }

    fn should_remove(&self) -> bool {
        self.0.borrow().expired
    }

    fn intersects(&self, _target: &Aabb) -> bool {
        self.0.borrow().reach
    }

    fn set_hit(&mut self) {
        self.0.borrow_mut().hit = true;
    }

    fn has_hit(&self) -> bool {
        self.0.borrow().hit
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.draw_sprite(SpriteDraw {
            texture: AssetHandle::from_path("probe"),
            region: TextureRegion {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            },
            position: self.0.borrow().origin,
            size: Vec2::ONE,
            flip_horizontal: false,
        });
    }
}

struct ProbeLauncher {
    spawned: Rc<RefCell<Vec<Probe>>>,
}

impl ProjectileFactory for ProbeLauncher {
    fn spawn(&mut self, origin: Vec2, facing: Facing) -> Box<dyn Projectile> {
        let probe = Rc::new(RefCell::new(ProbeState {
            origin,
            facing,
            ..ProbeState::default()
        }));
        self.spawned.borrow_mut().push(Rc::clone(&probe));
        Box::new(ProbeProjectile(probe))
    }
}

/// Enemy that records the damage it receives
#[derive(Debug, Clone)]
pub struct TestEnemy {
    pub position: Vec2,
    pub size: Vec2,
    pub damage: i32,
    pub hits: Vec<i32>,
}

impl TestEnemy {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(20.0, 20.0),
            damage: 1,
            hits: Vec::new(),
        }
    }

    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }
}

impl Enemy for TestEnemy {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn collision_box(&self) -> Aabb {
        hitbox(self.position, self.size)
    }

    fn contact_damage(&self) -> i32 {
        self.damage
    }

    fn hit(&mut self, damage: i32) {
        self.hits.push(damage);
    }
}

/// A player standing on flat ground, driven by a manual clock
pub struct Harness {
    pub player: Player,
    pub clock: ManualClock,
    pub ground: FlatGround,
    pub sounds: Rc<RefCell<Vec<SoundHandle>>>,
    pub spawned: Rc<RefCell<Vec<Probe>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_stats(PlayerStats::standard())
    }

    pub fn with_stats(stats: PlayerStats) -> Self {
        let clock = ManualClock::new();
        let sounds = Rc::new(RefCell::new(Vec::new()));
        let spawned = Rc::new(RefCell::new(Vec::new()));
        let ground = FlatGround::new(FLOOR_Y);

        let services = PlayerServices {
            clock: Box::new(clock.clone()),
            audio: Box::new(RecordingAudio {
                played: Rc::clone(&sounds),
            }),
            launcher: Box::new(ProbeLauncher {
                spawned: Rc::clone(&spawned),
            }),
        };
        let mut player = Player::new(stats, assets(), services).expect("test sheet is valid");
        player.set_position(Vec2::new(
            START_X,
            ground.standing_y(stats.collision_height),
        ));

        Self {
            player,
            clock,
            ground,
            sounds,
            spawned,
        }
    }

    pub fn tick(&mut self) {
        self.clock.advance(TICK);
        self.player.update(&self.ground);
    }

    pub fn ticks(&mut self, count: usize) {
        for _ in 0..count {
            self.tick();
        }
    }

    /// Tick until `done` holds; false if it never did within `max` ticks
    pub fn tick_until(&mut self, max: usize, done: impl Fn(&Player) -> bool) -> bool {
        for _ in 0..max {
            self.tick();
            if done(&self.player) {
                return true;
            }
        }
        false
    }

    pub fn times_played(&self, sound: SoundHandle) -> usize {
        self.sounds.borrow().iter().filter(|s| **s == sound).count()
    }

    pub fn probe(&self, index: usize) -> Probe {
        Rc::clone(&self.spawned.borrow()[index])
    }

    pub fn spawn_count(&self) -> usize {
        self.spawned.borrow().len()
    }
}
