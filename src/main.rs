use std::time::Duration;

use anyhow::Result;
use glam::{UVec2, Vec2};
use log::{debug, info};

use drago::engine::assets::{AssetHandle, SoundHandle};
use drago::engine::audio::{AudioSink, SilentAudio};
use drago::engine::clock::ManualClock;
use drago::engine::physics::{hitbox, Aabb, FlatGround};
use drago::engine::render::{DrawList, TextureRegion};
use drago::game::{
    Enemy, FireballLauncher, FireballSprites, Intents, Player, PlayerAssets, PlayerServices,
    PlayerStats,
};

/// Simulation rate (60 updates per second)
const FIXED_TIMESTEP: Duration = Duration::from_micros(16_667);
const SESSION_TICKS: u32 = 480;
const FLOOR_Y: f32 = 220.0;

/// Audio sink for headless runs
struct LoggingAudio;

impl AudioSink for LoggingAudio {
    fn play(&mut self, sound: SoundHandle) {
        debug!("Playing sound {:#018x}", sound.id().as_u64());
    }
}

/// Stationary enemy that soaks up damage
struct TrainingDummy {
    position: Vec2,
    health: i32,
}

impl Enemy for TrainingDummy {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn collision_box(&self) -> Aabb {
        hitbox(self.position, Vec2::new(20.0, 20.0))
    }

    fn contact_damage(&self) -> i32 {
        1
    }

    fn hit(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
        info!("Dummy hit for {}, {} health left", damage, self.health);
    }
}

/// Scripted input: walk, jump and glide, throw a fireball, then close in
/// for a scratch
fn script(tick: u32) -> Intents {
    let walk_right = Intents {
        right: true,
        ..Intents::default()
    };
    match tick {
        0..=59 => walk_right,
        60..=75 => Intents {
            jump: true,
            ..walk_right
        },
        76..=140 => Intents {
            glide: true,
            ..Intents::default()
        },
        150 => Intents {
            fire: true,
            ..Intents::default()
        },
        200..=240 => walk_right,
        250 => Intents {
            scratch: true,
            ..Intents::default()
        },
        _ => Intents::default(),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting headless player session...");

    // `--mute` drops sound cues instead of logging them
    let audio: Box<dyn AudioSink> = if std::env::args().any(|arg| arg == "--mute") {
        Box::new(SilentAudio)
    } else {
        Box::new(LoggingAudio)
    };

    let clock = ManualClock::new();
    let ground = FlatGround::new(FLOOR_Y).with_walls(0.0, 640.0);

    let fireball_region = TextureRegion {
        x: 0,
        y: 0,
        width: 30,
        height: 30,
    };
    let services = PlayerServices {
        clock: Box::new(clock.clone()),
        audio,
        launcher: Box::new(FireballLauncher::new(FireballSprites {
            texture: AssetHandle::from_path("sprites/player/fireball.gif"),
            flying: fireball_region,
            burst: TextureRegion {
                y: 30,
                ..fireball_region
            },
        })),
    };
    let assets = PlayerAssets {
        sheet: AssetHandle::from_path("sprites/player/playersprites.gif"),
        sheet_size: UVec2::new(300, 210),
        jump_sound: AssetHandle::from_path("sfx/jump.wav"),
        scratch_sound: AssetHandle::from_path("sfx/scratch.wav"),
    };

    let stats = PlayerStats::standard();
    let mut player = Player::new(stats, assets, services)?;
    player.set_position(Vec2::new(100.0, ground.standing_y(stats.collision_height)));

    let mut enemies = vec![TrainingDummy {
        position: Vec2::new(300.0, ground.standing_y(20.0)),
        health: 20,
    }];
    let mut frame = DrawList::new();

    for tick in 0..SESSION_TICKS {
        player.set_intents(&script(tick));
        clock.advance(FIXED_TIMESTEP);
        player.update(&ground);
        player.check_attack(&mut enemies);
        enemies.retain(|enemy| enemy.health > 0);

        frame.clear();
        player.draw(&mut frame);

        if tick % 30 == 0 {
            info!(
                "tick {:>3}: {:?} at ({:.1}, {:.1}) health {} fire {} fireballs {} sprites {}",
                tick,
                player.current_action(),
                player.position().x,
                player.position().y,
                player.health(),
                player.fire(),
                player.fireballs().len(),
                frame.len()
            );
        }
    }

    info!(
        "Session over: {} health, {} enemies left",
        player.health(),
        enemies.len()
    );
    Ok(())
}
