// Gameplay: the player, its projectiles and the combat contracts

pub mod animation;
pub mod combat;
pub mod fireball;
pub mod player;

pub use animation::Animation;
pub use combat::{Enemy, Facing, Projectile, ProjectileFactory};
pub use fireball::{Fireball, FireballLauncher, FireballSprites};
pub use player::{Intents, Player, PlayerAction, PlayerAssets, PlayerServices, PlayerStats};
