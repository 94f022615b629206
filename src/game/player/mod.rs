// Player entity
//
// This module contains everything the controllable character needs:
// - Tuning constants
// - Health and fire pools
// - Velocity integration (run, jump, glide, fall)
// - Ordered action selection and its animation timing
// - Sprite sheet slicing
// - The entity itself: per-tick update, combat and drawing

pub mod action;
pub mod entity;
pub mod physics;
pub mod resources;
pub mod sprites;
pub mod stats;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use action::{
    select_action, ActionStateMachine, AirModifier, AttackState, FireStage, PlayerAction,
    SelectionInput, TransitionRule, TRANSITION_RULES,
};
pub use entity::{Intents, Player, PlayerAssets, PlayerServices};
pub use physics::{integrate, Integration, MotionFlags};
pub use resources::Resources;
pub use sprites::PlayerSprites;
pub use stats::{PlayerStats, DRAGO_STATS};
