//! Player entity core for a 2D side-scrolling platformer.
//!
//! The host game owns the window, the tile map, enemies and the frame loop.
//! Once per tick it feeds decoded input into [`game::Player`], calls
//! [`game::Player::update`] with its tile collider, then
//! [`game::Player::check_attack`] with the live enemies, and finally
//! [`game::Player::draw`].

pub mod core;
pub mod engine;
pub mod game;
