// Collision primitives and the terrain resolver contract

mod collision;
mod tile;

pub use collision::{hitbox, overlaps};
pub use tile::{Body, Contact, FlatGround, TileCollider};

// Re-export the box type so callers don't need parry2d directly
pub use parry2d::bounding_volume::Aabb;
