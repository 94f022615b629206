use glam::Vec2;
use parry2d::bounding_volume::Aabb;
use parry2d::math::{Point, Vector};

/// Axis-aligned box centred on `center` with full extents `size`
pub fn hitbox(center: Vec2, size: Vec2) -> Aabb {
    Aabb::from_half_extents(
        Point::new(center.x, center.y),
        Vector::new(size.x * 0.5, size.y * 0.5),
    )
}

/// Check whether two boxes overlap
///
/// Boxes that only share an edge do not overlap.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.mins.x < b.maxs.x && b.mins.x < a.maxs.x && a.mins.y < b.maxs.y && b.mins.y < a.maxs.y
}
