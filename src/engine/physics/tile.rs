use glam::Vec2;

/// Motion proposed by an entity for this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Centre position before moving
    pub position: Vec2,
    /// Velocity to apply this tick
    pub velocity: Vec2,
    /// Full size of the collision box
    pub collision_size: Vec2,
    pub falling: bool,
}

impl Body {
    /// Where the body would end up with no terrain in the way
    pub fn tentative_position(&self) -> Vec2 {
        self.position + self.velocity
    }
}

/// Terrain-corrected motion, committed by the entity as-is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub position: Vec2,
    pub velocity: Vec2,
    pub falling: bool,
}

/// Terrain collision resolver
///
/// Implemented by the tile map. Receives the tentative move and returns the
/// position the body may actually occupy, zeroing blocked velocity axes and
/// reporting whether the body is unsupported.
pub trait TileCollider {
    fn resolve(&self, body: &Body) -> Contact;
}

/// Level made of a single floor line with optional side walls
///
/// Screen coordinates: y grows downward, so the floor is the largest y a
/// body's feet can reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    pub floor_y: f32,
    /// Inner faces of the left and right walls
    pub walls: Option<(f32, f32)>,
}

impl FlatGround {
    pub fn new(floor_y: f32) -> Self {
        Self {
            floor_y,
            walls: None,
        }
    }

    pub fn with_walls(mut self, left: f32, right: f32) -> Self {
        self.walls = Some((left, right));
        self
    }

    /// Centre y of a body of height `height` standing on the floor
    pub fn standing_y(&self, height: f32) -> f32 {
        self.floor_y - height * 0.5
    }
}

impl TileCollider for FlatGround {
    fn resolve(&self, body: &Body) -> Contact {
        let half = body.collision_size * 0.5;
        let mut position = body.tentative_position();
        let mut velocity = body.velocity;

        if let Some((left, right)) = self.walls {
            if position.x - half.x < left {
                position.x = left + half.x;
                velocity.x = 0.0;
            } else if position.x + half.x > right {
                position.x = right - half.x;
                velocity.x = 0.0;
            }
        }

        let feet = position.y + half.y;
        let falling = if velocity.y >= 0.0 && feet >= self.floor_y {
            position.y = self.floor_y - half.y;
            velocity.y = 0.0;
            false
        } else {
            feet < self.floor_y || body.falling
        };

        Contact {
            position,
            velocity,
            falling,
        }
    }
}
