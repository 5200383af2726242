use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Overlap test; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Playfield bounds. Only the vertical extent matters: pipes leave on the
/// left and the bird never moves horizontally.
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub height: f32,
}

impl GameMap {
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    /// Ceiling at y <= 0, floor once the box bottom reaches the screen bottom
    pub fn hits_ceiling(&self, rect: &Aabb) -> bool {
        rect.min.y <= 0.0
    }

    pub fn hits_floor(&self, rect: &Aabb) -> bool {
        rect.max.y >= self.height
    }
}

impl From<&crate::Config> for GameMap {
    fn from(config: &crate::Config) -> Self {
        Self::new(config.screen_height)
    }
}
