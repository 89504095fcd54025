mod enemy;
mod formation;
mod game_state;
mod player;
mod projectile;

// Re-export all public types
pub use enemy::Enemy;
pub use formation::Formation;
pub use game_state::GameState;
pub use player::Player;
pub use projectile::{Projectile, ProjectileOwner};

/// Axis-aligned bounding box in arena coordinates, stored as a center point
/// plus half extents. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, half_w: f32, half_h: f32) -> Self {
        Self { x, y, half_w, half_h }
    }

    pub fn left(&self) -> f32 {
        self.x - self.half_w
    }

    pub fn right(&self) -> f32 {
        self.x + self.half_w
    }

    pub fn top(&self) -> f32 {
        self.y - self.half_h
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.half_h
    }

    pub fn width(&self) -> f32 {
        self.half_w * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_h * 2.0
    }

    /// Strict point containment: a point sitting exactly on an edge is
    /// outside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px > self.left() && px < self.right() && py > self.top() && py < self.bottom()
    }
}
