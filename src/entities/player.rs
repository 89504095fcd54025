use super::Bounds;

#[derive(Debug, Clone)]
pub struct Player {
    /// Center position in arena coordinates
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
    /// Horizontal speed per tick while a direction key is held
    pub speed: f32,
    /// Current horizontal velocity, derived from input each tick
    pub dx: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, half_w: f32, half_h: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            half_w,
            half_h,
            speed,
            dx: 0.0,
        }
    }

    /// Derive horizontal velocity from the held direction keys. Both held or
    /// neither held means no movement.
    pub fn steer(&mut self, left: bool, right: bool) {
        self.dx = match (left, right) {
            (true, false) => -self.speed,
            (false, true) => self.speed,
            _ => 0.0,
        };
    }

    /// Apply the current velocity and clamp the center so the ship never
    /// leaves [half_w, arena_width - half_w].
    pub fn integrate(&mut self, arena_width: f32) {
        self.x = (self.x + self.dx).clamp(self.half_w, arena_width - self.half_w);
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.half_w, self.half_h)
    }
}
