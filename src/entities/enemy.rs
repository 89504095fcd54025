use super::Bounds;

#[derive(Debug, Clone)]
pub struct Enemy {
    /// Center position in arena coordinates
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
    /// Dead enemies stay in the collection until the next reset but never
    /// move, collide, or render
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            x,
            y,
            half_w,
            half_h,
            alive: true,
        }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.half_w, self.half_h)
    }
}
