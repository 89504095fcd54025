/// The three logical inputs the simulation understands. The loop driver maps
/// terminal key events onto these; anything else never reaches the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Left,
    Right,
    Fire,
}

/// Tracks pressed/released state for the fixed key set and latches fire
/// requests on the press edge, so holding the fire key yields at most one
/// request until it is released and pressed again.
#[derive(Debug, Default)]
pub struct InputSampler {
    left: bool,
    right: bool,
    fire_held: bool,
    fire_requested: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release of one logical key.
    pub fn set_key(&mut self, key: InputKey, pressed: bool) {
        match key {
            InputKey::Left => self.left = pressed,
            InputKey::Right => self.right = pressed,
            InputKey::Fire => {
                if pressed && !self.fire_held {
                    self.fire_requested = true;
                }
                self.fire_held = pressed;
            }
        }
    }

    pub fn left(&self) -> bool {
        self.left
    }

    pub fn right(&self) -> bool {
        self.right
    }

    /// Consume the pending fire request, if any. Called once per tick.
    pub fn take_fire_request(&mut self) -> bool {
        std::mem::take(&mut self.fire_requested)
    }
}
