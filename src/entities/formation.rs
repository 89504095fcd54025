use super::Enemy;

/// Collective movement state for the enemy grid: one shared horizontal
/// direction and speed, plus the fixed distance the grid steps down when it
/// reaches an arena edge.
#[derive(Debug, Clone)]
pub struct Formation {
    /// Horizontal direction, +1.0 right or -1.0 left
    pub direction: f32,
    pub speed: f32,
    pub drop_distance: f32,
}

impl Formation {
    pub fn new(speed: f32, drop_distance: f32) -> Self {
        Self {
            direction: 1.0, // Start moving right
            speed,
            drop_distance,
        }
    }

    /// Advance every living enemy horizontally by one tick. If any living
    /// enemy's leading edge passed the arena boundary in the travel
    /// direction, step the whole formation down in the same tick and flip
    /// direction for subsequent ticks. Dead enemies neither move nor count
    /// for edge detection.
    pub fn advance(&mut self, enemies: &mut [Enemy], arena_width: f32) {
        let mut hit_edge = false;

        for enemy in enemies.iter_mut().filter(|e| e.alive) {
            enemy.x += self.speed * self.direction;

            if (self.direction > 0.0 && enemy.bounds().right() > arena_width)
                || (self.direction < 0.0 && enemy.bounds().left() < 0.0)
            {
                hit_edge = true;
            }
        }

        if hit_edge {
            self.direction = -self.direction;
            for enemy in enemies.iter_mut().filter(|e| e.alive) {
                enemy.y += self.drop_distance;
            }
        }
    }
}
