use super::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    /// Enemy fire is part of the contract but nothing spawns it yet
    Enemy,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    /// Center position in arena coordinates
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
    /// Vertical speed per tick; player shots travel up, enemy shots down
    pub speed: f32,
    pub owner: ProjectileOwner,
}

impl Projectile {
    pub fn new(x: f32, y: f32, half_w: f32, half_h: f32, speed: f32, owner: ProjectileOwner) -> Self {
        Self {
            x,
            y,
            half_w,
            half_h,
            speed,
            owner,
        }
    }

    pub fn advance(&mut self) {
        match self.owner {
            ProjectileOwner::Player => self.y -= self.speed,
            ProjectileOwner::Enemy => self.y += self.speed,
        }
    }

    /// A projectile whose center leaves the arena vertically is spent.
    pub fn is_off_screen(&self, arena_height: f32) -> bool {
        self.y < 0.0 || self.y > arena_height
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.half_w, self.half_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_projectile_moves_up() {
        let mut projectile = Projectile::new(100.0, 100.0, 1.5, 5.0, 7.0, ProjectileOwner::Player);
        projectile.advance();
        assert_eq!(projectile.y, 93.0);
    }

    #[test]
    fn test_enemy_projectile_moves_down() {
        let mut projectile = Projectile::new(100.0, 100.0, 1.5, 5.0, 7.0, ProjectileOwner::Enemy);
        projectile.advance();
        assert_eq!(projectile.y, 107.0);
    }

    #[test]
    fn test_projectile_off_screen_top() {
        let projectile = Projectile::new(100.0, -1.0, 1.5, 5.0, 7.0, ProjectileOwner::Player);
        assert!(projectile.is_off_screen(600.0));
    }

    #[test]
    fn test_projectile_off_screen_bottom() {
        let projectile = Projectile::new(100.0, 601.0, 1.5, 5.0, 7.0, ProjectileOwner::Enemy);
        assert!(projectile.is_off_screen(600.0));
    }

    #[test]
    fn test_projectile_in_bounds() {
        let projectile = Projectile::new(100.0, 300.0, 1.5, 5.0, 7.0, ProjectileOwner::Player);
        assert!(!projectile.is_off_screen(600.0));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_projectile_moves_in_owner_direction(
                initial_y in 50f32..550.0,
                owner in prop::sample::select(vec![ProjectileOwner::Player, ProjectileOwner::Enemy])
            ) {
                let mut projectile = Projectile::new(100.0, initial_y, 1.5, 5.0, 7.0, owner);
                projectile.advance();
                match owner {
                    ProjectileOwner::Player => prop_assert!(projectile.y < initial_y),
                    ProjectileOwner::Enemy => prop_assert!(projectile.y > initial_y),
                }
            }
        }
    }
}
