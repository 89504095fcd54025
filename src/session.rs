//! The owned session aggregate: configuration, entity collections, score,
//! and the per-tick `advance` step that drives the whole simulation.

use color_eyre::Result;
use color_eyre::eyre::ensure;

use crate::collision;
use crate::entities::{Bounds, Enemy, Formation, GameState, Player, Projectile, ProjectileOwner};
use crate::input::{InputKey, InputSampler};

/// Arena layout and kinematics, in abstract arena units. Defaults match the
/// classic 800x600 layout.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub enemy_rows: u16,
    pub enemy_cols: u16,
    pub enemy_size: f32,
    pub enemy_padding: f32,
    pub enemy_offset_left: f32,
    pub enemy_offset_top: f32,
    pub enemy_speed: f32,
    pub enemy_drop_distance: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    /// Distance from the arena floor to the player's center
    pub player_offset_bottom: f32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            enemy_rows: 4,
            enemy_cols: 8,
            enemy_size: 30.0,
            enemy_padding: 20.0,
            enemy_offset_left: 60.0,
            enemy_offset_top: 50.0,
            enemy_speed: 1.0,
            enemy_drop_distance: 20.0,
            player_width: 50.0,
            player_height: 30.0,
            player_speed: 5.0,
            player_offset_bottom: 50.0,
            projectile_width: 3.0,
            projectile_height: 10.0,
            projectile_speed: 7.0,
        }
    }
}

impl SessionConfig {
    /// Reject malformed configurations up front; the simulation itself has
    /// no runtime error paths.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.arena_width > 0.0 && self.arena_height > 0.0,
            "arena dimensions must be positive, got {}x{}",
            self.arena_width,
            self.arena_height
        );
        ensure!(
            self.enemy_rows > 0 && self.enemy_cols > 0,
            "enemy grid needs at least one row and one column, got {}x{}",
            self.enemy_rows,
            self.enemy_cols
        );
        ensure!(
            self.enemy_size > 0.0 && self.player_width > 0.0 && self.player_height > 0.0,
            "entity dimensions must be positive"
        );
        ensure!(
            self.player_width <= self.arena_width,
            "player ({} wide) does not fit the arena ({} wide)",
            self.player_width,
            self.arena_width
        );
        ensure!(
            self.enemy_speed > 0.0 && self.player_speed > 0.0 && self.projectile_speed > 0.0,
            "speeds must be positive"
        );
        ensure!(
            self.enemy_drop_distance >= 0.0,
            "drop distance must not be negative, got {}",
            self.enemy_drop_distance
        );
        Ok(())
    }
}

/// One game session: exclusively owns every entity and all mutable state.
/// The loop driver feeds it key state through [`Session::set_input`], ticks
/// it with [`Session::advance`], and reads the view accessors for drawing.
pub struct Session {
    config: SessionConfig,
    phase: GameState,
    player: Player,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    formation: Formation,
    input: InputSampler,
    score: u32,
    tick_count: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            phase: GameState::Start,
            player: Self::spawn_player(&config),
            enemies: Self::spawn_grid(&config),
            projectiles: Vec::new(),
            formation: Formation::new(config.enemy_speed, config.enemy_drop_distance),
            input: InputSampler::new(),
            score: 0,
            tick_count: 0,
            config,
        })
    }

    fn spawn_player(config: &SessionConfig) -> Player {
        Player::new(
            config.arena_width / 2.0,
            config.arena_height - config.player_offset_bottom,
            config.player_width / 2.0,
            config.player_height / 2.0,
            config.player_speed,
        )
    }

    fn spawn_grid(config: &SessionConfig) -> Vec<Enemy> {
        let pitch = config.enemy_size + config.enemy_padding;
        let half = config.enemy_size / 2.0;
        let mut enemies = Vec::with_capacity(config.enemy_rows as usize * config.enemy_cols as usize);
        for row in 0..config.enemy_rows {
            for col in 0..config.enemy_cols {
                enemies.push(Enemy::new(
                    col as f32 * pitch + config.enemy_offset_left,
                    row as f32 * pitch + config.enemy_offset_top,
                    half,
                    half,
                ));
            }
        }
        enemies
    }

    /// Record press/release of one of the three logical keys. The loop
    /// driver calls this as events arrive; the state is sampled once at the
    /// start of the next tick.
    pub fn set_input(&mut self, key: InputKey, pressed: bool) {
        self.input.set_key(key, pressed);
    }

    /// Run one simulation tick. Invoked once per frame by the loop driver.
    pub fn advance(&mut self) {
        self.tick_count += 1;

        match self.phase {
            GameState::Start => {
                // Title screen: nothing moves until the first fire press
                if self.input.take_fire_request() {
                    self.phase = GameState::Playing;
                }
            }
            GameState::GameOver => {
                if self.input.take_fire_request() {
                    self.reset();
                }
            }
            GameState::Playing => self.step(),
        }
    }

    /// One tick of active play, in fixed order: full-clear reset carried
    /// over from the previous tick, player movement, fire request,
    /// projectile motion, formation sweep, collision resolution, defense
    /// line, cleanup.
    fn step(&mut self) {
        // A cleared grid respawns at the top of the following tick, so the
        // killing tick's score and corpses stay observable for one frame
        if !self.enemies.iter().any(|e| e.alive) {
            self.reset();
        }

        self.player.steer(self.input.left(), self.input.right());
        self.player.integrate(self.config.arena_width);

        // One player shot in flight at a time; extra requests drop silently
        if self.input.take_fire_request() && !self.player_shot_in_flight() {
            self.projectiles.push(Projectile::new(
                self.player.x,
                self.player.y - self.player.half_h,
                self.config.projectile_width / 2.0,
                self.config.projectile_height / 2.0,
                self.config.projectile_speed,
                ProjectileOwner::Player,
            ));
        }

        for projectile in &mut self.projectiles {
            projectile.advance();
        }

        self.formation
            .advance(&mut self.enemies, self.config.arena_width);

        self.score += collision::resolve_projectile_hits(&mut self.projectiles, &mut self.enemies);

        if collision::defense_line_breached(&self.enemies, &self.player) {
            // Freeze everything as it stands until a fire press restarts
            self.phase = GameState::GameOver;
            return;
        }

        collision::drop_escaped_projectiles(&mut self.projectiles, self.config.arena_height);
    }

    /// Full reset: fresh grid and player, no projectiles, score zeroed.
    /// Called from exactly two places: a fire press on the game-over screen,
    /// and clearing the last enemy during play.
    fn reset(&mut self) {
        self.player = Self::spawn_player(&self.config);
        self.enemies = Self::spawn_grid(&self.config);
        self.projectiles.clear();
        self.formation = Formation::new(self.config.enemy_speed, self.config.enemy_drop_distance);
        self.score = 0;
        self.phase = GameState::Playing;
    }

    fn player_shot_in_flight(&self) -> bool {
        self.projectiles
            .iter()
            .any(|p| p.owner == ProjectileOwner::Player)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> GameState {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn player_bounds(&self) -> Bounds {
        self.player.bounds()
    }

    /// Bounding boxes of living enemies, for drawing.
    pub fn enemy_bounds(&self) -> Vec<Bounds> {
        self.enemies
            .iter()
            .filter(|e| e.alive)
            .map(|e| e.bounds())
            .collect()
    }

    /// Bounding boxes of live projectiles, for drawing.
    pub fn projectile_bounds(&self) -> Vec<Bounds> {
        self.projectiles.iter().map(|p| p.bounds()).collect()
    }

    #[cfg(test)]
    pub(crate) fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session() -> Session {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        session.set_input(InputKey::Fire, true);
        session.advance();
        session.set_input(InputKey::Fire, false);
        session
    }

    #[test]
    fn test_new_session_starts_on_title_screen() {
        let session = Session::new(SessionConfig::default()).unwrap();
        assert_eq!(session.phase(), GameState::Start);
        assert_eq!(session.score(), 0);
        assert_eq!(session.enemy_bounds().len(), 32);
        assert!(session.projectile_bounds().is_empty());
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let config = SessionConfig {
            enemy_rows: 0,
            ..SessionConfig::default()
        };
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_invalid_arena_rejected() {
        let config = SessionConfig {
            arena_width: -800.0,
            ..SessionConfig::default()
        };
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_oversized_player_rejected() {
        let config = SessionConfig {
            player_width: 900.0,
            ..SessionConfig::default()
        };
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_fire_starts_the_game() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        session.advance();
        assert_eq!(session.phase(), GameState::Start);

        session.set_input(InputKey::Fire, true);
        session.advance();
        assert_eq!(session.phase(), GameState::Playing);
        // The starting press does not also spawn a projectile
        assert!(session.projectile_bounds().is_empty());
    }

    #[test]
    fn test_start_screen_mutates_nothing() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        let before = session.enemy_bounds();
        for _ in 0..10 {
            session.advance();
        }
        assert_eq!(session.enemy_bounds(), before);
    }

    #[test]
    fn test_grid_spawn_positions() {
        let session = playing_session();
        let enemies = session.enemy_bounds();
        // First enemy center at the configured offset, 50-unit pitch
        assert_eq!(enemies[0].x, 60.0);
        assert_eq!(enemies[0].y, 50.0);
        assert_eq!(enemies[1].x, 110.0);
        assert_eq!(enemies[8].y, 100.0);
    }

    #[test]
    fn test_fire_spawns_single_projectile() {
        let mut session = playing_session();
        session.set_input(InputKey::Fire, true);
        session.advance();
        assert_eq!(session.projectile_bounds().len(), 1);

        // Held fire key never spawns a second shot
        session.advance();
        assert_eq!(session.projectile_bounds().len(), 1);
    }

    #[test]
    fn test_fire_request_dropped_while_shot_in_flight() {
        let mut session = playing_session();
        session.set_input(InputKey::Fire, true);
        session.advance();
        session.set_input(InputKey::Fire, false);

        // Re-press while the first shot is still live: dropped, not queued
        session.set_input(InputKey::Fire, true);
        session.advance();
        assert_eq!(session.projectile_bounds().len(), 1);
        session.set_input(InputKey::Fire, false);

        // Once the shot leaves the arena a new press works again
        for _ in 0..100 {
            session.advance();
        }
        assert!(session.projectile_bounds().is_empty());
        session.set_input(InputKey::Fire, true);
        session.advance();
        assert_eq!(session.projectile_bounds().len(), 1);
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let mut session = playing_session();
        session.set_input(InputKey::Left, true);
        for _ in 0..200 {
            session.advance();
        }
        let player = session.player_bounds();
        assert_eq!(player.x, player.half_w);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut session = playing_session();
        let x_before = session.player_bounds().x;
        session.set_input(InputKey::Left, true);
        session.set_input(InputKey::Right, true);
        session.advance();
        assert_eq!(session.player_bounds().x, x_before);
    }

    #[test]
    fn test_game_over_freezes_until_fire() {
        let mut session = playing_session();
        // Teleport the whole grid onto the defense line
        for enemy in session.enemies_mut() {
            enemy.y = 540.0;
        }
        session.advance();
        assert_eq!(session.phase(), GameState::GameOver);

        let frozen = session.enemy_bounds();
        session.advance();
        session.advance();
        assert_eq!(session.enemy_bounds(), frozen);

        session.set_input(InputKey::Fire, true);
        session.advance();
        assert_eq!(session.phase(), GameState::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.enemy_bounds().len(), 32);
    }

    #[test]
    fn test_full_clear_resets_on_next_tick() {
        let mut session = playing_session();
        for enemy in session.enemies_mut() {
            enemy.kill();
        }
        session.advance();
        // Still Playing, but with a fresh wave and zeroed score
        assert_eq!(session.phase(), GameState::Playing);
        assert_eq!(session.enemy_bounds().len(), 32);
        assert_eq!(session.score(), 0);
        assert!(session.projectile_bounds().is_empty());
    }
}
