//! Collision resolution between projectiles, enemies, and the player's
//! defense line. All checks use strict containment so touching edges never
//! count as a hit.

use crate::entities::{Enemy, Player, Projectile, ProjectileOwner};

/// Points awarded per confirmed kill
pub const KILL_POINTS: u32 = 10;

/// Test every live player-owned projectile against the living enemies, in
/// iteration order. The first enemy containing the projectile's center is
/// killed and the projectile is spent; each projectile kills at most one
/// enemy per tick. Spent projectiles are marked during the scan and
/// compacted afterwards rather than removed mid-iteration.
///
/// Returns the points scored this tick.
pub fn resolve_projectile_hits(projectiles: &mut Vec<Projectile>, enemies: &mut [Enemy]) -> u32 {
    let mut points = 0;
    let mut spent = vec![false; projectiles.len()];

    for (idx, projectile) in projectiles.iter().enumerate() {
        if projectile.owner != ProjectileOwner::Player {
            continue;
        }

        for enemy in enemies.iter_mut() {
            if enemy.alive && enemy.bounds().contains(projectile.x, projectile.y) {
                enemy.kill();
                points += KILL_POINTS;
                spent[idx] = true;
                break;
            }
        }
    }

    let mut idx = 0;
    projectiles.retain(|_| {
        let keep = !spent[idx];
        idx += 1;
        keep
    });

    points
}

/// A living enemy whose bottom edge reaches or passes the player's top edge
/// ends the session, regardless of horizontal position.
pub fn defense_line_breached(enemies: &[Enemy], player: &Player) -> bool {
    let line = player.bounds().top();
    enemies
        .iter()
        .filter(|e| e.alive)
        .any(|e| e.bounds().bottom() >= line)
}

/// Drop projectiles that left the arena vertically. Runs after collision
/// resolution each tick.
pub fn drop_escaped_projectiles(projectiles: &mut Vec<Projectile>, arena_height: f32) {
    projectiles.retain(|p| !p.is_off_screen(arena_height));
}
