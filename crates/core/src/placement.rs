//! Start and spawn placement on a finished map.

use rand_chacha::rand_core::Rng;

use crate::content::EnemyKind;
use crate::mapgen::Grid;
use crate::mapgen::seed::{random_interior_pos, random_usize};
use crate::types::Pos;

const RANDOM_PROBES: usize = 100;
/// Enemies avoid cells where both |dx| and |dy| are below this.
pub const SPAWN_EXCLUSION: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnLayout {
    pub player: Pos,
    pub enemies: Vec<(EnemyKind, Pos)>,
}

/// Random open interior cell, or `None` when the map has no open cell.
pub fn random_open_position<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Pos> {
    if grid.width() < 3 || grid.height() < 3 {
        return None;
    }
    for _ in 0..RANDOM_PROBES {
        let pos = random_interior_pos(rng, grid);
        if grid.is_open(pos) {
            return Some(pos);
        }
    }
    grid.interior_positions().find(|&pos| grid.is_open(pos))
}

/// Three to five enemies.
pub fn roll_enemy_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    3 + random_usize(rng, 0, 2)
}

/// Places the player, then `enemy_count` enemies on distinct open cells away
/// from the player. Falls back to nearby cells on maps too small to keep the
/// distance, and stops early when open cells run out.
pub fn spawn_layout<R: Rng + ?Sized>(
    grid: &Grid,
    enemy_count: usize,
    rng: &mut R,
) -> Option<SpawnLayout> {
    let player = random_open_position(grid, rng)?;
    let mut enemies: Vec<(EnemyKind, Pos)> = Vec::with_capacity(enemy_count);

    for _ in 0..enemy_count {
        let free: Vec<Pos> = grid
            .interior_positions()
            .filter(|&pos| {
                grid.is_open(pos)
                    && pos != player
                    && !enemies.iter().any(|&(_, taken)| taken == pos)
            })
            .collect();
        let distant: Vec<Pos> =
            free.iter().copied().filter(|&pos| !within_exclusion(player, pos)).collect();
        let pool = if distant.is_empty() { &free } else { &distant };
        if pool.is_empty() {
            break;
        }

        let pos = pool[random_usize(rng, 0, pool.len() - 1)];
        let kind = EnemyKind::ALL[random_usize(rng, 0, EnemyKind::ALL.len() - 1)];
        enemies.push((kind, pos));
    }

    Some(SpawnLayout { player, enemies })
}

fn within_exclusion(player: Pos, pos: Pos) -> bool {
    player.x.abs_diff(pos.x) < SPAWN_EXCLUSION && player.y.abs_diff(pos.y) < SPAWN_EXCLUSION
}
