use alloc::vec::Vec;

use crate::*;

/// Result of a single flood reveal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealResult {
    /// Tiles that went from hidden to revealed.
    pub revealed: CellCount,
}

/// Reveals `coords` and, through zero-hint tiles, everything reachable from it.
///
/// Out-of-bounds, already revealed and flagged tiles are left alone. A mine is
/// revealed but never expanded; deciding that this loses the game is up to the
/// caller. The walk uses an explicit stack with `is_revealed` as the only
/// visited marker, so the depth of a zero region never touches the call stack.
pub fn reveal(grid: &mut Grid, coords: Coord2) -> RevealResult {
    let mut result = RevealResult::default();
    let mut to_visit = Vec::from([coords]);

    while let Some(visit_coords) = to_visit.pop() {
        let Ok(tile) = grid.get_mut(visit_coords) else {
            continue;
        };
        if tile.is_revealed || tile.is_flagged {
            continue;
        }

        tile.is_revealed = true;
        result.revealed += 1;

        if !tile.is_mine && tile.adjacent_mines == 0 {
            to_visit.extend(
                grid.neighbors(visit_coords)
                    .filter(|&pos| grid[pos].is_unrevealed()),
            );
        }
    }

    result
}
