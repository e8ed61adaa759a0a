use serde::{Deserialize, Serialize};

/// One cell of the grid, owned by [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the 8 neighbors. Always 0 on mine tiles.
    pub adjacent_mines: u8,
}

impl Tile {
    pub const fn is_unrevealed(self) -> bool {
        !self.is_revealed
    }

    pub const fn view(self) -> TileView {
        if self.is_flagged {
            TileView::Flagged
        } else if !self.is_revealed {
            TileView::Hidden
        } else if self.is_mine {
            TileView::Mine
        } else {
            TileView::Revealed(self.adjacent_mines)
        }
    }
}

/// What the player is allowed to see of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Flagged,
    Mine,
    Revealed(u8),
}

impl Default for TileView {
    fn default() -> Self {
        Self::Hidden
    }
}
