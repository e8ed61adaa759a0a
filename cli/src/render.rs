use sapper_core::*;
use std::fmt;

pub struct Glyphs {
    pub flag: char,
    pub hidden: char,
    pub mine: char,
    pub empty: char,
}

pub const GLYPHS: Glyphs = Glyphs {
    flag: '⚑',
    hidden: '□',
    mine: '*',
    empty: ' ',
};

/// Read-only text view of a game: mine estimate, column ruler and one line per row.
pub struct BoardView<'a> {
    game: &'a Game,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }
}

fn glyph(view: TileView) -> char {
    match view {
        TileView::Flagged => GLYPHS.flag,
        TileView::Hidden => GLYPHS.hidden,
        TileView::Mine => GLYPHS.mine,
        TileView::Revealed(0) => GLYPHS.empty,
        // hint counts never exceed 8
        TileView::Revealed(count) => char::from(b'0' + count),
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.game.grid();
        let (rows, cols) = self.game.size();

        writeln!(f)?;
        writeln!(
            f,
            "Number of mines remaining (estimated): {}",
            self.game.mines_left()
        )?;

        write!(f, "    ")?;
        for col in 0..cols {
            write!(f, "{col:2} ")?;
        }
        writeln!(f)?;
        writeln!(f, "   {}", "---".repeat(cols.into()))?;

        for row in 0..rows {
            write!(f, "{row:2} | ")?;
            for col in 0..cols {
                write!(f, "{:^2} ", glyph(grid[(row, col)].view()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
