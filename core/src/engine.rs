use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Turn state machine, sole owner of the grid for the whole game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        Self {
            revealed_count: grid.revealed_count(),
            flagged_count: grid.flagged_count(),
            grid,
            status: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn generate(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        Ok(Self::new(generator.generate(config)?))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> GameConfig {
        self.grid.config()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    /// Estimate shown to the player, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.grid.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn tile_view(&self, coords: Coord2) -> Result<TileView> {
        Ok(self.grid.get(coords)?.view())
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Validates player supplied coordinates against the grid.
    pub fn coords(&self, row: i64, col: i64) -> Result<Coord2> {
        let invalid = GameError::InvalidCoordinate { row, col };
        let row = Coord::try_from(row).map_err(|_| invalid)?;
        let col = Coord::try_from(col).map_err(|_| invalid)?;
        self.grid
            .validate_coords((row, col))
            .map_err(|_| invalid)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = &mut self.grid[coords];
        if tile.is_revealed {
            return Ok(MarkOutcome::NoChange);
        }

        tile.is_flagged = !tile.is_flagged;
        Ok(if tile.is_flagged {
            self.flagged_count += 1;
            log::debug!("flag {:?}", coords);
            MarkOutcome::Flagged
        } else {
            self.flagged_count -= 1;
            log::debug!("unflag {:?}", coords);
            MarkOutcome::Unflagged
        })
    }

    pub fn reveal_at(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = self.grid[coords];
        if tile.is_flagged {
            return Err(GameError::RevealFlagged);
        }
        if tile.is_revealed {
            return Ok(RevealOutcome::NoChange);
        }

        if tile.is_mine {
            self.grid[coords].is_revealed = true;
            self.triggered_mine = Some(coords);
            self.end_game(false);
            log::debug!("mine hit at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let result = reveal(&mut self.grid, coords);
        self.revealed_count += result.revealed;
        log::debug!("revealed {} tiles from {:?}", result.revealed, coords);

        if self.revealed_count == self.grid.safe_cell_count() {
            self.end_game(true);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed(result.revealed))
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.status.is_finished() {
            return;
        }

        self.status = if won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        log::info!("game over: {:?}", self.status);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::new(Grid::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn config_and_size_follow_the_grid() {
        let game = game((2, 3), &[(0, 0), (1, 2)]);

        assert_eq!(game.size(), (2, 3));
        assert_eq!(game.config(), GameConfig::new(2, 3, 2).unwrap());
        assert_eq!(game.mines_left(), 2);
    }

    #[test]
    fn reveal_numbered_tile_keeps_playing() {
        let mut game = game((2, 2), &[(0, 0)]);

        let outcome = game.reveal_at((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed(1));
        assert_eq!(game.tile_view((1, 1)).unwrap(), TileView::Revealed(1));
        assert_eq!(game.grid().revealed_count(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn reveal_hits_mine_and_sets_triggered_cell() {
        let mut game = game((2, 2), &[(0, 0)]);

        let outcome = game.reveal_at((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.triggered_mine(), Some((0, 0)));
        assert_eq!(game.grid().revealed_count(), 1);
    }

    #[test]
    fn loss_reveals_only_the_struck_mine() {
        let mut game = game((3, 3), &[(0, 0), (2, 2)]);

        game.reveal_at((2, 2)).unwrap();

        assert!(game.grid()[(2, 2)].is_revealed);
        assert!(!game.grid()[(0, 0)].is_revealed);
        assert_eq!(game.grid().revealed_count(), 1);
    }

    #[test]
    fn empty_board_wins_in_one_flood() {
        let mut game = game((3, 3), &[]);

        assert_eq!(game.reveal_at((1, 1)).unwrap(), RevealOutcome::Won);
        assert_eq!(game.grid().revealed_count(), 9);
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_finished());
    }

    #[test]
    fn single_safe_tile_wins() {
        let mut game = game((2, 2), &[(0, 0), (0, 1), (1, 0)]);

        assert_eq!(game.reveal_at((1, 1)).unwrap(), RevealOutcome::Won);
    }

    #[test]
    fn win_requires_every_safe_tile() {
        let mut game = game((1, 3), &[(0, 1)]);

        assert_eq!(game.reveal_at((0, 0)).unwrap(), RevealOutcome::Revealed(1));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.reveal_at((0, 2)).unwrap(), RevealOutcome::Won);
    }

    #[test]
    fn finished_game_rejects_commands() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.reveal_at((0, 0)).unwrap();
        let before = game.grid().clone();

        assert_eq!(game.reveal_at((1, 1)), Err(GameError::AlreadyEnded));
        assert_eq!(game.toggle_flag((1, 1)), Err(GameError::AlreadyEnded));
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn flagged_tile_cannot_be_revealed() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.toggle_flag((0, 0)).unwrap();

        assert_eq!(game.reveal_at((0, 0)), Err(GameError::RevealFlagged));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.grid()[(0, 0)].is_revealed);
    }

    #[test]
    fn toggle_flag_is_an_involution() {
        let mut game = game((2, 2), &[(0, 0)]);

        assert_eq!(game.toggle_flag((0, 1)).unwrap(), MarkOutcome::Flagged);
        assert_eq!(game.tile_view((0, 1)).unwrap(), TileView::Flagged);
        assert_eq!(game.toggle_flag((0, 1)).unwrap(), MarkOutcome::Unflagged);
        assert_eq!(game.tile_view((0, 1)).unwrap(), TileView::Hidden);
    }

    #[test]
    fn toggle_flag_on_revealed_tile_is_noop() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.reveal_at((1, 1)).unwrap();

        assert_eq!(game.toggle_flag((1, 1)).unwrap(), MarkOutcome::NoChange);
        assert!(!game.grid()[(1, 1)].is_flagged);
        assert_eq!(game.mines_left(), 1);
    }

    #[test]
    fn mines_left_goes_negative_when_over_flagged() {
        let mut game = game((2, 2), &[(0, 0)]);

        game.toggle_flag((0, 1)).unwrap();
        game.toggle_flag((1, 0)).unwrap();
        game.toggle_flag((1, 1)).unwrap();

        assert_eq!(game.mines_left(), -2);
    }

    #[test]
    fn player_coords_are_validated() {
        let game = game((2, 3), &[]);

        assert_eq!(game.coords(1, 2), Ok((1, 2)));
        assert_eq!(
            game.coords(2, 0),
            Err(GameError::InvalidCoordinate { row: 2, col: 0 })
        );
        assert_eq!(
            game.coords(-1, 0),
            Err(GameError::InvalidCoordinate { row: -1, col: 0 })
        );
        assert_eq!(
            game.coords(0, 1000),
            Err(GameError::InvalidCoordinate { row: 0, col: 1000 })
        );
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut game = game((4, 4), &[(3, 3)]);
        game.reveal_at((3, 2)).unwrap();

        game.toggle_flag((3, 2)).unwrap();
        game.reveal_at((0, 0)).unwrap();

        assert!(game.grid()[(3, 2)].is_revealed);
        assert!(!game.grid()[(3, 2)].is_flagged);
    }
}
