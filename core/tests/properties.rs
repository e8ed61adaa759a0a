use std::collections::{BTreeSet, VecDeque};

use sapper_core::*;

/// Breadth-first oracle for the tiles a reveal at `start` should open.
fn expected_region(grid: &Grid, start: Coord2) -> BTreeSet<Coord2> {
    let mut region = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(coords) = queue.pop_front() {
        if grid[coords].adjacent_mines != 0 {
            continue;
        }
        for pos in grid.neighbors(coords) {
            if !grid[pos].is_mine && region.insert(pos) {
                queue.push_back(pos);
            }
        }
    }

    region
}

fn revealed(grid: &Grid) -> BTreeSet<Coord2> {
    grid.iter_coords().filter(|&pos| grid[pos].is_revealed).collect()
}

#[test]
fn zero_reveal_opens_exactly_the_connected_region() {
    let config = Difficulty::Intermediate.config();

    for seed in 0..50 {
        let grid = RandomBoardGenerator::new(seed).generate(config).unwrap();
        let Some(start) = grid
            .iter_coords()
            .find(|&pos| !grid[pos].is_mine && grid[pos].adjacent_mines == 0)
        else {
            continue;
        };
        let expected = expected_region(&grid, start);

        let mut game = Game::new(grid);
        game.reveal_at(start).unwrap();

        assert_eq!(revealed(game.grid()), expected, "seed {seed}");
    }
}

#[test]
fn revealed_tiles_stay_revealed() {
    let config = Difficulty::Beginner.config();
    let mut game = Game::generate(config, RandomBoardGenerator::new(11)).unwrap();
    let mut seen: BTreeSet<Coord2> = BTreeSet::new();

    let coords: Vec<_> = game.grid().iter_coords().collect();
    for &pos in &coords {
        if game.grid()[pos].is_mine {
            game.toggle_flag(pos).unwrap();
        }
    }
    assert_eq!(game.mines_left(), 0);

    for &pos in &coords {
        if game.is_finished() {
            break;
        }
        if !game.grid()[pos].is_mine {
            game.reveal_at(pos).unwrap();
        }

        let now = revealed(game.grid());
        assert!(seen.is_subset(&now));
        seen = now;
    }

    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn expert_board_clears_without_recursion() {
    let config = Difficulty::Expert.config();
    let mut game = Game::generate(config, RandomBoardGenerator::new(99)).unwrap();

    let safe: Vec<_> = game
        .grid()
        .iter_coords()
        .filter(|&pos| !game.grid()[pos].is_mine)
        .collect();
    for coords in safe {
        if game.is_finished() {
            break;
        }
        game.reveal_at(coords).unwrap();
    }

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.grid().revealed_count(), config.safe_cell_count());
    assert!(
        game.grid()
            .tiles()
            .filter(|tile| tile.is_mine)
            .all(|tile| !tile.is_revealed)
    );
}

#[test]
fn striking_a_mine_ends_the_game() {
    let config = Difficulty::Beginner.config();
    let mut game = Game::generate(config, RandomBoardGenerator::new(5)).unwrap();
    let mine = game
        .grid()
        .iter_coords()
        .find(|&pos| game.grid()[pos].is_mine)
        .unwrap();

    assert_eq!(game.reveal_at(mine).unwrap(), RevealOutcome::HitMine);
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(revealed(game.grid()), BTreeSet::from([mine]));
    assert_eq!(game.reveal_at((0, 0)), Err(GameError::AlreadyEnded));
}
