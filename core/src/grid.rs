use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of tiles with a fixed mine count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    tiles: Array2<Tile>,
    mine_count: CellCount,
}

impl Grid {
    /// Builds a grid from a mine mask, computing every hint count.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let (rows, cols) = match (Coord::try_from(rows), Coord::try_from(cols)) {
            (Ok(rows), Ok(cols)) => (rows, cols),
            _ => {
                return Err(GameError::InvalidConfiguration {
                    rows: Coord::MAX,
                    cols: Coord::MAX,
                    mines: 0,
                });
            }
        };
        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let config = GameConfig::new(rows, cols, mines.try_into().unwrap_or(CellCount::MAX))?;

        let tiles = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            let is_mine = mine_mask[coords.to_nd_index()];
            let adjacent_mines = if is_mine {
                0
            } else {
                mine_mask
                    .iter_neighbors(coords)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count() as u8
            };
            Tile {
                is_mine,
                adjacent_mines,
                ..Tile::default()
            }
        });

        Ok(Self {
            tiles,
            mine_count: config.mines,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.tiles.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Result<&mut Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self[coords])
    }

    pub fn set(&mut self, coords: Coord2, tile: Tile) -> Result<()> {
        *self.get_mut(coords)? = tile;
        Ok(())
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        self.tiles.iter_neighbors(coords)
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn total_cells(&self) -> CellCount {
        self.tiles.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.tiles().filter(|tile| tile.is_revealed).count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.tiles().filter(|tile| tile.is_flagged).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.tiles[coords.to_nd_index()]
    }
}
