use rand::Rng;
use crate::core::grid_utils::{flood_fill, TileGrid, WallPattern};
use crate::core::{Scenery, Tile, Vec2, DECORATION_PERCENT};

/// Wall/floor view of a level, ready for presentation: inside floor is told apart from
/// the outside, wall corners are marked and the outside is sprinkled with scenery.
#[derive(Clone, Debug)]
pub struct Map {
    grid: TileGrid,
}

impl Map {
    pub fn new<R: Rng + ?Sized>(tiles: &TileGrid, start: Option<Vec2>, rng: &mut R) -> Map {
        Map::with_decoration(tiles, start, DECORATION_PERCENT, rng)
    }

    pub fn with_decoration<R: Rng + ?Sized>(
        tiles: &TileGrid,
        start: Option<Vec2>,
        decoration_percent: u32,
        rng: &mut R,
    ) -> Map {
        let mut grid = tiles.map(Tile::cleaned);
        if let Some(start) = start {
            flood_fill(&mut grid, start, Tile::Floor, Tile::Interior);
        }
        decorate(&mut grid, decoration_percent, rng);
        Map { grid }
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn get_tile(&self, pos: &Vec2) -> Option<Tile> {
        self.grid.get(pos).copied()
    }

    pub fn is_inside(&self, pos: &Vec2) -> bool {
        self.grid.contains(pos)
    }

    pub fn is_wall(&self, pos: &Vec2) -> bool {
        self.grid.is_wall(pos)
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.grid
    }

    pub fn to_rows(&self) -> Vec<String> {
        self.grid.to_rows()
    }
}

fn decorate<R: Rng + ?Sized>(grid: &mut TileGrid, decoration_percent: u32, rng: &mut R) {
    for pos in grid.positions() {
        let tile = grid[&pos];
        match tile {
            Tile::Wall => {
                if WallPattern::of(grid, pos).is_corner() {
                    grid[&pos] = Tile::Corner;
                }
            }
            Tile::Floor => {
                if rng.random_range(0..100) < decoration_percent {
                    grid[&pos] = Tile::Scenery(rng.random::<Scenery>());
                }
            }
            _ => {}
        }
    }
}
