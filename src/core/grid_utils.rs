use crate::core::{BoundedGrid, NEIGHBORS, Tile, Vec2};

pub type TileGrid = BoundedGrid<Tile>;

/// Recolors the 4-connected region of `from` tiles reachable from `start` to `to`.
pub fn flood_fill(grid: &mut TileGrid, start: Vec2, from: Tile, to: Tile) {
    fill_region(grid, start, from, to, false);
}

/// Same as [`flood_fill`], but also walks over goals and recolors them to
/// [`Tile::FilledGoal`] so they stay part of the region.
pub fn flood_fill_through_goals(grid: &mut TileGrid, start: Vec2, from: Tile, to: Tile) {
    fill_region(grid, start, from, to, true);
}

fn fill_region(grid: &mut TileGrid, start: Vec2, from: Tile, to: Tile, through_goals: bool) {
    if from == to {
        return;
    }
    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        let Some(&tile) = grid.get(&pos) else {
            continue;
        };
        if tile == from {
            grid[&pos] = to;
        } else if through_goals && tile == Tile::Goal {
            grid[&pos] = Tile::FilledGoal;
        } else {
            continue;
        }
        stack.extend(NEIGHBORS.iter().map(|&dir| pos + dir));
    }
}

/// Walks the region around `start` turning it into [`Tile::Interior`], and swaps every
/// `wall` tile the region touches for `replacement`. Walls not adjacent to the region
/// are left alone.
pub fn mark_edges(grid: &mut TileGrid, start: Vec2, wall: Tile, replacement: Tile) {
    if wall == replacement {
        return;
    }
    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        let Some(&tile) = grid.get(&pos) else {
            continue;
        };
        if tile == wall {
            grid[&pos] = replacement;
        } else if tile != replacement && tile != Tile::Interior {
            grid[&pos] = Tile::Interior;
            stack.extend(NEIGHBORS.iter().map(|&dir| pos + dir));
        }
    }
}

/// Wall neighbors of a cell, split by the axis they sit on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallPattern {
    /// walls to the left and right
    pub horizontal: u8,
    /// walls above and below
    pub vertical: u8,
}

impl WallPattern {
    pub fn of(grid: &TileGrid, pos: Vec2) -> WallPattern {
        let count = |a: Vec2, b: Vec2| {
            grid.is_wall(&(pos + a)) as u8 + grid.is_wall(&(pos + b)) as u8
        };
        WallPattern {
            horizontal: count(Vec2::new(-1, 0), Vec2::new(1, 0)),
            vertical: count(Vec2::new(0, -1), Vec2::new(0, 1)),
        }
    }

    pub fn total(&self) -> u8 {
        self.horizontal + self.vertical
    }

    /// More than two walls, or two walls that meet at a right angle.
    pub fn is_corner(&self) -> bool {
        self.total() > 2 || (self.total() == 2 && self.horizontal < 2 && self.vertical < 2)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::test_util::assert_rows_match;

    const ROOM: &[&str] = &[
        "  #####",
        "###   #",
        "#@  # #",
        "##### #",
        "    ###",
    ];

    #[test]
    fn flood_fill_same_tile_is_noop() {
        let mut grid = TileGrid::from_rows(ROOM);
        let before = grid.clone();
        flood_fill(&mut grid, Vec2::new(2, 2), Tile::Floor, Tile::Floor);
        assert_eq!(grid, before);
    }

    #[test]
    fn flood_fill_outside_is_noop() {
        let mut grid = TileGrid::from_rows(ROOM);
        let before = grid.clone();
        flood_fill(&mut grid, Vec2::new(-1, 2), Tile::Floor, Tile::Interior);
        flood_fill(&mut grid, Vec2::new(7, 0), Tile::Floor, Tile::Interior);
        assert_eq!(grid, before);
    }

    #[test]
    fn flood_fill_colors_only_connected_region() {
        let mut grid = TileGrid::from_rows(ROOM);
        flood_fill(&mut grid, Vec2::new(2, 2), Tile::Floor, Tile::Interior);
        assert_rows_match(&grid, &[
            "  #####",
            "###ooo#",
            "#@oo#o#",
            "#####o#",
            "    ###",
        ]);
    }

    #[test]
    fn flood_fill_through_goals_keeps_goals_marked() {
        let mut grid = TileGrid::from_rows(&[
            "######",
            "# .. #",
            "###  #",
            "######",
        ]);
        flood_fill_through_goals(&mut grid, Vec2::new(1, 1), Tile::Floor, Tile::Interior);
        assert_rows_match(&grid, &[
            "######",
            "#o,,o#",
            "###oo#",
            "######",
        ]);
    }

    #[test]
    fn plain_flood_fill_stops_at_goals() {
        let mut grid = TileGrid::from_rows(&["#  . #"]);
        flood_fill(&mut grid, Vec2::new(1, 0), Tile::Floor, Tile::Interior);
        assert_rows_match(&grid, &["#oo. #"]);
    }

    #[test]
    fn mark_edges_only_touches_adjacent_walls() {
        let mut grid = TileGrid::from_rows(&[
            "#######",
            "#######",
            "##   ##",
            "## # ##",
            "#######",
        ]);
        mark_edges(&mut grid, Vec2::new(2, 2), Tile::Wall, Tile::Boundary);
        assert_rows_match(&grid, &[
            "#######",
            "##%%%##",
            "#%ooo%#",
            "#%o%o%#",
            "##%#%##",
        ]);
    }

    #[test]
    fn wall_pattern_detects_corners() {
        let grid = TileGrid::from_rows(&[
            "####",
            "#  #",
            "####",
        ]);
        assert!(WallPattern::of(&grid, Vec2::new(0, 0)).is_corner());
        assert!(!WallPattern::of(&grid, Vec2::new(1, 0)).is_corner());
        assert!(!WallPattern::of(&grid, Vec2::new(0, 1)).is_corner());
        assert_eq!(WallPattern::of(&grid, Vec2::new(1, 1)), WallPattern { horizontal: 1, vertical: 2 });
    }
}
