use crate::core::grid_utils::WallPattern;
use crate::core::{Tile, TileGrid, Vec2};

/// Floor a box could be pushed across while planting.
fn is_open(grid: &TileGrid, pos: &Vec2) -> bool {
    matches!(
        grid.get(pos),
        Some(Tile::Floor | Tile::Interior | Tile::Goal | Tile::FilledGoal)
    )
}

/// For a box at `position` leaning on the wall at `position + offset`, walks along that
/// wall both ways. A way is a dead end if the walk reaches a blocked cell before the wall
/// opens up. True as soon as either way is a dead end.
pub fn ends_in_corner(grid: &TileGrid, position: Vec2, offset: Vec2) -> bool {
    let along = Vec2::new(offset.y, offset.x);
    [along, -along]
        .into_iter()
        .any(|dir| walk_is_dead_end(grid, position, offset, dir))
}

fn walk_is_dead_end(grid: &TileGrid, position: Vec2, offset: Vec2, dir: Vec2) -> bool {
    let mut walk = position;
    loop {
        if !is_open(grid, &walk) {
            return true;
        }
        if is_open(grid, &(walk + offset)) {
            return false;
        }
        walk = walk + dir;
    }
}

/// Local check that a box planted at `position` is not wedged for good.
///
/// Any wall whose line runs into a dead end rejects. Past that, only zero walls, one
/// wall, or two walls facing each other across the cell are allowed.
pub fn can_place_box(grid: &TileGrid, position: Vec2) -> bool {
    if !matches!(grid.get(&position), Some(Tile::Interior | Tile::FilledGoal)) {
        return false;
    }

    let walled_sides = [
        Vec2::new(-1, 0),
        Vec2::new(1, 0),
        Vec2::new(0, -1),
        Vec2::new(0, 1),
    ]
    .into_iter()
    .filter(|&side| grid.is_wall(&(position + side)));

    for side in walled_sides {
        if ends_in_corner(grid, position, side) {
            return false;
        }
    }

    !WallPattern::of(grid, position).is_corner()
}
