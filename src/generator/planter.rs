use rand::Rng;
use crate::core::{NEIGHBORS, Tile, TileGrid, Vec2};
use crate::generator::oracle::can_place_box;

/// Walks the interior from `start`, turning each interior cell into a goal with
/// `goal_percent` chance and into plain floor otherwise. Returns the goals planted.
pub fn plant_goals<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    start: Vec2,
    goal_percent: u32,
    rng: &mut R,
) -> usize {
    let mut goal_count = 0;
    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        if grid.get(&pos) != Some(&Tile::Interior) {
            continue;
        }
        if rng.random_range(0..100) < goal_percent {
            grid[&pos] = Tile::Goal;
            goal_count += 1;
        } else {
            grid[&pos] = Tile::Floor;
        }
        stack.extend(NEIGHBORS.iter().map(|&dir| pos + dir));
    }
    goal_count
}

/// Walks the interior from `start` planting boxes until there are as many as
/// `goal_count`. Goals take a box freely, plain floor only when the pushability oracle
/// agrees. The start cell never gets a box. Returns the boxes planted.
pub fn plant_boxes<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    start: Vec2,
    goal_count: usize,
    box_percent: u32,
    rng: &mut R,
) -> usize {
    let mut box_count = 0;
    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        let Some(&tile) = grid.get(&pos) else {
            continue;
        };
        if !matches!(tile, Tile::Interior | Tile::FilledGoal) {
            continue;
        }

        let skip = box_count >= goal_count || pos == start || rng.random_range(0..100) >= box_percent;
        let planted = match (tile, skip) {
            (Tile::FilledGoal, true) => Tile::Goal,
            (_, true) => Tile::Floor,
            (Tile::FilledGoal, false) => {
                box_count += 1;
                Tile::BoxOnGoal
            }
            (_, false) if can_place_box(grid, pos) => {
                box_count += 1;
                Tile::Box
            }
            (_, false) => Tile::Floor,
        };
        grid[&pos] = planted;

        stack.extend(NEIGHBORS.iter().map(|&dir| pos + dir));
    }
    box_count
}
