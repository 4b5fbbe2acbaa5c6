use serde::{Deserialize, Serialize};

/// One cell of a level grid. Symbols only exist at the text boundary, see [`Tile::symbol`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Wall,
    Corner,
    Floor,
    /// reachable floor, only meaningful while carving or inside a [`crate::core::Map`]
    Interior,
    Goal,
    /// goal swept up by an interior flood fill
    FilledGoal,
    Box,
    BoxOnGoal,
    Player,
    PlayerOnGoal,
    /// scratch marker for the ring of walls around the interior
    Boundary,
    Scenery(Scenery),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Scenery {
    Grass,
    Pebbles,
    Shrub,
    Puddle,
}

const ALL_SCENERY: &[Scenery] = &[
    Scenery::Grass,
    Scenery::Pebbles,
    Scenery::Shrub,
    Scenery::Puddle,
];

impl Scenery {
    pub fn all() -> &'static [Scenery] {
        ALL_SCENERY
    }
}

impl Tile {
    pub fn symbol(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Corner => 'x',
            Tile::Floor => ' ',
            Tile::Interior => 'o',
            Tile::Goal => '.',
            Tile::FilledGoal => ',',
            Tile::Box => '$',
            Tile::BoxOnGoal => '*',
            Tile::Player => '@',
            Tile::PlayerOnGoal => '+',
            Tile::Boundary => '%',
            Tile::Scenery(Scenery::Grass) => '1',
            Tile::Scenery(Scenery::Pebbles) => '2',
            Tile::Scenery(Scenery::Shrub) => '3',
            Tile::Scenery(Scenery::Puddle) => '4',
        }
    }

    /// Unknown symbols read as floor, the same way the wall/floor classifier treats them.
    pub fn from_symbol(symbol: char) -> Tile {
        match symbol {
            '#' => Tile::Wall,
            'x' => Tile::Corner,
            'o' => Tile::Interior,
            '.' => Tile::Goal,
            ',' => Tile::FilledGoal,
            '$' => Tile::Box,
            '*' => Tile::BoxOnGoal,
            '@' => Tile::Player,
            '+' => Tile::PlayerOnGoal,
            '%' => Tile::Boundary,
            '1' => Tile::Scenery(Scenery::Grass),
            '2' => Tile::Scenery(Scenery::Pebbles),
            '3' => Tile::Scenery(Scenery::Shrub),
            '4' => Tile::Scenery(Scenery::Puddle),
            _ => Tile::Floor,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall | Tile::Corner)
    }

    /// Purge everything but floor and walls.
    pub fn cleaned(&self) -> Tile {
        if self.is_wall() { *self } else { Tile::Floor }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

pub const NEIGHBORS: [Vec2; 4] = [
    Vec2 { x: -1, y: 0 },
    Vec2 { x: 1, y: 0 },
    Vec2 { x: 0, y: -1 },
    Vec2 { x: 0, y: 1 },
];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blocked {
    NoPlayer,
    OutOfBounds,
    Wall,
    BoxAgainstWall,
    BoxAgainstBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUpdate {
    NextState(GameChangeType),
    Blocked(Blocked),
}

impl GameUpdate {
    pub fn changed(&self) -> bool {
        matches!(self, GameUpdate::NextState(_))
    }
}
