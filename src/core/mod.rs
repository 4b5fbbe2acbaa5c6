mod board;
mod bounded_grid;
mod bounds;
mod consts;
mod map;
mod models;
mod random;
mod update;
pub mod grid_utils;

pub use board::{Board, BoardState};
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use grid_utils::TileGrid;
pub use map::Map;
pub use models::{Blocked, Direction, GameChangeType, GameUpdate, NEIGHBORS, Scenery, Tile, UserAction, Vec2};
