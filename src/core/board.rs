use rand::Rng;
use crate::core::grid_utils::TileGrid;
use crate::core::{DECORATION_PERCENT, Map, Vec2};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub player: Option<Vec2>,
    pub boxes: Vec<Vec2>,
}

/// A playable level: the decorated map plus everything that moves or is scored.
#[derive(Clone, Debug)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub map: Map,
    pub goals: Vec<Vec2>,
    pub boxes: Vec<Vec2>,
    pub player: Option<Vec2>,
    pub starting_state: BoardState,
}

impl Board {
    pub fn new<R: Rng + ?Sized>(
        tiles: &TileGrid,
        start: Option<Vec2>,
        goals: Vec<Vec2>,
        boxes: Vec<Vec2>,
        rng: &mut R,
    ) -> Board {
        Board::with_decoration(tiles, start, goals, boxes, DECORATION_PERCENT, rng)
    }

    pub fn with_decoration<R: Rng + ?Sized>(
        tiles: &TileGrid,
        start: Option<Vec2>,
        goals: Vec<Vec2>,
        boxes: Vec<Vec2>,
        decoration_percent: u32,
        rng: &mut R,
    ) -> Board {
        let map = Map::with_decoration(tiles, start, decoration_percent, rng);
        Board {
            width: map.width(),
            height: map.height(),
            map,
            starting_state: BoardState {
                player: start,
                boxes: boxes.clone(),
            },
            goals,
            boxes,
            player: start,
        }
    }

    /// Checks a board built from outside data for nonsense.
    pub fn is_correct(&self) -> bool {
        let Some(start) = self.starting_state.player else {
            return false;
        };
        if !self.map.is_inside(&start) {
            return false;
        }
        if self.goals.is_empty() || self.boxes.len() < self.goals.len() {
            return false;
        }
        self.boxes.iter().any(|b| !self.goals.contains(b))
    }

    pub fn is_finished(&self) -> bool {
        self.boxes.iter().all(|b| self.goals.contains(b))
    }

    pub fn save_state(&mut self) {
        self.starting_state = BoardState {
            player: self.player,
            boxes: self.boxes.clone(),
        };
    }

    pub fn reset(&mut self) -> &mut Self {
        self.player = self.starting_state.player;
        self.boxes = self.starting_state.boxes.clone();
        self
    }

    pub fn has_box_at(&self, pos: &Vec2) -> bool {
        self.boxes.contains(pos)
    }

    pub fn is_goal(&self, pos: &Vec2) -> bool {
        self.goals.contains(pos)
    }

    pub fn count_boxes_on_goals(&self) -> usize {
        self.boxes.iter().filter(|b| self.goals.contains(b)).count()
    }

    /// A left-right mirrored copy for the second player; the map gets fresh scenery.
    pub fn mirror<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let start = self.starting_state.player.map(|p| self.mirror_position(p));
        let tiles = self.map.tiles().flipped_horizontally();
        let mut mirror = Board::new(
            &tiles,
            start,
            self.mirror_positions(&self.goals),
            self.mirror_positions(&self.boxes),
            rng,
        );
        mirror.starting_state.boxes = self.mirror_positions(&self.starting_state.boxes);
        mirror
    }

    fn mirror_position(&self, pos: Vec2) -> Vec2 {
        Vec2 { x: self.width - pos.x - 1, y: pos.y }
    }

    fn mirror_positions(&self, positions: &[Vec2]) -> Vec<Vec2> {
        positions.iter().map(|&p| self.mirror_position(p)).collect()
    }
}
