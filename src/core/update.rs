use crate::core::{Blocked, Board, Direction, GameChangeType, GameUpdate, UserAction};

impl Board {
    /// Moves the player one cell, pushing a box if one is in the way.
    /// Returns whether anything changed.
    pub fn step(&mut self, direction: Direction) -> bool {
        self.apply(UserAction::Move(direction)).changed()
    }

    pub fn apply(&mut self, action: UserAction) -> GameUpdate {
        let dir = match action {
            UserAction::Move(d) => d.offset(),
        };

        let Some(player) = self.player else {
            return GameUpdate::Blocked(Blocked::NoPlayer);
        };

        let dest = player + dir;
        if !self.map.is_inside(&dest) {
            return GameUpdate::Blocked(Blocked::OutOfBounds);
        }
        if self.map.is_wall(&dest) {
            return GameUpdate::Blocked(Blocked::Wall);
        }

        let Some(box_index) = self.boxes.iter().position(|b| *b == dest) else {
            self.player = Some(dest);
            return GameUpdate::NextState(GameChangeType::PlayerMove);
        };

        let beyond = dest + dir;
        if !self.map.is_inside(&beyond) || self.map.is_wall(&beyond) {
            return GameUpdate::Blocked(Blocked::BoxAgainstWall);
        }
        if self.has_box_at(&beyond) {
            return GameUpdate::Blocked(Blocked::BoxAgainstBox);
        }

        self.boxes[box_index] = beyond;
        self.player = Some(dest);
        GameUpdate::NextState(GameChangeType::PlayerAndBoxMove)
    }
}
