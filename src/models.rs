use crate::core::GameChangeType;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayMode {
    Solo,
    /// a second player on the mirrored twin of the level
    Dual,
}

/// Which board a move goes to. Always `First` in solo mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayerSlot {
    First,
    Second,
}

pub struct GameRenderState {
    pub mode: PlayMode,
    pub level_index: usize,
    pub level_count: usize,
    pub winner: Option<PlayerSlot>,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
}
