use serde::{Deserialize, Serialize};
use crate::core::Vec2;
use crate::generator::GeneratedLevel;

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    levels: Vec<JsonLevel>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonLevel {
    pub rows: Vec<String>,
    pub width: i32,
    pub height: i32,
    pub player: Option<Vec2>,
    pub goals: Vec<Vec2>,
    pub boxes: Vec<Vec2>,
    pub base_index: usize,
}

impl From<&GeneratedLevel> for JsonLevel {
    fn from(level: &GeneratedLevel) -> Self {
        JsonLevel {
            rows: level.rows.clone(),
            width: level.board.width,
            height: level.board.height,
            player: level.board.starting_state.player,
            goals: level.board.goals.clone(),
            boxes: level.board.starting_state.boxes.clone(),
            base_index: level.base_index,
        }
    }
}

pub fn get_json_data(levels: &[GeneratedLevel]) -> Result<String, serde_json::Error> {
    let json_data = JsonData {
        levels: levels.iter().map(JsonLevel::from).collect(),
    };
    serde_json::to_string_pretty(&json_data)
}
