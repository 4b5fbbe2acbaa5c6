mod json_export;
mod reader;
mod session;

pub use json_export::{JsonLevel, get_json_data};
pub use reader::{
    LevelReadError, board_from_lines, build_level, clean_line, pad_lines, parse_levels,
    parse_plain, read_file_plain, read_levels_file, split_levels,
};
pub use session::LevelSession;
