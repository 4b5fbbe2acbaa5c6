use std::path::{Path, PathBuf};
use rand::Rng;
use thiserror::Error;
use tracing::debug;
use crate::core::{Board, DECORATION_PERCENT, TileGrid, Vec2};

#[derive(Error, Debug)]
pub enum LevelReadError {
    #[error("could not read level file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Drops the line ending and anything after a `;` comment marker.
pub fn clean_line(line: &str) -> &str {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.find(';') {
        Some(comment) => &line[..comment],
        None => line,
    }
}

/// Right-pads every line with spaces to the width of the longest one.
pub fn pad_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let width = lines.iter().map(|l| l.as_ref().chars().count()).max().unwrap_or(0);
    lines
        .iter()
        .map(|l| format!("{:<width$}", l.as_ref(), width = width))
        .collect()
}

/// Splits level text into per-level line groups. Levels are separated by empty lines.
pub fn split_levels(text: &str) -> Vec<Vec<String>> {
    let mut levels = Vec::new();
    let mut level_lines: Vec<String> = Vec::new();
    for line in text.lines().map(clean_line) {
        if !line.is_empty() {
            level_lines.push(line.to_string());
        } else if !level_lines.is_empty() {
            levels.push(std::mem::take(&mut level_lines));
        }
    }
    if !level_lines.is_empty() {
        levels.push(level_lines);
    }
    levels
}

/// Builds a board from the lines of one level, or `None` if the level makes no sense.
pub fn build_level<S: AsRef<str>, R: Rng + ?Sized>(lines: &[S], rng: &mut R) -> Option<Board> {
    let board = board_from_lines(lines, DECORATION_PERCENT, rng);
    if board.is_correct() {
        Some(board)
    } else {
        debug!(width = board.width, height = board.height, "dropping malformed level");
        None
    }
}

/// Reads positions out of the level symbols without judging the result.
pub fn board_from_lines<S: AsRef<str>, R: Rng + ?Sized>(
    lines: &[S],
    decoration_percent: u32,
    rng: &mut R,
) -> Board {
    let mut start = None;
    let mut goals = Vec::new();
    let mut boxes = Vec::new();

    for (y, line) in lines.iter().enumerate() {
        for (x, symbol) in line.as_ref().chars().enumerate() {
            let pos = Vec2::new(x as i32, y as i32);
            if matches!(symbol, '@' | '+') {
                start = Some(pos);
            }
            if matches!(symbol, '.' | '+' | '*') {
                goals.push(pos);
            }
            if matches!(symbol, '$' | '*') {
                boxes.push(pos);
            }
        }
    }

    let grid = TileGrid::from_rows(&pad_lines(lines));
    Board::with_decoration(&grid, start, goals, boxes, decoration_percent, rng)
}

/// Every well-formed level in `text`; malformed ones are skipped.
pub fn parse_levels<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<Board> {
    split_levels(text)
        .iter()
        .filter_map(|lines| build_level(lines, rng))
        .collect()
}

/// Raw padded grids, no validity checks. Used as generator bases.
pub fn parse_plain(text: &str) -> Vec<TileGrid> {
    split_levels(text)
        .iter()
        .map(|lines| TileGrid::from_rows(&pad_lines(lines)))
        .collect()
}

/// Reads a level file. A missing file is `Ok(None)`.
pub fn read_levels_file<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Option<Vec<Board>>, LevelReadError> {
    Ok(read_text(path)?.map(|text| parse_levels(&text, rng)))
}

/// Reads a file of base templates. A missing file is `Ok(None)`.
pub fn read_file_plain(path: &Path) -> Result<Option<Vec<TileGrid>>, LevelReadError> {
    Ok(read_text(path)?.map(|text| parse_plain(&text)))
}

fn read_text(path: &Path) -> Result<Option<String>, LevelReadError> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|source| LevelReadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use super::*;

    const LEVELS: &str = "; a level pack
#####
#@$.#   ; the easy one
#####

####
#@ #
####
;no goals above

  ####
###  #
#+ $ #
# $* #
######
";

    #[test]
    fn clean_line_strips_comments_and_line_endings() {
        assert_eq!(clean_line("#@$.#  ; comment\r\n"), "#@$.#  ");
        assert_eq!(clean_line("; only a comment"), "");
        assert_eq!(clean_line("#####"), "#####");
    }

    #[test]
    fn pad_lines_evens_width() {
        assert_eq!(pad_lines(&["##", "####", "#"]), vec!["##  ", "####", "#   "]);
    }

    #[test]
    fn split_levels_on_blank_lines() {
        let levels = split_levels(LEVELS);
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0], vec!["#####", "#@$.#   ", "#####"]);
        assert_eq!(levels[1].len(), 3);
        assert_eq!(levels[2].len(), 5);
    }

    #[test]
    fn malformed_levels_are_dropped() {
        let boards = parse_levels(LEVELS, &mut StdRng::seed_from_u64(0));
        assert_eq!(boards.len(), 2);

        assert_eq!(boards[0].player, Some(Vec2::new(1, 1)));
        assert_eq!(boards[0].goals, vec![Vec2::new(3, 1)]);
        assert_eq!(boards[0].boxes, vec![Vec2::new(2, 1)]);
        assert_eq!(boards[0].width, 8);

        assert_eq!(boards[1].player, Some(Vec2::new(1, 2)));
        assert_eq!(boards[1].goals, vec![Vec2::new(1, 2), Vec2::new(3, 3)]);
        assert_eq!(boards[1].boxes, vec![Vec2::new(3, 2), Vec2::new(2, 3), Vec2::new(3, 3)]);
        assert_eq!(boards[1].width, 6);
    }

    #[test]
    fn plain_grids_keep_everything() {
        let grids = parse_plain(LEVELS);
        assert_eq!(grids.len(), 3);
        assert_eq!(grids[1].to_rows(), vec!["####", "#@ #", "####"]);
    }

    #[test]
    fn missing_file_is_absent() {
        let path = Path::new("no/such/levels.txt");
        assert!(read_levels_file(path, &mut StdRng::seed_from_u64(0)).unwrap().is_none());
        assert!(read_file_plain(path).unwrap().is_none());
    }

    #[test]
    fn bundled_bases_all_have_a_start() {
        let grids = read_file_plain(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/bases.txt")))
            .unwrap()
            .unwrap();
        assert!(grids.len() >= 5);
        for grid in grids {
            assert!(grid.find(&crate::core::Tile::Player).is_some());
        }
    }
}
