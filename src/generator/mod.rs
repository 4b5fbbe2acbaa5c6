mod carver;
mod config;
mod error;
mod oracle;
mod planter;
mod template;

pub use carver::CaveCarver;
pub use config::{ConfigError, GeneratorConfig};
pub use error::GenerationError;
pub use oracle::{can_place_box, ends_in_corner};
pub use planter::{plant_boxes, plant_goals};
pub use template::Template;

use rand::Rng;
use tracing::{info, warn};
use crate::core::{Board, TileGrid};
use crate::levels::board_from_lines;

/// A generated level that passed the same checks as a hand-authored one.
#[derive(Clone, Debug)]
pub struct GeneratedLevel {
    pub rows: Vec<String>,
    pub board: Board,
    /// index of the base template the level was carved from
    pub base_index: usize,
}

/// Carves levels from `bases`, beginning at `start_index` and moving on to the next base
/// (wrapping around) whenever one fails, until a level is accepted or every base has
/// been tried once.
pub fn generate_level<R: Rng + ?Sized>(
    bases: &[TileGrid],
    start_index: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GeneratedLevel, GenerationError> {
    if bases.is_empty() {
        return Err(GenerationError::NoBaseTemplates);
    }

    for offset in 0..bases.len() {
        let base_index = (start_index + offset) % bases.len();
        let rows = match CaveCarver::new(&bases[base_index], config)
            .and_then(|carver| carver.generate_board(&mut *rng))
        {
            Ok(rows) => rows,
            Err(err) => {
                warn!(base_index, error = %err, "base template failed");
                continue;
            }
        };

        let board = board_from_lines(&rows, config.decoration_percent, rng);
        if !board.is_correct() {
            warn!(base_index, "generated level rejected");
            continue;
        }
        info!(
            base_index,
            goals = board.goals.len(),
            boxes = board.boxes.len(),
            "level generated"
        );
        return Ok(GeneratedLevel { rows, board, base_index });
    }

    Err(GenerationError::Exhausted { templates: bases.len() })
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use super::*;
    use crate::levels::parse_levels;

    fn bases() -> Vec<TileGrid> {
        let hall = TileGrid::from_rows(&[
            "############",
            "#@         #",
            "#          #",
            "#    ##    #",
            "#          #",
            "#          #",
            "############",
        ]);
        vec![
            TileGrid::from_rows(&["#####", "#@  #", "#####"]),
            hall.clone(),
            hall,
        ]
    }

    #[test]
    fn no_bases_is_an_error() {
        let result = generate_level(&[], 0, &GeneratorConfig::default(), &mut StdRng::seed_from_u64(0));
        assert_eq!(result.err(), Some(GenerationError::NoBaseTemplates));
    }

    #[test]
    fn failing_base_moves_on_to_the_next() {
        let mut config = GeneratorConfig::default();
        config.max_stage_attempts = 200;
        let level = generate_level(&bases(), 0, &config, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_ne!(level.base_index, 0);
        assert!(level.board.is_correct());
    }

    #[test]
    fn every_base_failing_is_terminal() {
        let bases = vec![
            TileGrid::from_rows(&["#####", "#@  #", "#####"]),
            TileGrid::from_rows(&["####", "#  #", "####"]),
        ];
        let result = generate_level(&bases, 1, &GeneratorConfig::default(), &mut StdRng::seed_from_u64(0));
        assert_eq!(result.err(), Some(GenerationError::Exhausted { templates: 2 }));
    }

    #[test]
    fn generated_rows_round_trip_through_the_parser() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..5 {
            let level = generate_level(&bases(), 1, &GeneratorConfig::default(), &mut rng).unwrap();
            let text = level.rows.join("\n");
            let boards = parse_levels(&text, &mut rng);
            assert_eq!(boards.len(), 1);
            let board = &boards[0];
            assert!(board.is_correct());
            assert!(!board.goals.is_empty());
            assert!(board.boxes.len() >= board.goals.len());
            assert!(board.boxes.iter().any(|b| !board.goals.contains(b)));
            assert_eq!(board.goals, level.board.goals);
            assert_eq!(board.boxes, level.board.boxes);
        }
    }
}
