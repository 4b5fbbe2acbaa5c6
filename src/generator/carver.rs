use rand::Rng;
use tracing::debug;
use crate::core::grid_utils::{flood_fill, flood_fill_through_goals, mark_edges};
use crate::core::{Tile, TileGrid, Vec2};
use crate::generator::planter::{plant_boxes, plant_goals};
use crate::generator::{GenerationError, GeneratorConfig, Template};

/// One generation run over a single base template. Consumed by [`CaveCarver::generate_board`].
#[derive(Clone, Debug)]
pub struct CaveCarver {
    grid: TileGrid,
    start: Vec2,
    templates: Vec<Template>,
    config: GeneratorConfig,
    goal_count: usize,
    box_count: usize,
}

impl CaveCarver {
    pub fn new(base: &TileGrid, config: &GeneratorConfig) -> Result<CaveCarver, GenerationError> {
        let start = base
            .find(&Tile::Player)
            .or_else(|| base.find(&Tile::PlayerOnGoal))
            .ok_or(GenerationError::MissingStart)?;
        Ok(CaveCarver {
            grid: base.clone(),
            start,
            templates: config.templates(),
            config: config.clone(),
            goal_count: 0,
            box_count: 0,
        })
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn goal_count(&self) -> usize {
        self.goal_count
    }

    pub fn box_count(&self) -> usize {
        self.box_count
    }

    /// Runs the whole pipeline and returns the level as text rows.
    pub fn generate_board<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<Vec<String>, GenerationError> {
        self.carve(rng);
        self.plant_goals(rng)?;
        self.plant_boxes(rng)?;
        Ok(self.finalize())
    }

    /// Turns the base into a sealed cave: interior cells are [`Tile::Interior`], the
    /// walls hugging it stay, every other wall is thinned away to floor.
    pub fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = self.grid.map(|tile| if tile.is_wall() { Tile::Wall } else { Tile::Floor });
        flood_fill(&mut self.grid, self.start, Tile::Floor, Tile::Interior);
        self.grid.replace_all(&Tile::Floor, Tile::Wall);

        for template in &self.templates {
            let stamped = template.stamp(&mut self.grid, self.start, self.config.max_stamp_attempts, rng);
            if stamped.is_none() {
                debug!(width = template.width(), height = template.height(), "template skipped");
            }
        }

        // the player always spawns on the first interior cell
        if let Some(start) = self.grid.find(&Tile::Interior) {
            self.start = start;
        }
        flood_fill(&mut self.grid, self.start, Tile::Interior, Tile::Floor);

        // the first pass only tells walls touching the interior from the rest
        mark_edges(&mut self.grid, self.start, Tile::Wall, Tile::Boundary);
        self.grid.replace_all(&Tile::Wall, Tile::Floor);
        flood_fill(&mut self.grid, self.start, Tile::Interior, Tile::Floor);
        mark_edges(&mut self.grid, self.start, Tile::Boundary, Tile::Wall);
    }

    fn plant_goals<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GenerationError> {
        let min_goals = self.config.min_goals;
        for attempt in 1..=self.config.max_stage_attempts {
            let mut scratch = self.grid.clone();
            let goals = plant_goals(&mut scratch, self.start, self.config.goal_percent, rng);
            if goals >= min_goals {
                self.grid = scratch;
                self.goal_count = goals;
                return Ok(());
            }
            debug!(attempt, goals, min_goals, "too few goals, retrying");
        }
        Err(GenerationError::GoalsUnreachable {
            min_goals,
            attempts: self.config.max_stage_attempts,
        })
    }

    fn plant_boxes<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GenerationError> {
        flood_fill_through_goals(&mut self.grid, self.start, Tile::Floor, Tile::Interior);

        for attempt in 1..=self.config.max_stage_attempts {
            let mut scratch = self.grid.clone();
            let boxes = plant_boxes(&mut scratch, self.start, self.goal_count, self.config.box_percent, rng);
            if boxes >= self.goal_count {
                self.grid = scratch;
                self.box_count = boxes;
                return Ok(());
            }
            debug!(attempt, boxes, goals = self.goal_count, "too few boxes, retrying");
        }
        Err(GenerationError::BoxesUnreachable {
            goals: self.goal_count,
            attempts: self.config.max_stage_attempts,
        })
    }

    fn finalize(mut self) -> Vec<String> {
        self.grid.replace_all(&Tile::Interior, Tile::Floor);
        self.grid.replace_all(&Tile::FilledGoal, Tile::Goal);
        self.grid[&self.start] = if self.grid[&self.start] == Tile::Goal {
            Tile::PlayerOnGoal
        } else {
            Tile::Player
        };
        self.grid.to_rows()
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use super::*;
    use crate::test::test_util::assert_rows_match;

    fn carve(rows: &[&str], seed: u64) -> CaveCarver {
        let mut carver = CaveCarver::new(&TileGrid::from_rows(rows), &GeneratorConfig::default()).unwrap();
        carver.carve(&mut StdRng::seed_from_u64(seed));
        carver
    }

    #[test]
    fn missing_start_is_an_error() {
        let result = CaveCarver::new(&TileGrid::from_rows(&["####", "#  #", "####"]), &GeneratorConfig::default());
        assert_eq!(result.err(), Some(GenerationError::MissingStart));
    }

    #[test]
    fn one_row_cave_keeps_its_interior() {
        let carver = carve(&["#####", "#@  #", "#####"], 0);
        assert_eq!(carver.start(), Vec2::new(1, 1));
        assert_rows_match(carver.grid(), &[
            " ### ",
            "#ooo#",
            " ### ",
        ]);
    }

    #[test]
    fn ring_template_leaves_a_pillar() {
        let carver = carve(&[
            "#####",
            "#@  #",
            "#   #",
            "#   #",
            "#####",
        ], 17);
        assert_rows_match(carver.grid(), &[
            " ### ",
            "#ooo#",
            "#o#o#",
            "#ooo#",
            " ### ",
        ]);
    }

    #[test]
    fn start_moves_to_first_interior_cell() {
        let mut config = GeneratorConfig::default();
        config.templates.clear();
        let base = TileGrid::from_rows(&[
            "######",
            "#    #",
            "#  @ #",
            "######",
        ]);
        let mut carver = CaveCarver::new(&base, &config).unwrap();
        assert_eq!(carver.start(), Vec2::new(3, 2));
        carver.carve(&mut StdRng::seed_from_u64(0));
        assert_eq!(carver.start(), Vec2::new(1, 1));
        assert_rows_match(carver.grid(), &[
            " #### ",
            "#oooo#",
            "#oooo#",
            " #### ",
        ]);
    }

    #[test]
    fn unreachable_floor_is_sealed_and_thinned() {
        let mut config = GeneratorConfig::default();
        config.templates.clear();
        let base = TileGrid::from_rows(&[
            "########",
            "#@ #   #",
            "#  # $ #",
            "########",
        ]);
        let mut carver = CaveCarver::new(&base, &config).unwrap();
        carver.carve(&mut StdRng::seed_from_u64(0));
        assert_rows_match(carver.grid(), &[
            " ##     ",
            "#oo#    ",
            "#oo#    ",
            " ##     ",
        ]);
    }

    #[test]
    fn tiny_cave_cannot_be_populated() {
        let mut config = GeneratorConfig::default();
        config.max_stage_attempts = 10;
        let carver = CaveCarver::new(&TileGrid::from_rows(&["#####", "#@  #", "#####"]), &config).unwrap();
        assert!(carver.generate_board(&mut StdRng::seed_from_u64(3)).is_err());
    }

    #[test]
    fn generated_rows_are_populated() {
        let base = TileGrid::from_rows(&[
            "##########",
            "#@       #",
            "#        #",
            "#   ##   #",
            "#        #",
            "#        #",
            "##########",
        ]);
        let config = GeneratorConfig::default();
        for seed in 0..5 {
            let rows = CaveCarver::new(&base, &config)
                .unwrap()
                .generate_board(&mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert_eq!(rows.len(), 7);
            assert!(rows.iter().all(|row| row.chars().count() == 10));

            let text: String = rows.concat();
            let count = |symbols: &[char]| text.chars().filter(|c| symbols.contains(c)).count();
            assert_eq!(count(&['@', '+']), 1);
            assert!(count(&['.', '*', '+']) >= 3);
            assert!(count(&['$', '*']) >= count(&['.', '*', '+']));
            assert_eq!(count(&['o', ',', '%']), 0);
        }
    }
}
