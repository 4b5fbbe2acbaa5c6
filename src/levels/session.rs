use rand::Rng;
use tracing::info;
use crate::core::{Board, TileGrid};
use crate::generator::{GenerationError, GeneratorConfig, generate_level};

#[derive(Clone, Debug)]
enum LevelSource {
    Loaded,
    Generated {
        bases: Vec<TileGrid>,
        config: GeneratorConfig,
        next_base: usize,
    },
}

/// Ordered walk over a level pack. Generated sessions grow a new level whenever
/// the player moves past the last one.
#[derive(Clone, Debug)]
pub struct LevelSession {
    levels: Vec<Board>,
    index: usize,
    source: LevelSource,
}

impl LevelSession {
    /// `None` for an empty pack.
    pub fn loaded(levels: Vec<Board>) -> Option<LevelSession> {
        if levels.is_empty() {
            return None;
        }
        Some(LevelSession {
            levels,
            index: 0,
            source: LevelSource::Loaded,
        })
    }

    pub fn generated<R: Rng + ?Sized>(
        bases: Vec<TileGrid>,
        config: GeneratorConfig,
        rng: &mut R,
    ) -> Result<LevelSession, GenerationError> {
        let mut session = LevelSession {
            levels: Vec::new(),
            index: 0,
            source: LevelSource::Generated {
                bases,
                config,
                next_base: 0,
            },
        };
        session.generate_next(rng)?;
        Ok(session)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.source, LevelSource::Generated { .. })
    }

    pub fn current(&self) -> &Board {
        &self.levels[self.index]
    }

    pub fn current_mut(&mut self) -> &mut Board {
        &mut self.levels[self.index]
    }

    /// Moves to the next level. False when a loaded pack is already at its end.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, GenerationError> {
        if self.index + 1 < self.levels.len() {
            self.index += 1;
            return Ok(true);
        }
        if !self.is_generated() {
            return Ok(false);
        }
        self.generate_next(rng)?;
        self.index = self.levels.len() - 1;
        Ok(true)
    }

    /// Moves to the previous level. False at the first one.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn generate_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GenerationError> {
        let LevelSource::Generated { bases, config, next_base } = &mut self.source else {
            return Ok(());
        };
        let level = generate_level(bases, *next_base, config, rng)?;
        *next_base = (level.base_index + 1) % bases.len();
        info!(level = self.levels.len(), base_index = level.base_index, "level added to session");
        self.levels.push(level.board);
        Ok(())
    }
}
