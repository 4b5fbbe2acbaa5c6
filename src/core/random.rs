use rand::distr::StandardUniform;
use rand::prelude::*;
use crate::core::Scenery;

impl Distribution<Scenery> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Scenery {
        *Scenery::all().choose(rng).unwrap_or(&Scenery::Grass)
    }
}
