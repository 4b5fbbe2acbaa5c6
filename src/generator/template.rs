use rand::Rng;
use tracing::debug;
use crate::core::{TileGrid, Vec2};

/// Small obstacle pattern glued onto a cave while carving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    grid: TileGrid,
}

impl Template {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Template {
        Template {
            grid: TileGrid::from_rows(rows),
        }
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Copies the template onto `target` with its top-left corner at `position`.
    /// Cells falling outside the target are dropped.
    pub fn glue_on(&self, target: &mut TileGrid, position: Vec2) {
        for offset in self.grid.positions() {
            let pos = position + offset;
            if target.contains(&pos) {
                target[&pos] = self.grid[&offset];
            }
        }
    }

    /// Glues the template at a random offset that keeps the outer wall ring intact and
    /// leaves `start` walkable. Returns the offset used, or `None` if no offset was
    /// found within `max_attempts` rolls.
    pub fn stamp<R: Rng + ?Sized>(
        &self,
        target: &mut TileGrid,
        start: Vec2,
        max_attempts: usize,
        rng: &mut R,
    ) -> Option<Vec2> {
        let max_x = target.width() - self.width() - 1;
        let max_y = target.height() - self.height() - 1;
        if max_x < 1 || max_y < 1 {
            debug!(
                template_width = self.width(),
                template_height = self.height(),
                "grid too small for template"
            );
            return None;
        }

        for _ in 0..max_attempts {
            let position = Vec2::new(rng.random_range(1..=max_x), rng.random_range(1..=max_y));
            if self.fits(target, position, start) {
                self.glue_on(target, position);
                return Some(position);
            }
            debug!(x = position.x, y = position.y, "template would bury the start, re-rolling");
        }
        None
    }

    fn fits(&self, target: &TileGrid, position: Vec2, start: Vec2) -> bool {
        self.grid.positions().all(|offset| {
            let pos = position + offset;
            target.size().contains_strictly(&pos) && !(pos == start && self.grid[&offset].is_wall())
        })
    }
}
