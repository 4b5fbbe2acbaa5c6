/// Fewest goals a generated level may have.
pub const MIN_GOALS: usize = 3;
/// Chance, in percent, that an interior cell becomes a goal.
pub const GOAL_PERCENT: u32 = 7;
/// Chance, in percent, that the box planter tries to put a box on a cell.
pub const BOX_PERCENT: u32 = 20;
/// Chance, in percent, that an outside floor cell gets scenery.
pub const DECORATION_PERCENT: u32 = 20;
/// Cap on whole-stage retries of the goal and box planters.
pub const MAX_STAGE_ATTEMPTS: usize = 1000;
/// Cap on offset re-rolls for one template.
pub const MAX_STAMP_ATTEMPTS: usize = 100;

pub const DEFAULT_TEMPLATES: &[&[&str]] = &[
    &["ooo", "ooo"],
    &["oo", "oo"],
    &["ooo", "o#o", "ooo"],
];
