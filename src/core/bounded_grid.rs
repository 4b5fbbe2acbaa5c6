use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Tile, Vec2};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(size: Vec2, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(size.x, size.y);
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area().max(0) as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.extent.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.extent.y
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<T> {
        self.bounds.iter()
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> BoundedGrid<U> {
        BoundedGrid {
            bounds: self.bounds,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Swap every cell equal to `old` for `new`.
    pub fn replace_all(&mut self, old: &T, new: T)
    where
        T: PartialEq + Clone,
    {
        for cell in self.cells.iter_mut().filter(|c| *c == old) {
            *cell = new.clone();
        }
    }

    /// First position holding `value`, scanning rows top to bottom.
    pub fn find(&self, value: &T) -> Option<Vec2>
    where
        T: PartialEq,
    {
        self.positions().find(|pos| &self[pos] == value)
    }

    /// Left-right flip: column `x` moves to `width - x - 1`.
    pub fn flipped_horizontally(&self) -> Self
    where
        T: Clone,
    {
        let width = self.width();
        let cells = self
            .positions()
            .map(|pos| self[&Vec2 { x: width - pos.x - 1, y: pos.y }].clone())
            .collect();
        BoundedGrid {
            bounds: self.bounds,
            cells,
        }
    }
}

impl BoundedGrid<Tile> {
    /// Builds a tile grid from text rows, right-padding short rows with floor.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows.iter().map(|row| row.as_ref().chars().count()).max().unwrap_or(0);
        let mut grid = BoundedGrid::new_with_size(Vec2::new(width as i32, rows.len() as i32), Tile::Floor);
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                grid[&Vec2::new(x as i32, y as i32)] = Tile::from_symbol(symbol);
            }
        }
        grid
    }

    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| self[&Vec2 { x, y }].symbol())
                    .collect()
            })
            .collect()
    }

    pub fn is_wall(&self, pos: &Vec2) -> bool {
        self.get(pos).is_some_and(|tile| tile.is_wall())
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        debug_assert!(self.bounds.contains(index), "{:?} outside {:?}", index, self.bounds.extent);
        &self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        debug_assert!(self.bounds.contains(index), "{:?} outside {:?}", index, self.bounds.extent);
        &mut self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_rows_pads_short_rows_with_floor() {
        let grid = BoundedGrid::from_rows(&["###", "#"]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[&Vec2::new(2, 1)], Tile::Floor);
        assert_eq!(grid.to_rows(), vec!["###".to_string(), "#  ".to_string()]);
    }

    #[test]
    fn get_outside_is_absent() {
        let grid = BoundedGrid::from_rows(&["#@#"]);
        assert_eq!(grid.get(&Vec2::new(-1, -3)), None);
        assert_eq!(grid.get(&Vec2::new(3, 0)), None);
        assert_eq!(grid.get(&Vec2::new(1, 0)), Some(&Tile::Player));
        assert!(!grid.is_wall(&Vec2::new(-1, -10)));
    }

    #[test]
    fn find_scans_row_major() {
        let grid = BoundedGrid::from_rows(&["# o", "o  "]);
        assert_eq!(grid.find(&Tile::Interior), Some(Vec2::new(2, 0)));
        assert_eq!(grid.find(&Tile::Player), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn index_past_row_end_panics() {
        let grid = BoundedGrid::from_rows(&["#@#", "$ ."]);
        let _ = grid[&Vec2::new(3, 0)];
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn index_mut_outside_panics() {
        let mut grid = BoundedGrid::from_rows(&["#@#", "$ ."]);
        grid[&Vec2::new(-1, 1)] = Tile::Wall;
    }

    #[test]
    fn flip_reverses_columns() {
        let grid = BoundedGrid::from_rows(&["#@ .", "$  #"]);
        let flipped = grid.flipped_horizontally();
        assert_eq!(flipped.to_rows(), vec![". @#".to_string(), "#  $".to_string()]);
        assert_eq!(flipped.flipped_horizontally(), grid);
    }
}
