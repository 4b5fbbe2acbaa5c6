use crate::core::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { x, y },
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    /// True when `pos` is inside and not on the outermost ring of cells.
    pub fn contains_strictly(&self, pos: &Vec2) -> bool {
        pos.x >= 1 && pos.x < self.extent.x - 1 && pos.y >= 1 && pos.y < self.extent.y - 1
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }

    /// Row-major walk over every position.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + use<> {
        let extent = self.extent;
        (0..extent.y).flat_map(move |y| (0..extent.x).map(move |x| Vec2 { x, y }))
    }
}
