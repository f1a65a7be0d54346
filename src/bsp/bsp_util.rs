// src/bsp/bsp_util.rs
// Rectangle helpers specific to BSP partitioning.

/// Orientation of the cut line dividing a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Horizontal cut: children are stacked top/bottom and share the width.
    Horizontal,
    /// Vertical cut: children sit side by side and share the height.
    Vertical,
}

/// An axis-aligned region of the partition tree, in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Space {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Space {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Space { x, y, width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Length of the side that a cut along `axis` divides.
    pub fn extent(&self, axis: SplitAxis) -> u32 {
        match axis {
            SplitAxis::Horizontal => self.height,
            SplitAxis::Vertical => self.width,
        }
    }

    /// Checks whether two spaces share any cell.
    pub fn overlaps(&self, other: &Space) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Checks whether the rectangle `[x, x+w) x [y, y+h)` lies inside this space.
    pub fn contains_rect(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        x >= self.x && y >= self.y && x + width <= self.right() && y + height <= self.bottom()
    }

    /// Cuts the space `offset` tiles from its top (horizontal) or left (vertical) edge.
    pub fn split(&self, axis: SplitAxis, offset: u32) -> (Space, Space) {
        debug_assert!(offset > 0 && offset < self.extent(axis));
        match axis {
            SplitAxis::Horizontal => (
                Space::new(self.x, self.y, self.width, offset),
                Space::new(self.x, self.y + offset, self.width, self.height - offset),
            ),
            SplitAxis::Vertical => (
                Space::new(self.x, self.y, offset, self.height),
                Space::new(self.x + offset, self.y, self.width - offset, self.height),
            ),
        }
    }
}
