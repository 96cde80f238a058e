use strum::VariantArray;

use crate::location::Coord;

/// A facing or stepping direction on the board grid.
///
/// Variants are declared in clockwise cycle order, so rotating by one 90°
/// interval moves to the next variant in [`VariantArray::VARIANTS`].
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Direction {
    /// Toward negative `x`.
    Left,
    /// Toward positive `y`.
    Up,
    /// Toward positive `x`.
    Right,
    /// Toward negative `y`.
    Down,
}

impl Direction {
    /// The unit displacement `(dx, dy)` of one step in this direction.
    /// `y` grows upward.
    pub fn displacement(&self) -> (Coord, Coord) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, 1),
            Self::Right => (1, 0),
            Self::Down => (0, -1),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        self.rotated(2)
    }

    /// Rotate this direction clockwise by `intervals` steps of 90°, wrapping.
    pub fn rotated(&self, intervals: u8) -> Self {
        Self::VARIANTS[(self.cycle_index() + intervals as usize) % Self::VARIANTS.len()]
    }

    /// The number of clockwise 90° intervals a side currently facing `moving`
    /// must rotate so that it ends up facing directly into a side facing
    /// `fixed`, i.e. facing `fixed.invert()`.
    ///
    /// Defined for every input pair. When `fixed == moving` the answer is 2, a
    /// half turn, never "already aligned".
    pub fn turns_to_face(fixed: Self, moving: Self) -> u8 {
        let goal = fixed.invert().cycle_index();
        (goal + Self::VARIANTS.len() - moving.cycle_index()) as u8 % Self::VARIANTS.len() as u8
    }

    fn cycle_index(&self) -> usize {
        match self {
            Self::Left => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
        }
    }
}

/// The rotation state of a tile: where its first end currently faces.
///
/// Cyclically ordered; each variant is one clockwise 90° rotation of the
/// previous, matching the [`Direction`] cycle.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub enum Orientation {
    /// End one faces left; the base orientation of a freshly made tile.
    End1Left,
    /// End one faces up.
    End1Up,
    /// End one faces right.
    End1Right,
    /// End one faces down.
    End1Down,
}

impl Orientation {
    /// Rotate clockwise by `intervals` steps of 90°, wrapping.
    pub fn rotated(&self, intervals: u8) -> Self {
        Self::VARIANTS[(self.cycle_index() + intervals as usize) % Self::VARIANTS.len()]
    }

    /// The direction the tile's first end faces in this orientation.
    pub fn end_one_facing(&self) -> Direction {
        match self {
            Self::End1Left => Direction::Left,
            Self::End1Up => Direction::Up,
            Self::End1Right => Direction::Right,
            Self::End1Down => Direction::Down,
        }
    }

    fn cycle_index(&self) -> usize {
        match self {
            Self::End1Left => 0,
            Self::End1Up => 1,
            Self::End1Right => 2,
            Self::End1Down => 3,
        }
    }
}
