use crate::direction::Direction;

/// Signed grid coordinate component.
pub type Coord = isize;

/// A location `(x, y)` on the board grid.
///
/// The root tile sits at `Location(0, 0)`; `x` grows rightward and `y` grows
/// upward. The board is sparse, so coordinates may go negative freely.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) const ORIGIN: Self = Self(0, 0);

    pub(crate) fn offset_by(self, rhs: (Coord, Coord)) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }

    /// The neighboring location one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self.offset_by(direction.displacement())
    }
}
