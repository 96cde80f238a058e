use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::direction::{Direction, Orientation};
use crate::location::Location;

/// A pip count on a tile end.
pub type PipValue = u8;

/// Identifier of a placed tile, issued by the [`Board`](crate::Board) in
/// placement order. The root tile is always `TileId(0)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TileId(pub(crate) usize);

/// The slots a tile's sides occupy.
///
/// Standard tiles own only the end slots; doubles additionally own the two
/// mid (connector) slots, perpendicular to the ends.
#[derive(Copy, Clone, VariantArray, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum SideSlot {
    /// The first value-bearing end.
    End1,
    /// The second value-bearing end.
    End2,
    /// A double's first connector side.
    Mid1,
    /// A double's second connector side.
    Mid2,
}

/// One side of one placed tile; the node type of the board's connection
/// graph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SideId {
    /// The tile owning the side.
    pub tile: TileId,
    /// Which of that tile's sides.
    pub slot: SideSlot,
}

/// The two kinds of tile, distinguished by side count and by which sides an
/// unplaced tile may attach through.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TileKind {
    /// Two ends with independent pip values.
    Standard,
    /// Equal ends plus two valueless connector sides; enters the board
    /// crosswise and only opens its ends once both connectors are taken.
    Double,
}

#[derive(Clone, Debug)]
enum Body {
    Standard {
        values: [PipValue; 2],
        ends: [Direction; 2],
    },
    Double {
        pips: PipValue,
        ends: [Direction; 2],
        mids: [Direction; 2],
    },
}

/// A single domino.
///
/// Created unplaced in base orientation (ends facing left and right, a
/// double's mids facing up and down); rotated and positioned exactly once,
/// by the [`Board`](crate::Board), when placed.
#[derive(Clone, Debug)]
pub struct Tile {
    body: Body,
    orientation: Orientation,
    position: Option<Location>,
}

impl Tile {
    /// A standard tile carrying `first` and `second` pips on its two ends.
    pub fn standard(first: PipValue, second: PipValue) -> Self {
        Self {
            body: Body::Standard {
                values: [first, second],
                ends: [Direction::Left, Direction::Right],
            },
            orientation: Orientation::End1Left,
            position: None,
        }
    }

    /// A double: both ends carry `pips`, plus two valueless mid sides.
    pub fn double(pips: PipValue) -> Self {
        Self {
            body: Body::Double {
                pips,
                ends: [Direction::Left, Direction::Right],
                mids: [Direction::Up, Direction::Down],
            },
            orientation: Orientation::End1Left,
            position: None,
        }
    }

    /// Which kind of tile this is.
    pub fn kind(&self) -> TileKind {
        match self.body {
            Body::Standard { .. } => TileKind::Standard,
            Body::Double { .. } => TileKind::Double,
        }
    }

    /// The tile's current rotation state.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The tile's grid position, assigned at placement.
    pub fn position(&self) -> Option<Location> {
        self.position
    }

    /// The unordered pair of pip values identifying this tile within a set;
    /// both elements are equal for a double.
    pub fn faces(&self) -> UnorderedPair<PipValue> {
        match self.body {
            Body::Standard { values, .. } => UnorderedPair(values[0], values[1]),
            Body::Double { pips, .. } => UnorderedPair(pips, pips),
        }
    }

    /// The slots this tile actually owns.
    pub fn slots(&self) -> &'static [SideSlot] {
        match self.body {
            Body::Standard { .. } => &[SideSlot::End1, SideSlot::End2],
            Body::Double { .. } => SideSlot::VARIANTS,
        }
    }

    /// The slots an unplaced tile may attach to the board through: either end
    /// for a standard tile, either mid for a double.
    pub fn attach_slots(&self) -> &'static [SideSlot] {
        match self.body {
            Body::Standard { .. } => &[SideSlot::End1, SideSlot::End2],
            Body::Double { .. } => &[SideSlot::Mid1, SideSlot::Mid2],
        }
    }

    /// The direction `slot` currently faces, or `None` if this tile does not
    /// own that slot.
    pub fn facing(&self, slot: SideSlot) -> Option<Direction> {
        match (&self.body, slot) {
            (Body::Standard { ends, .. } | Body::Double { ends, .. }, SideSlot::End1) => {
                Some(ends[0])
            }
            (Body::Standard { ends, .. } | Body::Double { ends, .. }, SideSlot::End2) => {
                Some(ends[1])
            }
            (Body::Double { mids, .. }, SideSlot::Mid1) => Some(mids[0]),
            (Body::Double { mids, .. }, SideSlot::Mid2) => Some(mids[1]),
            _ => None,
        }
    }

    /// The intrinsic pip value of `slot`. Mid sides carry no value of their
    /// own.
    pub fn pip_value(&self, slot: SideSlot) -> Option<PipValue> {
        match (&self.body, slot) {
            (Body::Standard { values, .. }, SideSlot::End1) => Some(values[0]),
            (Body::Standard { values, .. }, SideSlot::End2) => Some(values[1]),
            (Body::Double { pips, .. }, SideSlot::End1 | SideSlot::End2) => Some(*pips),
            _ => None,
        }
    }

    /// The value `slot` plays as when matching: intrinsic for ends, derived
    /// from the double's pips for mids.
    pub fn playable_value(&self, slot: SideSlot) -> Option<PipValue> {
        match (&self.body, slot) {
            (Body::Double { pips, .. }, SideSlot::Mid1 | SideSlot::Mid2) => Some(*pips),
            _ => self.pip_value(slot),
        }
    }

    /// Advance the orientation and every side facing together by `intervals`
    /// clockwise 90° steps. Rotations summing to a multiple of 4 restore the
    /// original state.
    pub(crate) fn rotate(&mut self, intervals: u8) {
        self.orientation = self.orientation.rotated(intervals);
        match &mut self.body {
            Body::Standard { ends, .. } => {
                for facing in ends {
                    *facing = facing.rotated(intervals);
                }
            }
            Body::Double { ends, mids, .. } => {
                for facing in ends.iter_mut().chain(mids.iter_mut()) {
                    *facing = facing.rotated(intervals);
                }
            }
        }
    }

    pub(crate) fn set_position(&mut self, location: Location) {
        self.position = Some(location);
    }
}
