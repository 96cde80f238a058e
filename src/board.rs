use std::collections::{BTreeSet, HashMap};
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use tracing::{debug, trace};

use crate::direction::Direction;
use crate::location::Location;
use crate::tile::{PipValue, SideId, SideSlot, Tile, TileId, TileKind};

/// Reasons a placement is refused.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlaceError {
    /// The named board side is not currently an open endpoint.
    InvalidEndpoint,
    /// The incoming tile is already placed, or the named side of it is not
    /// one it can attach through.
    InvalidAttachPoint,
    /// The two sides being joined play different values. This is the ordinary
    /// "illegal move" rejection; choose another move and retry.
    ValueMismatch,
    /// The target grid cell is already taken. Tree-shaped placement keeps
    /// this from arising in normal play, so it signals a broken invariant
    /// rather than a move worth retrying.
    PositionOccupied,
}

impl Display for PlaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEndpoint => write!(f, "board side is not an open endpoint"),
            Self::InvalidAttachPoint => write!(f, "tile side cannot be attached through"),
            Self::ValueMismatch => write!(f, "joined sides play different values"),
            Self::PositionOccupied => write!(f, "target grid position is already occupied"),
        }
    }
}

impl std::error::Error for PlaceError {}

/// A refused placement, carrying the tile back to the caller untouched so a
/// different move can be tried.
#[derive(Debug)]
pub struct RejectedPlay {
    /// The tile that was not placed, exactly as passed in.
    pub tile: Tile,
    /// Why the placement was refused.
    pub reason: PlaceError,
}

impl Display for RejectedPlay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "placement rejected: {}", self.reason)
    }
}

impl std::error::Error for RejectedPlay {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

/// The tile connection graph and placement engine.
///
/// Owns every placed [`Tile`], the side-to-side link table, the set of open
/// endpoints, and the sparse grid occupancy map. All mutation goes through
/// [`place_root`](Self::place_root) and [`place`](Self::place), which
/// validate fully before committing; everything else is read-only and safe
/// to drive move search with.
#[derive(Default)]
pub struct Board {
    tiles: Vec<Tile>,
    root: Option<TileId>,
    links: UnGraphMap<SideId, ()>,
    endpoints: BTreeSet<SideId>,
    occupancy: HashMap<Location, TileId>,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tile with the given id, if it was placed on this board.
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    /// All placed tiles with their ids, in placement order.
    pub fn tiles(&self) -> impl ExactSizeIterator<Item = (TileId, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (TileId(index), tile))
    }

    /// All placed tiles in placement order.
    pub fn placed_tiles(&self) -> impl ExactSizeIterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// How many tiles have been placed.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The first tile placed, if any.
    pub fn root(&self) -> Option<TileId> {
        self.root
    }

    /// The grid position of a placed tile.
    pub fn position_of(&self, id: TileId) -> Option<Location> {
        self.tile(id).and_then(Tile::position)
    }

    /// The tile occupying `location`, if any.
    pub fn tile_at(&self, location: Location) -> Option<TileId> {
        self.occupancy.get(&location).copied()
    }

    /// Read-only view of the open endpoint set, in deterministic order.
    pub fn open_endpoints(&self) -> impl Iterator<Item = SideId> + '_ {
        self.endpoints.iter().copied()
    }

    /// How many endpoints are currently open.
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether `side` is currently an open endpoint.
    pub fn is_open(&self, side: SideId) -> bool {
        self.endpoints.contains(&side)
    }

    /// The side `side` is linked to, if any. Links are always mutual:
    /// `connection_of(a) == Some(b)` implies `connection_of(b) == Some(a)`.
    pub fn connection_of(&self, side: SideId) -> Option<SideId> {
        if self.links.contains_node(side) {
            self.links.neighbors(side).next()
        } else {
            None
        }
    }

    /// The matching value `side` plays as, if the side exists.
    pub fn playable_value(&self, side: SideId) -> Option<PipValue> {
        self.tile(side.tile)
            .and_then(|tile| tile.playable_value(side.slot))
    }

    /// Whether a double has both mid sides linked, opening its ends for
    /// play. Always false for standard tiles.
    pub fn is_capped(&self, id: TileId) -> bool {
        self.tile(id).is_some_and(|tile| {
            tile.kind() == TileKind::Double
                && [SideSlot::Mid1, SideSlot::Mid2]
                    .into_iter()
                    .all(|slot| self.connection_of(SideId { tile: id, slot }).is_some())
        })
    }

    /// The sides of a placed tile currently eligible to receive a new tile.
    ///
    /// A standard tile offers its unlinked ends. A double offers its unlinked
    /// mids until capped, and only then its unlinked ends.
    pub fn open_sides(&self, id: TileId) -> Vec<SideId> {
        let Some(tile) = self.tile(id) else {
            return Vec::new();
        };
        let slots: &[SideSlot] = match tile.kind() {
            TileKind::Standard => &[SideSlot::End1, SideSlot::End2],
            TileKind::Double => {
                if self.is_capped(id) {
                    &[SideSlot::End1, SideSlot::End2]
                } else {
                    &[SideSlot::Mid1, SideSlot::Mid2]
                }
            }
        };
        slots
            .iter()
            .map(|slot| SideId { tile: id, slot: *slot })
            .filter(|side| self.connection_of(*side).is_none())
            .collect_vec()
    }

    /// This tile's current contribution to score exposure.
    ///
    /// A standard tile exposes the sum of its unlinked end values. A double
    /// exposes nothing until capped, then twice its pip value.
    pub fn value_in_play(&self, id: TileId) -> u32 {
        let Some(tile) = self.tile(id) else {
            return 0;
        };
        match tile.kind() {
            TileKind::Standard => [SideSlot::End1, SideSlot::End2]
                .into_iter()
                .filter(|&slot| self.connection_of(SideId { tile: id, slot }).is_none())
                .filter_map(|slot| tile.pip_value(slot))
                .map(u32::from)
                .sum(),
            TileKind::Double => {
                if self.is_capped(id) {
                    2 * u32::from(tile.pip_value(SideSlot::End1).unwrap_or(0))
                } else {
                    0
                }
            }
        }
    }

    /// The board score: the sum of [`value_in_play`](Self::value_in_play)
    /// over the distinct tiles reachable through at least one open endpoint.
    /// Each touched tile counts once however many of its sides are open.
    pub fn score(&self) -> u32 {
        self.endpoints
            .iter()
            .map(|side| side.tile)
            .unique()
            .map(|id| self.value_in_play(id))
            .sum()
    }

    /// Place the first tile at the origin and seed the open endpoint set.
    ///
    /// A double root is rotated one interval out of base orientation before
    /// endpoints are seeded, so it enters crosswise: ends vertical and
    /// waiting for the cap, mids branching horizontally.
    ///
    /// # Errors
    ///
    /// [`PlaceError::InvalidAttachPoint`] if `tile` already carries a
    /// position, or [`PlaceError::PositionOccupied`] if any tile has already
    /// been placed; the tile rides back in the [`RejectedPlay`].
    pub fn place_root(&mut self, mut tile: Tile) -> Result<TileId, RejectedPlay> {
        if tile.position().is_some() {
            return Err(RejectedPlay {
                tile,
                reason: PlaceError::InvalidAttachPoint,
            });
        }
        if !self.tiles.is_empty() {
            return Err(RejectedPlay {
                tile,
                reason: PlaceError::PositionOccupied,
            });
        }

        if tile.kind() == TileKind::Double {
            tile.rotate(1);
        }
        tile.set_position(Location::ORIGIN);

        let id = TileId(0);
        self.tiles.push(tile);
        self.root = Some(id);
        self.occupancy.insert(Location::ORIGIN, id);
        for slot in self.tiles[id.0].slots() {
            self.links.add_node(SideId { tile: id, slot: *slot });
        }
        for side in self.open_sides(id) {
            self.endpoints.insert(side);
        }

        debug!(?id, "placed root tile");
        Ok(id)
    }

    /// Attach `tile` to the board, joining its `tile_side` to the open
    /// endpoint `board_side` and rotating and positioning the tile to fit.
    ///
    /// Validation happens strictly before any mutation, in this order:
    /// endpoint membership, tile not already placed, attach-slot
    /// eligibility, value match, target cell vacancy. On success the board side leaves the endpoint set, the two
    /// sides are linked mutually, and the open sides of both affected tiles
    /// rejoin the endpoint set; capping a double surfaces its ends here.
    ///
    /// # Errors
    ///
    /// Any [`PlaceError`], wrapped in a [`RejectedPlay`] returning the
    /// unmodified tile.
    pub fn place(
        &mut self,
        mut tile: Tile,
        board_side: SideId,
        tile_side: SideSlot,
    ) -> Result<TileId, RejectedPlay> {
        if !self.endpoints.contains(&board_side) {
            return Err(RejectedPlay {
                tile,
                reason: PlaceError::InvalidEndpoint,
            });
        }
        if tile.position().is_some() || !tile.attach_slots().contains(&tile_side) {
            return Err(RejectedPlay {
                tile,
                reason: PlaceError::InvalidAttachPoint,
            });
        }

        // endpoint membership guarantees the host tile exists and is placed
        let host = &self.tiles[board_side.tile.0];
        let (Some(host_value), Some(host_facing), Some(host_position)) = (
            host.playable_value(board_side.slot),
            host.facing(board_side.slot),
            host.position(),
        ) else {
            return Err(RejectedPlay {
                tile,
                reason: PlaceError::InvalidEndpoint,
            });
        };
        let (Some(tile_value), Some(tile_facing)) =
            (tile.playable_value(tile_side), tile.facing(tile_side))
        else {
            return Err(RejectedPlay {
                tile,
                reason: PlaceError::InvalidAttachPoint,
            });
        };

        if host_value != tile_value {
            return Err(RejectedPlay {
                tile,
                reason: PlaceError::ValueMismatch,
            });
        }

        let target = host_position.step(host_facing);
        if self.occupancy.contains_key(&target) {
            return Err(RejectedPlay {
                tile,
                reason: PlaceError::PositionOccupied,
            });
        }

        // commit
        let intervals = Direction::turns_to_face(host_facing, tile_facing);
        tile.rotate(intervals);
        tile.set_position(target);

        let id = TileId(self.tiles.len());
        let attach_side = SideId {
            tile: id,
            slot: tile_side,
        };
        self.tiles.push(tile);
        self.occupancy.insert(target, id);
        self.endpoints.remove(&board_side);
        for slot in self.tiles[id.0].slots() {
            self.links.add_node(SideId { tile: id, slot: *slot });
        }
        self.links.add_edge(board_side, attach_side, ());

        for side in self
            .open_sides(board_side.tile)
            .into_iter()
            .chain(self.open_sides(id))
        {
            trace!(?side, "endpoint open");
            self.endpoints.insert(side);
        }

        debug!(?id, position = ?target, rotation = intervals, "placed tile");
        Ok(id)
    }
}
