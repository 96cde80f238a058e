#![warn(missing_docs)]

//! # `muggins`
//!
//! The tile connection graph and placement engine for the domino game
//! All Fives, also called Muggins.
//! Build a [`Pool`] for a pip value range, draw tiles from it, and play them
//! onto a [`Board`]: [`Board::place_root`] seeds the layout and
//! [`Board::place`] attaches a tile to an open endpoint, rotating and
//! positioning it to fit. After every move [`Board::score`] reports the total
//! value exposed at the open ends of the layout.
//!
//! The board validates every move fully before mutating anything. A rejected
//! move comes back as a [`RejectedPlay`] carrying both the reason and the
//! untouched [`Tile`], so a driver can simply try a different move.
//!
//! # Internals
//!
//! Placed tiles live in an arena indexed by [`TileId`]; a side of a placed
//! tile is addressed by [`SideId`]. Side-to-side connections are held in an
//! undirected [`petgraph`] graph map owned by the board, which sets both
//! directions of every link atomically; tiles themselves never hold
//! references to each other, so the connection graph stays an acyclic tree by
//! construction. Double tiles enter the board crosswise through their
//! connector sides and only open their value-bearing ends once both
//! connectors are taken ("capped").
//!
//! Rendering, turn sequencing, and player strategy are deliberately outside
//! this crate; they drive it through the read-only query surface
//! ([`Board::open_endpoints`], [`Board::tiles`], [`Board::position_of`],
//! [`Board::connection_of`], ...).

pub use board::{Board, PlaceError, RejectedPlay};
pub use direction::{Direction, Orientation};
pub use location::{Coord, Location};
pub use pool::{Pool, SupplyError};
pub use tile::{PipValue, SideId, SideSlot, Tile, TileId, TileKind};

pub(crate) mod board;
pub(crate) mod direction;
pub(crate) mod location;
pub(crate) mod pool;
pub(crate) mod tile;
