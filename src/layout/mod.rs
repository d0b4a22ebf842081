//! Physical print layout: raster-ordered tiles into 2x2 print groups.
//!
//! The plotter bed holds four notes at a time, arranged two by two. Tiles are
//! consumed in raster order, four per [`PrintGroup`]; each slot of a group
//! carries a translated copy of its tile's strokes, shifted to that slot's
//! corner of the bed. A short final batch is padded with explicit empty slots
//! so every group has the full slot count.
//!
//! [`flatten_group`] then merges a group's slots into the single stroke
//! sequence the emitter walks: a stable sort by (row, leftmost column) gives
//! a top-to-bottom, left-to-right draw order across the whole 2x2 area, with
//! ties kept in slot order.

mod flatten;
mod group;

#[cfg(test)]
mod tests;

pub use flatten::flatten_group;
pub use group::{group_tiles, PrintGroup, PrintSlot};

pub(crate) use group::check_group_size;
