use crate::config::{ConfigError, PlotConfig};
use crate::tiles::TileSet;
use crate::types::LineSegment;
use log::debug;

/// Slot positions on the 2x2 bed, as multiples of the tile dimensions.
/// Slot 0 is the top-left corner, then left-to-right, top-to-bottom.
const SLOT_UNITS: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// One bed position within a print group.
///
/// `tile_index` is the originating tile's raster index, or `None` for the
/// explicit padding slots of a short final group. Segments are copies of the
/// tile's strokes, already shifted into group coordinates.
#[derive(Clone, Debug)]
pub struct PrintSlot {
    pub tile_index: Option<usize>,
    pub segments: Vec<LineSegment>,
}

impl PrintSlot {
    fn empty() -> Self {
        Self {
            tile_index: None,
            segments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tile_index.is_none()
    }
}

/// One physical print: up to `group_size` tiles placed on the bed together.
#[derive(Clone, Debug)]
pub struct PrintGroup {
    pub slots: Vec<PrintSlot>,
}

impl PrintGroup {
    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn segment_count(&self) -> usize {
        self.slots.iter().map(|s| s.segments.len()).sum()
    }
}

/// Reject group sizes the physical offset table cannot place.
pub(crate) fn check_group_size(config: &PlotConfig) -> Result<(), ConfigError> {
    if config.group_size < 1 {
        return Err(ConfigError::InvalidGroupSize {
            requested: config.group_size,
        });
    }
    if config.group_size > SLOT_UNITS.len() {
        return Err(ConfigError::MissingSlotOffset {
            slot: config.group_size - 1,
            table_len: SLOT_UNITS.len(),
        });
    }
    Ok(())
}

/// Partition the tile set into print groups and place each tile at its slot.
///
/// Tiles are taken in raster order, `group_size` per group; the final group
/// is padded with empty slots rather than left short. Each slot's strokes are
/// translated copies, so the tile set keeps its tile-local coordinates. An
/// empty tile set yields zero groups.
pub fn group_tiles(tiles: &TileSet, config: &PlotConfig) -> Result<Vec<PrintGroup>, ConfigError> {
    check_group_size(config)?;

    let groups: Vec<PrintGroup> = tiles
        .tiles()
        .chunks(config.group_size)
        .map(|batch| {
            let mut slots: Vec<PrintSlot> = batch
                .iter()
                .enumerate()
                .map(|(slot, tile)| {
                    let (ux, uy) = SLOT_UNITS[slot];
                    let dx = ux * config.tile_width as i32;
                    let dy = uy * config.tile_height as i32;
                    PrintSlot {
                        tile_index: Some(tile.index),
                        segments: tile
                            .segments
                            .iter()
                            .map(|seg| seg.translated(dx, dy))
                            .collect(),
                    }
                })
                .collect();
            slots.resize_with(config.group_size, PrintSlot::empty);
            PrintGroup { slots }
        })
        .collect();

    debug!(
        "group_tiles: {} tiles -> {} groups of {}",
        tiles.len(),
        groups.len(),
        config.group_size
    );
    Ok(groups)
}
