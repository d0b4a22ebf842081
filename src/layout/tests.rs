use super::{flatten_group, group_tiles, PrintGroup, PrintSlot};
use crate::config::{ConfigError, PlotConfig};
use crate::tiles::{Tile, TileSet};
use crate::types::{LineSegment, Point};

fn config(tile_width: u32, tile_height: u32, group_size: usize) -> PlotConfig {
    PlotConfig {
        tile_width,
        tile_height,
        group_size,
        ..Default::default()
    }
}

fn seg(x: i32, y0: i32, y1: i32) -> LineSegment {
    LineSegment::new(Point::new(x, y0), Point::new(x, y1))
}

fn tile_set(count: usize, segments: Vec<LineSegment>) -> TileSet {
    TileSet::from_tiles(
        (0..count)
            .map(|index| Tile {
                index,
                segments: segments.clone(),
            })
            .collect(),
    )
}

#[test]
fn group_count_is_ceil_of_tiles_over_group_size() {
    let cfg = config(3, 5, 4);
    for (tiles, expected_groups) in [(0, 0), (1, 1), (4, 1), (5, 2), (9, 3)] {
        let set = tile_set(tiles, vec![]);
        let groups = group_tiles(&set, &cfg).unwrap();
        assert_eq!(groups.len(), expected_groups, "{tiles} tiles");
        let occupied: usize = groups.iter().map(|g| g.occupied_slots()).sum();
        assert_eq!(occupied, tiles);
        for group in &groups {
            assert_eq!(group.slots.len(), 4);
        }
    }
}

#[test]
fn short_final_group_is_padded_with_empty_slots() {
    let cfg = config(3, 5, 4);
    let set = tile_set(6, vec![seg(0, 0, 1)]);
    let groups = group_tiles(&set, &cfg).unwrap();
    assert_eq!(groups.len(), 2);
    let last = &groups[1];
    assert_eq!(last.occupied_slots(), 2);
    assert!(last.slots[2].is_empty());
    assert!(last.slots[3].is_empty());
    assert!(last.slots[2].segments.is_empty());
}

#[test]
fn slot_offsets_follow_the_two_by_two_layout() {
    let cfg = config(3, 5, 4);
    let local = seg(0, 0, 2);
    let set = tile_set(4, vec![local]);
    let groups = group_tiles(&set, &cfg).unwrap();
    let group = &groups[0];

    assert_eq!(group.slots[0].segments[0], local);
    assert_eq!(group.slots[1].segments[0], local.translated(3, 0));
    assert_eq!(group.slots[2].segments[0], local.translated(0, 5));
    assert_eq!(group.slots[3].segments[0], local.translated(3, 5));
}

#[test]
fn grouping_leaves_tile_local_segments_untouched() {
    let cfg = config(3, 5, 4);
    let local = seg(1, 0, 4);
    let set = tile_set(4, vec![local]);
    let _ = group_tiles(&set, &cfg).unwrap();
    for tile in set.tiles() {
        assert_eq!(tile.segments[0], local);
    }
}

#[test]
fn group_size_below_one_is_rejected() {
    let cfg = config(3, 5, 0);
    let err = group_tiles(&tile_set(4, vec![]), &cfg).unwrap_err();
    assert_eq!(err, ConfigError::InvalidGroupSize { requested: 0 });
}

#[test]
fn group_size_beyond_the_offset_table_is_rejected() {
    let cfg = config(3, 5, 5);
    let err = group_tiles(&tile_set(4, vec![]), &cfg).unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingSlotOffset {
            slot: 4,
            table_len: 4,
        }
    );
}

#[test]
fn flatten_orders_by_row_then_leftmost_column() {
    let group = PrintGroup {
        slots: vec![
            PrintSlot {
                tile_index: Some(0),
                segments: vec![seg(2, 1, 3), seg(0, 4, 6)],
            },
            PrintSlot {
                tile_index: Some(1),
                segments: vec![seg(5, 0, 2), seg(4, 1, 3)],
            },
        ],
    };
    let flat = flatten_group(&group);
    assert_eq!(flat, vec![seg(5, 0, 2), seg(2, 1, 3), seg(4, 1, 3), seg(0, 4, 6)]);
    for pair in flat.windows(2) {
        assert!(pair[0].sort_key() <= pair[1].sort_key());
    }
}

#[test]
fn flatten_ties_keep_concatenation_order() {
    // identical sort keys across slots: slot order must survive the sort
    let a = LineSegment::new(Point::new(0, 0), Point::new(3, 0));
    let b = LineSegment::new(Point::new(3, 0), Point::new(0, 0));
    let group = PrintGroup {
        slots: vec![
            PrintSlot {
                tile_index: Some(0),
                segments: vec![a],
            },
            PrintSlot {
                tile_index: Some(1),
                segments: vec![b],
            },
        ],
    };
    assert_eq!(a.sort_key(), b.sort_key());
    assert_eq!(flatten_group(&group), vec![a, b]);
}

#[test]
fn empty_only_group_flattens_to_nothing() {
    let cfg = config(3, 5, 4);
    let set = tile_set(1, vec![]);
    let groups = group_tiles(&set, &cfg).unwrap();
    assert!(flatten_group(&groups[0]).is_empty());
}
