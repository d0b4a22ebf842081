use super::PrintGroup;
use crate::types::LineSegment;

/// Merge a group's slots into one plot-ordered stroke sequence.
///
/// Slots are concatenated in slot order, then sorted by (start row, leftmost
/// column). The sort must be stable: strokes with identical keys keep their
/// concatenation order, which downstream emission relies on for reproducible
/// command streams.
pub fn flatten_group(group: &PrintGroup) -> Vec<LineSegment> {
    let mut strokes: Vec<LineSegment> = group
        .slots
        .iter()
        .flat_map(|slot| slot.segments.iter().copied())
        .collect();
    strokes.sort_by_key(|seg| seg.sort_key());
    strokes
}
