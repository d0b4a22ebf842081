//! Stroke synthesis: one tile's brightness grid into hatch line segments.
//!
//! The synthesizer scans the grid row-major (`y` outer, `x` inner) and decides
//! per pixel whether a stroke covers it. Each brightness level has its own
//! density rule, expressed as a lookback over the previous few rows of the
//! same column — level 1 always draws, level 6 never does, and the levels in
//! between cap how many of the recent rows may already carry a drawn pixel of
//! the same level. Because the rules only look upward within a column,
//! eligible pixels chain into vertical runs; every closed run becomes one
//! [`LineSegment`](crate::types::LineSegment).
//!
//! The lookback reads only already-decided draw flags, kept in a fixed
//! rolling window of rows rather than a growing point list, so a synthesis
//! pass is O(width * height) with no per-pixel searches.

mod synthesizer;


pub use synthesizer::LineSynthesizer;
