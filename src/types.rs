use serde::Serialize;

/// Integer pixel coordinate, origin at the top-left corner of its space.
///
/// `x` is the column, `y` the row. Which space the coordinate lives in
/// (tile-local or group-global) depends on the pipeline stage that produced
/// the containing segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// New point shifted by `(dx, dy)`.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One straight pen stroke from `start` to `end`.
///
/// Segments are plain values: stages that move a segment into another
/// coordinate space build a translated copy via [`LineSegment::translated`],
/// they never mutate a segment shared with an earlier stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Copy of the segment with both endpoints shifted by `(dx, dy)`.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            start: self.start.translated(dx, dy),
            end: self.end.translated(dx, dy),
        }
    }

    /// Draw-order key: starting row first, then the leftmost column touched.
    ///
    /// Sorting by this key (stably) yields the top-to-bottom, left-to-right
    /// visiting order the plotter wants.
    pub fn sort_key(&self) -> (i32, i32) {
        (self.start.y, self.start.x.min(self.end.x))
    }

    /// Euclidean length of the stroke.
    pub fn length(&self) -> f64 {
        let dx = (self.end.x - self.start.x) as f64;
        let dy = (self.end.y - self.start.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_leaves_original_untouched() {
        let seg = LineSegment::new(Point::new(1, 2), Point::new(1, 5));
        let moved = seg.translated(10, 20);
        assert_eq!(moved.start, Point::new(11, 22));
        assert_eq!(moved.end, Point::new(11, 25));
        assert_eq!(seg.start, Point::new(1, 2));
    }

    #[test]
    fn sort_key_uses_start_row_and_leftmost_column() {
        let seg = LineSegment::new(Point::new(7, 3), Point::new(2, 3));
        assert_eq!(seg.sort_key(), (3, 2));
    }
}
