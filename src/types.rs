// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for vector floor-plan wall detection

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A 2D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis orientation of a wall line or wall region
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An axis-aligned line segment.
///
/// Invariant: endpoints are stored in canonical min→max order along the
/// varying axis. The constructors enforce this, so `p1` is always the
/// lesser endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub p1: Point2D,
    pub p2: Point2D,
}

impl Segment {
    /// Horizontal segment at height `y`, endpoints sorted by x.
    pub fn horizontal(xa: f64, xb: f64, y: f64) -> Self {
        Self {
            p1: Point2D::new(xa.min(xb), y),
            p2: Point2D::new(xa.max(xb), y),
        }
    }

    /// Vertical segment at `x`, endpoints sorted by y.
    pub fn vertical(x: f64, ya: f64, yb: f64) -> Self {
        Self {
            p1: Point2D::new(x, ya.min(yb)),
            p2: Point2D::new(x, ya.max(yb)),
        }
    }

    pub fn length(&self) -> f64 {
        self.p1.distance_to(&self.p2)
    }

    /// The coordinate that is constant along the segment
    /// (y for horizontal, x for vertical).
    pub fn fixed_coordinate(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.p1.y,
            Orientation::Vertical => self.p1.x,
        }
    }

    /// The (min, max) extent along the varying axis.
    pub fn span(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (self.p1.x, self.p2.x),
            Orientation::Vertical => (self.p1.y, self.p2.y),
        }
    }
}

/// An axis-aligned rectangular wall region.
///
/// Corner layout (fixed diagram):
///
/// ```text
/// b .-------. c
///   |       |
/// a .-------. d
/// ```
///
/// Invariant: `a.x == b.x`, `c.x == d.x`, `a.y == d.y`, `b.y == c.y`,
/// with `a` at the minimum-x/minimum-y corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
    pub d: Point2D,
    pub orientation: Orientation,
}

impl Region {
    /// Build a region from its axis bounds. Bounds may be given in any
    /// order; corners come out canonical.
    pub fn from_bounds(xa: f64, xb: f64, ya: f64, yb: f64, orientation: Orientation) -> Self {
        let (x_min, x_max) = (xa.min(xb), xa.max(xb));
        let (y_min, y_max) = (ya.min(yb), ya.max(yb));
        Self {
            a: Point2D::new(x_min, y_min),
            b: Point2D::new(x_min, y_max),
            c: Point2D::new(x_max, y_max),
            d: Point2D::new(x_max, y_min),
            orientation,
        }
    }

    /// Build a region from two parallel wall faces and the overlapping
    /// span between them. Faces are fixed coordinates (y for horizontal
    /// regions, x for vertical).
    pub fn from_faces(
        orientation: Orientation,
        face1: f64,
        face2: f64,
        span_start: f64,
        span_end: f64,
    ) -> Self {
        match orientation {
            Orientation::Horizontal => {
                Self::from_bounds(span_start, span_end, face1, face2, orientation)
            }
            Orientation::Vertical => {
                Self::from_bounds(face1, face2, span_start, span_end, orientation)
            }
        }
    }

    /// Bounding-box containment test, inclusive of the boundary.
    pub fn contains(&self, point: &Point2D) -> bool {
        self.a.x <= point.x && point.x <= self.c.x && self.a.y <= point.y && point.y <= self.c.y
    }

    pub fn width(&self) -> f64 {
        self.c.x - self.a.x
    }

    pub fn height(&self) -> f64 {
        self.c.y - self.a.y
    }
}

/// Configuration for the wall detection pipeline.
///
/// Constructed once and passed by reference into every stage; nothing in
/// the pipeline mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Maximum fixed-coordinate delta for two parallel lines to count as
    /// the same physical wall face (double-stroked lines). Default: 1.5
    pub same_level_tolerance: f64,
    /// Minimum plausible wall thickness (gap between paired faces).
    /// Gaps strictly below this prune the scan. Default: 25.0
    pub wall_thickness_min: f64,
    /// Maximum plausible wall thickness. Default: 40.0
    pub wall_thickness_max: f64,
    /// Stroke widths (raw attribute strings) that mark wall lines.
    /// Default: "7".."10"
    pub wall_stroke_widths: FxHashSet<String>,
    /// Stroke color of wall lines. Default: black
    pub wall_color: String,
    /// Stroke widths (raw attribute strings) that mark hatching markers.
    /// Default: "1".."2"
    pub marker_stroke_widths: FxHashSet<String>,
    /// Stroke color of hatching markers. Default: black
    pub marker_color: String,
    /// Minimum marker length; shorter hatching ticks are noise.
    /// Default: 24.0
    pub marker_min_length: f64,
    /// A candidate is accepted only when it contains strictly more than
    /// this many markers. Default: 10
    pub required_marker_count: usize,
    /// Lower edge of the gray band (percent channel value). Default: 45.0
    pub gray_lower: f64,
    /// Upper edge of the gray band. Default: 55.0
    pub gray_upper: f64,
    /// Minimum thickness of a gray filled region; thinner fills are
    /// decorative. Default: 2.5
    pub gray_min_thickness: f64,
    /// Stroke color of the highlight overlay. Default: red
    pub overlay_color: String,
    /// Overlay stroke width when the captured transform applies.
    /// Default: "10"
    pub overlay_stroke_width: String,
    /// Overlay stroke width for regions rendered without a transform.
    /// Default: "1.2"
    pub overlay_stroke_width_untransformed: String,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            same_level_tolerance: 1.5,
            wall_thickness_min: 25.0,
            wall_thickness_max: 40.0,
            wall_stroke_widths: (7..=10).map(|w| w.to_string()).collect(),
            wall_color: "rgb(0%, 0%, 0%)".to_string(),
            marker_stroke_widths: (1..=2).map(|w| w.to_string()).collect(),
            marker_color: "rgb(0%, 0%, 0%)".to_string(),
            marker_min_length: 24.0,
            required_marker_count: 10,
            gray_lower: 45.0,
            gray_upper: 55.0,
            gray_min_thickness: 2.5,
            overlay_color: "rgb(100%, 0%, 0%)".to_string(),
            overlay_stroke_width: "10".to_string(),
            overlay_stroke_width_untransformed: "1.2".to_string(),
        }
    }
}

/// Per-stage counts from one detection run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DetectionStats {
    pub horizontal_lines: usize,
    pub vertical_lines: usize,
    pub horizontal_markers: usize,
    pub vertical_markers: usize,
    pub horizontal_candidates: usize,
    pub vertical_candidates: usize,
    pub validated_walls: usize,
    pub gray_regions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_canonical_order() {
        let seg = Segment::horizontal(50.0, 10.0, 100.0);
        assert_eq!(seg.p1.x, 10.0);
        assert_eq!(seg.p2.x, 50.0);
        assert_eq!(seg.fixed_coordinate(Orientation::Horizontal), 100.0);
        assert_eq!(seg.span(Orientation::Horizontal), (10.0, 50.0));

        let seg = Segment::vertical(30.0, 80.0, 20.0);
        assert_eq!(seg.p1.y, 20.0);
        assert_eq!(seg.p2.y, 80.0);
        assert_eq!(seg.fixed_coordinate(Orientation::Vertical), 30.0);
    }

    #[test]
    fn test_region_corner_invariant() {
        let region = Region::from_faces(Orientation::Horizontal, 100.0, 130.0, 10.0, 50.0);
        assert_eq!(region.a.x, region.b.x);
        assert_eq!(region.c.x, region.d.x);
        assert_eq!(region.a.y, region.d.y);
        assert_eq!(region.b.y, region.c.y);
        assert_eq!(region.a, Point2D::new(10.0, 100.0));
        assert_eq!(region.c, Point2D::new(50.0, 130.0));
    }

    #[test]
    fn test_region_contains_is_inclusive() {
        let region = Region::from_bounds(0.0, 10.0, 0.0, 10.0, Orientation::Horizontal);
        // Points exactly on the edge count as inside
        assert!(region.contains(&Point2D::new(0.0, 5.0)));
        assert!(region.contains(&Point2D::new(10.0, 10.0)));
        assert!(region.contains(&Point2D::new(5.0, 5.0)));
        assert!(!region.contains(&Point2D::new(10.01, 5.0)));
        assert!(!region.contains(&Point2D::new(5.0, -0.01)));
    }

    #[test]
    fn test_default_config_whitelists() {
        let config = DetectionConfig::default();
        assert!(config.wall_stroke_widths.contains("7"));
        assert!(config.wall_stroke_widths.contains("10"));
        assert!(!config.wall_stroke_widths.contains("11"));
        assert!(config.marker_stroke_widths.contains("1"));
        assert!(!config.marker_stroke_widths.contains("3"));
    }
}
