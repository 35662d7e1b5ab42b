// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene classification: typed primitives out of raw path elements.
//!
//! Every element is routed to one of: wall-line segment, marker segment,
//! gray filled region, or ignored. Parsing is best-effort — an element
//! that doesn't decode or doesn't match simply doesn't classify.

use crate::path_data::{self, PathGeometry};
use crate::scene::{PathElement, Scene};
use crate::types::{DetectionConfig, Orientation, Point2D, Region, Segment};
use tracing::debug;

/// Typed primitives extracted from one scene
#[derive(Debug, Clone, Default)]
pub struct ParsedScene {
    pub horizontal_lines: Vec<Segment>,
    pub vertical_lines: Vec<Segment>,
    pub horizontal_markers: Vec<Segment>,
    pub vertical_markers: Vec<Segment>,
    /// Filled regions accepted directly as walls, no validation needed
    pub gray_regions: Vec<Region>,
    /// First transform attribute seen on a stroked element
    pub transform: Option<String>,
}

/// Classify every element of the scene.
pub fn parse_scene(scene: &Scene, config: &DetectionConfig) -> ParsedScene {
    let mut parsed = ParsedScene::default();

    for element in &scene.elements {
        if element.is_stroked() {
            if parsed.transform.is_none() {
                parsed.transform = element.transform.clone();
            }
            classify_stroked(element, config, &mut parsed);
        }
        if element.is_filled() {
            if let Some(region) = classify_gray_region(element, config) {
                parsed.gray_regions.push(region);
            }
        }
    }

    debug!(
        horizontal_lines = parsed.horizontal_lines.len(),
        vertical_lines = parsed.vertical_lines.len(),
        horizontal_markers = parsed.horizontal_markers.len(),
        vertical_markers = parsed.vertical_markers.len(),
        gray_regions = parsed.gray_regions.len(),
        has_transform = parsed.transform.is_some(),
        "scene parsed"
    );

    parsed
}

fn classify_stroked(element: &PathElement, config: &DetectionConfig, parsed: &mut ParsedScene) {
    // is_stroked() guarantees both attributes
    let (Some(stroke), Some(width)) = (element.stroke.as_deref(), element.stroke_width.as_deref())
    else {
        return;
    };
    let Some(PathGeometry::Segment { p1, p2 }) = element.d.as_deref().and_then(path_data::decode)
    else {
        return;
    };

    if config.wall_stroke_widths.contains(width) && stroke == config.wall_color {
        if let Some((orientation, segment)) = axis_aligned(p1, p2) {
            match orientation {
                Orientation::Horizontal => parsed.horizontal_lines.push(segment),
                Orientation::Vertical => parsed.vertical_lines.push(segment),
            }
        }
    }

    if config.marker_stroke_widths.contains(width) && stroke == config.marker_color {
        if let Some((orientation, segment)) = axis_aligned(p1, p2) {
            // Short diagonal hatching ticks get clipped into short
            // axis-aligned fragments by the converter; drop them.
            if segment.length() >= config.marker_min_length {
                match orientation {
                    Orientation::Horizontal => parsed.horizontal_markers.push(segment),
                    Orientation::Vertical => parsed.vertical_markers.push(segment),
                }
            }
        }
    }
}

/// Canonicalize an axis-aligned segment; diagonals are not walls.
fn axis_aligned(p1: Point2D, p2: Point2D) -> Option<(Orientation, Segment)> {
    if p1.y == p2.y {
        Some((Orientation::Horizontal, Segment::horizontal(p1.x, p2.x, p1.y)))
    } else if p1.x == p2.x {
        Some((Orientation::Vertical, Segment::vertical(p1.x, p1.y, p2.y)))
    } else {
        None
    }
}

/// Gray region classifier: a filled, axis-aligned quad whose channels
/// all sit in the gray band is a solid wall — it bypasses pairing and
/// marker validation entirely.
fn classify_gray_region(element: &PathElement, config: &DetectionConfig) -> Option<Region> {
    let (r, g, b) = path_data::parse_rgb_percent(element.fill.as_deref()?)?;
    let in_band = |channel: f64| config.gray_lower <= channel && channel <= config.gray_upper;
    if !(in_band(r) && in_band(g) && in_band(b)) {
        return None;
    }

    let PathGeometry::Quad(corners) = element.d.as_deref().and_then(path_data::decode)? else {
        return None;
    };

    let x_min = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let x_max = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let y_max = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    if !is_axis_aligned_rectangle(&corners, x_min, x_max, y_min, y_max) {
        return None;
    }

    let height = y_max - y_min;
    let width = x_max - x_min;
    if height.min(width) <= config.gray_min_thickness {
        // Thin decorative fill
        return None;
    }

    let orientation = if height >= width {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    Some(Region::from_bounds(x_min, x_max, y_min, y_max, orientation))
}

/// The quad is an axis-aligned rectangle iff its corners are exactly the
/// four bounding-box corners.
fn is_axis_aligned_rectangle(
    corners: &[Point2D; 4],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) -> bool {
    let expected = [
        Point2D::new(x_min, y_min),
        Point2D::new(x_min, y_max),
        Point2D::new(x_max, y_max),
        Point2D::new(x_max, y_min),
    ];
    expected
        .iter()
        .all(|corner| corners.contains(corner))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroked(d: &str, width: &str, color: &str) -> PathElement {
        PathElement {
            stroke: Some(color.into()),
            stroke_width: Some(width.into()),
            d: Some(d.into()),
            ..Default::default()
        }
    }

    fn filled(d: &str, fill: &str) -> PathElement {
        PathElement {
            fill: Some(fill.into()),
            d: Some(d.into()),
            ..Default::default()
        }
    }

    fn black() -> &'static str {
        "rgb(0%, 0%, 0%)"
    }

    #[test]
    fn test_wall_line_classification() {
        let mut scene = Scene::new();
        scene.push(stroked("M 0 100 L 50 100", "8", black()));
        scene.push(stroked("M 20 10 L 20 90", "7", black()));
        // Diagonal: not a wall
        scene.push(stroked("M 0 0 L 50 50", "8", black()));
        // Width outside the whitelist
        scene.push(stroked("M 0 200 L 50 200", "5", black()));
        // Wrong color
        scene.push(stroked("M 0 300 L 50 300", "8", "rgb(100%, 0%, 0%)"));

        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert_eq!(parsed.horizontal_lines.len(), 1);
        assert_eq!(parsed.vertical_lines.len(), 1);
        assert_eq!(parsed.horizontal_lines[0].p1.y, 100.0);
    }

    #[test]
    fn test_wall_line_endpoints_canonicalized() {
        let mut scene = Scene::new();
        scene.push(stroked("M 50 100 L 0 100", "8", black()));
        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert_eq!(parsed.horizontal_lines[0].p1.x, 0.0);
        assert_eq!(parsed.horizontal_lines[0].p2.x, 50.0);
    }

    #[test]
    fn test_marker_length_threshold() {
        let mut scene = Scene::new();
        // Exactly at the minimum length: kept
        scene.push(stroked("M 0 10 L 24 10", "1", black()));
        // Below: noise
        scene.push(stroked("M 0 20 L 23 20", "1", black()));
        scene.push(stroked("M 5 0 L 5 30", "2", black()));

        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert_eq!(parsed.horizontal_markers.len(), 1);
        assert_eq!(parsed.vertical_markers.len(), 1);
    }

    #[test]
    fn test_unparseable_geometry_is_skipped() {
        let mut scene = Scene::new();
        scene.push(stroked("M 0 0 C 1 2 3 4 5 6", "8", black()));
        scene.push(PathElement {
            stroke: Some(black().into()),
            stroke_width: Some("8".into()),
            d: None,
            ..Default::default()
        });
        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert!(parsed.horizontal_lines.is_empty());
        assert!(parsed.vertical_lines.is_empty());
    }

    #[test]
    fn test_transform_captured_once() {
        let mut scene = Scene::new();
        let mut first = stroked("M 0 0 L 10 0", "8", black());
        first.transform = Some("matrix(1,0,0,-1,0,842)".into());
        let mut second = stroked("M 0 5 L 10 5", "8", black());
        second.transform = Some("matrix(2,0,0,2,0,0)".into());
        scene.push(first);
        scene.push(second);

        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert_eq!(parsed.transform.as_deref(), Some("matrix(1,0,0,-1,0,842)"));
    }

    #[test]
    fn test_gray_region_accepted() {
        let mut scene = Scene::new();
        scene.push(filled(
            "M 10 20 L 60 20 L 60 50 L 10 50 Z M 10 20",
            "rgb(49.803922%, 49.803922%, 49.803922%)",
        ));
        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert_eq!(parsed.gray_regions.len(), 1);
        let region = &parsed.gray_regions[0];
        assert_eq!(region.a, Point2D::new(10.0, 20.0));
        assert_eq!(region.c, Point2D::new(60.0, 50.0));
        // Wider than tall
        assert_eq!(region.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_gray_region_orientation_prefers_vertical() {
        let mut scene = Scene::new();
        // Exactly square: vertical wins the tie
        scene.push(filled(
            "M 0 0 L 30 0 L 30 30 L 0 30 Z M 0 0",
            "rgb(50%, 50%, 50%)",
        ));
        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert_eq!(parsed.gray_regions[0].orientation, Orientation::Vertical);
    }

    #[test]
    fn test_gray_classifier_rejects_non_rectangle() {
        let mut scene = Scene::new();
        // A diamond: right fill color, but corners are not the bounding
        // box corners
        scene.push(filled(
            "M 15 0 L 30 15 L 15 30 L 0 15 Z M 15 0",
            "rgb(50%, 50%, 50%)",
        ));
        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert!(parsed.gray_regions.is_empty());
    }

    #[test]
    fn test_gray_classifier_rejects_out_of_band_fill() {
        let mut scene = Scene::new();
        scene.push(filled(
            "M 10 20 L 60 20 L 60 50 L 10 50 Z M 10 20",
            "rgb(80%, 80%, 80%)",
        ));
        scene.push(filled(
            "M 10 20 L 60 20 L 60 50 L 10 50 Z M 10 20",
            "rgb(50%, 50%, 20%)",
        ));
        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert!(parsed.gray_regions.is_empty());
    }

    #[test]
    fn test_gray_classifier_rejects_thin_fill() {
        let mut scene = Scene::new();
        // 2.5 units tall: not strictly above the minimum thickness
        scene.push(filled(
            "M 0 0 L 100 0 L 100 2.5 L 0 2.5 Z M 0 0",
            "rgb(50%, 50%, 50%)",
        ));
        let parsed = parse_scene(&scene, &DetectionConfig::default());
        assert!(parsed.gray_regions.is_empty());
    }
}
