// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Load-bearing wall detection for vector floor plans.
//!
//! This crate provides a pipeline for:
//! 1. Classifying a PDF page's vector scene (SVG paths) into typed
//!    geometric primitives
//! 2. Pairing parallel wall lines into candidate wall regions
//! 3. Validating candidates against the drawing's hatching markers
//! 4. Accepting solid gray fills directly as walls
//! 5. Emitting a highlight overlay aligned with the original drawing
//!
//! # Usage
//!
//! ```rust,ignore
//! use wallscan::{annotate_scene, detect_walls, svg_io, types::DetectionConfig};
//!
//! let config = DetectionConfig::default();
//! let scene = svg_io::read_scene(&svg_text)?;
//! let detected = detect_walls(&scene, &config);
//! let annotated = svg_io::write_annotated(&svg_text, &annotate_scene(&detected, &config))?;
//! ```

pub mod convert;
pub mod extractor;
pub mod marker_filter;
pub mod overlay;
pub mod parser;
pub mod path_data;
pub mod scene;
pub mod svg_io;
pub mod types;

// Re-export commonly used types and functions
pub use convert::ConvertError;
pub use scene::{PathElement, Scene};
pub use svg_io::SvgError;
pub use types::{DetectionConfig, DetectionStats, Orientation, Point2D, Region, Segment};

use tracing::debug;

/// Result of one detection run
#[derive(Debug, Clone)]
pub struct DetectedWalls {
    /// Marker-validated line-pair walls, both orientations
    pub walls: Vec<Region>,
    /// Solid gray regions, confirmed without validation
    pub gray_regions: Vec<Region>,
    /// Transform captured from the source scene, if any
    pub transform: Option<String>,
    /// Per-stage counts
    pub stats: DetectionStats,
}

/// Run the full detection pipeline over a parsed scene.
pub fn detect_walls(scene: &Scene, config: &DetectionConfig) -> DetectedWalls {
    let parsed = parser::parse_scene(scene, config);

    let horizontal = extractor::extract_candidates(
        &parsed.horizontal_lines,
        Orientation::Horizontal,
        config,
    );
    let vertical =
        extractor::extract_candidates(&parsed.vertical_lines, Orientation::Vertical, config);

    let stats = DetectionStats {
        horizontal_lines: parsed.horizontal_lines.len(),
        vertical_lines: parsed.vertical_lines.len(),
        horizontal_markers: parsed.horizontal_markers.len(),
        vertical_markers: parsed.vertical_markers.len(),
        horizontal_candidates: horizontal.len(),
        vertical_candidates: vertical.len(),
        validated_walls: 0,
        gray_regions: parsed.gray_regions.len(),
    };

    let mut candidates = horizontal;
    candidates.extend(vertical);
    let walls = marker_filter::filter_by_markers(
        candidates,
        &parsed.horizontal_markers,
        &parsed.vertical_markers,
        config,
    );

    debug!(
        walls = walls.len(),
        gray_regions = parsed.gray_regions.len(),
        "detection complete"
    );

    DetectedWalls {
        stats: DetectionStats {
            validated_walls: walls.len(),
            ..stats
        },
        walls,
        gray_regions: parsed.gray_regions,
        transform: parsed.transform,
    }
}

/// Build the highlight overlay for every accepted region.
///
/// Validated line-pair walls carry the captured transform; gray regions
/// originate from fill elements and render untransformed.
pub fn annotate_scene(detected: &DetectedWalls, config: &DetectionConfig) -> Vec<PathElement> {
    detected
        .walls
        .iter()
        .map(|wall| overlay::highlight_element(wall, detected.transform.as_deref(), config))
        .chain(
            detected
                .gray_regions
                .iter()
                .map(|gray| overlay::highlight_element(gray, None, config)),
        )
        .collect()
}

/// Convenience: annotate an SVG document in one call.
pub fn annotate_svg(svg: &str, config: &DetectionConfig) -> Result<String, SvgError> {
    let scene = svg_io::read_scene(svg)?;
    let detected = detect_walls(&scene, config);
    svg_io::write_annotated(svg, &annotate_scene(&detected, config))
}
