// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Highlight overlay construction for accepted wall regions.

use crate::scene::PathElement;
use crate::types::{DetectionConfig, Orientation, Point2D, Region};

/// The wall's axis: the midline between the region's two parallel faces,
/// spanning its perpendicular extent.
pub fn centerline(region: &Region) -> (Point2D, Point2D) {
    match region.orientation {
        Orientation::Horizontal => {
            let mid_y = (region.a.y + region.b.y) / 2.0;
            (
                Point2D::new(region.a.x, mid_y),
                Point2D::new(region.c.x, mid_y),
            )
        }
        Orientation::Vertical => {
            let mid_x = (region.a.x + region.d.x) / 2.0;
            (
                Point2D::new(mid_x, region.a.y),
                Point2D::new(mid_x, region.c.y),
            )
        }
    }
}

/// Build the highlight path for one region.
///
/// With a transform the overlay is drawn at full width in the source
/// drawing's coordinate space; without one it falls back to the thin
/// untransformed stroke.
pub fn highlight_element(
    region: &Region,
    transform: Option<&str>,
    config: &DetectionConfig,
) -> PathElement {
    let (start, end) = centerline(region);
    let stroke_width = if transform.is_some() {
        config.overlay_stroke_width.clone()
    } else {
        config.overlay_stroke_width_untransformed.clone()
    };
    PathElement {
        stroke: Some(config.overlay_color.clone()),
        stroke_width: Some(stroke_width),
        fill: None,
        d: Some(format!(
            "M {} {} L {} {}",
            start.x, start.y, end.x, end.y
        )),
        transform: transform.map(str::to_string),
    }
}
