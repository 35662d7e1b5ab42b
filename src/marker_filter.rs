// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Marker-density validation of wall candidates.
//!
//! Genuine walls in the source drawing convention are hatched with many
//! short perpendicular ticks. Coincidental parallel-line pairs
//! (furniture, room outlines) are not, so a candidate survives only when
//! it contains strictly more markers than the configured threshold.

use crate::types::{DetectionConfig, Region, Segment};
use tracing::debug;

/// Count markers fully contained in the region. A marker counts only
/// when both of its endpoints are inside (boundary inclusive).
pub fn markers_inside(
    region: &Region,
    horizontal_markers: &[Segment],
    vertical_markers: &[Segment],
) -> usize {
    horizontal_markers
        .iter()
        .chain(vertical_markers)
        .filter(|marker| region.contains(&marker.p1) && region.contains(&marker.p2))
        .count()
}

/// Strict-majority acceptance test.
pub fn has_enough_markers(
    region: &Region,
    horizontal_markers: &[Segment],
    vertical_markers: &[Segment],
    config: &DetectionConfig,
) -> bool {
    markers_inside(region, horizontal_markers, vertical_markers) > config.required_marker_count
}

/// Drop every candidate without sufficient marker support.
pub fn filter_by_markers(
    candidates: Vec<Region>,
    horizontal_markers: &[Segment],
    vertical_markers: &[Segment],
    config: &DetectionConfig,
) -> Vec<Region> {
    let input = candidates.len();
    let validated: Vec<Region> = candidates
        .into_iter()
        .filter(|region| has_enough_markers(region, horizontal_markers, vertical_markers, config))
        .collect();
    debug!(
        input,
        validated = validated.len(),
        "marker validation"
    );
    validated
}
