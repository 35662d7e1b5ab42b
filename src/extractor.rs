// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall candidate extraction: pair parallel wall lines into regions.
//!
//! Two same-orientation lines plausibly bound one wall when they sit a
//! wall-thickness apart and overlap along the perpendicular axis. The
//! scan is quadratic per orientation but pruned hard: lines are sorted
//! by their fixed coordinate, so once a pair's gap drops below the
//! minimum plausible thickness no later line can open it up again.

use crate::types::{DetectionConfig, Orientation, Region, Segment};
use tracing::debug;

/// Pair same-orientation wall lines into candidate regions.
///
/// Input order does not matter; lines are sorted by fixed coordinate
/// before scanning. Candidates are not deduplicated here — marker
/// validation is the only downstream filter.
pub fn extract_candidates(
    lines: &[Segment],
    orientation: Orientation,
    config: &DetectionConfig,
) -> Vec<Region> {
    let mut sorted = lines.to_vec();
    sorted.sort_by(|a, b| {
        a.fixed_coordinate(orientation)
            .total_cmp(&b.fixed_coordinate(orientation))
    });

    let mut candidates = Vec::new();
    for (index, line) in sorted.iter().enumerate() {
        let level = line.fixed_coordinate(orientation);
        let (start, end) = line.span(orientation);

        for next in &sorted[index + 1..] {
            let next_level = next.fixed_coordinate(orientation);
            let gap = (level - next_level).abs();

            // Same physical face, double-stroked: keep scanning past it
            if gap < config.same_level_tolerance {
                continue;
            }

            // No overlap along the perpendicular axis: these two cannot
            // bound a single contiguous wall
            let (next_start, next_end) = next.span(orientation);
            if next_start > end || next_end < start {
                continue;
            }

            // Sorted order: every later line is at least this far away,
            // so a gap below the plausible minimum ends the scan
            if gap < config.wall_thickness_min {
                break;
            }

            if gap <= config.wall_thickness_max {
                candidates.push(Region::from_faces(
                    orientation,
                    level,
                    next_level,
                    start.max(next_start),
                    end.min(next_end),
                ));
            }
        }
    }

    debug!(
        ?orientation,
        lines = lines.len(),
        candidates = candidates.len(),
        "candidate extraction"
    );

    candidates
}
