// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoders for the converter's path-data and color grammars.
//!
//! The PDF→SVG converter emits a very small subset of SVG: straight
//! two-point strokes (`M x1 y1 L x2 y2`) and closed four-corner fills
//! (`M .. L .. L .. L .. Z M ..`). Both decoders are best-effort and
//! return `None` for anything else; unrecognized path data is never an
//! error, it just doesn't classify.

use crate::types::Point2D;

/// A recognized fixed-arity path geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathGeometry {
    /// Straight two-point stroke
    Segment { p1: Point2D, p2: Point2D },
    /// Closed quad, corners in source order
    Quad([Point2D; 4]),
}

/// Decode a path-data string into one of the recognized shapes.
pub fn decode(d: &str) -> Option<PathGeometry> {
    let tokens: Vec<&str> = d.split_whitespace().collect();
    match tokens.len() {
        6 => decode_segment(&tokens),
        // Closed quads trail a redundant `M x1 y1` after the `Z`
        16 => decode_quad(&tokens),
        _ => None,
    }
}

/// `M x1 y1 L x2 y2`
fn decode_segment(tokens: &[&str]) -> Option<PathGeometry> {
    if tokens[0] != "M" || tokens[3] != "L" {
        return None;
    }
    let x1 = parse_coord(tokens[1])?;
    let y1 = parse_coord(tokens[2])?;
    let x2 = parse_coord(tokens[4])?;
    let y2 = parse_coord(tokens[5])?;
    Some(PathGeometry::Segment {
        p1: Point2D::new(x1, y1),
        p2: Point2D::new(x2, y2),
    })
}

/// `M x1 y1 L x2 y2 L x3 y3 L x4 y4 Z M x1 y1`
fn decode_quad(tokens: &[&str]) -> Option<PathGeometry> {
    if tokens[0] != "M"
        || tokens[3] != "L"
        || tokens[6] != "L"
        || tokens[9] != "L"
        || tokens[12] != "Z"
        || tokens[13] != "M"
    {
        return None;
    }
    let mut corners = [Point2D::new(0.0, 0.0); 4];
    for (i, corner) in corners.iter_mut().enumerate() {
        let x = parse_coord(tokens[i * 3 + 1])?;
        let y = parse_coord(tokens[i * 3 + 2])?;
        *corner = Point2D::new(x, y);
    }
    Some(PathGeometry::Quad(corners))
}

fn parse_coord(token: &str) -> Option<f64> {
    token.parse().ok()
}

/// Decode `rgb(p%, p%, p%)` into the three percent channel values.
pub fn parse_rgb_percent(value: &str) -> Option<(f64, f64, f64)> {
    let inner = value.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut channels = inner.split(',').map(|channel| {
        channel
            .trim()
            .strip_suffix('%')
            .and_then(|p| p.parse::<f64>().ok())
    });
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    if channels.next().is_some() {
        return None;
    }
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_segment() {
        let geometry = decode("M 10 20 L 30 20");
        assert_eq!(
            geometry,
            Some(PathGeometry::Segment {
                p1: Point2D::new(10.0, 20.0),
                p2: Point2D::new(30.0, 20.0),
            })
        );
    }

    #[test]
    fn test_decode_segment_fractional() {
        let geometry = decode("M 10.5 20.25 L 30.5 20.25");
        match geometry {
            Some(PathGeometry::Segment { p1, p2 }) => {
                assert_eq!(p1.x, 10.5);
                assert_eq!(p2.y, 20.25);
            }
            other => panic!("expected segment, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_quad() {
        let geometry = decode("M 0 0 L 10 0 L 10 5 L 0 5 Z M 0 0");
        assert_eq!(
            geometry,
            Some(PathGeometry::Quad([
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 0.0),
                Point2D::new(10.0, 5.0),
                Point2D::new(0.0, 5.0),
            ]))
        );
    }

    #[test]
    fn test_decode_rejects_wrong_arity() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("M 10 20"), None);
        assert_eq!(decode("M 10 20 L 30 20 L 40 20"), None);
        // Curves are not recognized shapes
        assert_eq!(decode("M 0 0 C 1 1 2 2 3 3"), None);
    }

    #[test]
    fn test_decode_rejects_bad_tokens() {
        assert_eq!(decode("M ten 20 L 30 20"), None);
        assert_eq!(decode("L 10 20 M 30 20"), None);
        // Right arity, but the Z is not where a closed quad puts it
        assert_eq!(decode("M 0 0 L 10 0 L 10 5 L 0 5 L 0 0 Z"), None);
    }

    #[test]
    fn test_parse_rgb_percent() {
        assert_eq!(
            parse_rgb_percent("rgb(49.803922%, 49.803922%, 49.803922%)"),
            Some((49.803922, 49.803922, 49.803922))
        );
        assert_eq!(parse_rgb_percent("rgb(0%, 0%, 0%)"), Some((0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_parse_rgb_percent_rejects_other_forms() {
        assert_eq!(parse_rgb_percent("none"), None);
        assert_eq!(parse_rgb_percent("#7f7f7f"), None);
        assert_eq!(parse_rgb_percent("rgb(127, 127, 127)"), None);
        assert_eq!(parse_rgb_percent("rgb(50%, 50%)"), None);
        assert_eq!(parse_rgb_percent("rgb(50%, 50%, 50%, 50%)"), None);
    }
}
