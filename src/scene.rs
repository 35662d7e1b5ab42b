// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed scene model for the converter's vector output.
//!
//! Every drawing element is reduced to the attributes the pipeline cares
//! about. Classification never reaches into raw XML; `svg_io` builds
//! these records at the boundary and everything downstream works on them.

use serde::{Deserialize, Serialize};

/// One path element of the source scene
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathElement {
    /// Stroke color, verbatim attribute value
    pub stroke: Option<String>,
    /// Stroke width, verbatim attribute value
    pub stroke_width: Option<String>,
    /// Fill color, verbatim attribute value
    pub fill: Option<String>,
    /// Path data string
    pub d: Option<String>,
    /// Coordinate transform, verbatim attribute value
    pub transform: Option<String>,
}

impl PathElement {
    /// True when the element is a stroked path (both stroke attributes
    /// present). Only stroked paths can be wall lines or markers.
    pub fn is_stroked(&self) -> bool {
        self.stroke.is_some() && self.stroke_width.is_some()
    }

    /// True when the element carries a visible fill.
    pub fn is_filled(&self) -> bool {
        matches!(self.fill.as_deref(), Some(fill) if fill != "none")
    }
}

/// A flat sequence of path elements, in document order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub elements: Vec<PathElement>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
