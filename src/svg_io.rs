// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SVG boundary: read a scene out of the converter's document and write
//! the annotated copy back.
//!
//! Reading collects every `path` element's relevant attributes into the
//! typed scene model. Writing stream-copies the source document and
//! inserts the overlay elements just before the closing `svg` tag, so
//! the original content passes through untouched.

use crate::scene::{PathElement, Scene};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;
use thiserror::Error;

/// Errors from the SVG boundary
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("document has no svg root element")]
    MissingRoot,

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("document is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Collect every path element of the document into a scene.
pub fn read_scene(svg: &str) -> Result<Scene, SvgError> {
    let mut reader = Reader::from_str(svg);
    let mut scene = Scene::new();
    let mut saw_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                match e.local_name().as_ref() {
                    b"svg" => saw_root = true,
                    b"path" => scene.push(path_element(&e)?),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(SvgError::MissingRoot);
    }
    Ok(scene)
}

fn path_element(start: &BytesStart<'_>) -> Result<PathElement, SvgError> {
    let mut element = PathElement::default();
    for attr in start.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.as_ref() {
            b"stroke" => element.stroke = Some(value),
            b"stroke-width" => element.stroke_width = Some(value),
            b"fill" => element.fill = Some(value),
            b"d" => element.d = Some(value),
            b"transform" => element.transform = Some(value),
            _ => {}
        }
    }
    Ok(element)
}

/// Copy the source document with the overlay elements appended inside
/// the root, immediately before `</svg>`.
pub fn write_annotated(svg: &str, overlay: &[PathElement]) -> Result<String, SvgError> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut appended = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::End(e) if e.local_name().as_ref() == b"svg" => {
                for element in overlay {
                    writer.write_event(Event::Empty(overlay_tag(element)))?;
                }
                appended = true;
                writer.write_event(Event::End(e))?;
            }
            other => writer.write_event(other)?,
        }
    }

    if !appended {
        return Err(SvgError::MissingRoot);
    }
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn overlay_tag(element: &PathElement) -> BytesStart<'static> {
    let mut tag = BytesStart::new("path");
    if let Some(d) = &element.d {
        tag.push_attribute(("d", d.as_str()));
    }
    if let Some(stroke) = &element.stroke {
        tag.push_attribute(("stroke", stroke.as_str()));
    }
    if let Some(width) = &element.stroke_width {
        tag.push_attribute(("stroke-width", width.as_str()));
    }
    if let Some(fill) = &element.fill {
        tag.push_attribute(("fill", fill.as_str()));
    }
    if let Some(transform) = &element.transform {
        tag.push_attribute(("transform", transform.as_str()));
    }
    tag
}
