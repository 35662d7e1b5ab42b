// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! External document conversion.
//!
//! The pipeline does not understand PDF. Turning the source page into an
//! SVG scene and rendering the annotated scene back to a page document
//! are delegated to external converters, invoked as blocking processes
//! with an exit-status check. A failed conversion is the only fatal
//! condition in the system; nothing downstream runs after one.

use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

/// Default PDF→SVG converter command
pub const DEFAULT_PDF_TO_SVG: &str = "pdf2svg";
/// SVG→PDF renderer command
pub const SVG_TO_PDF: &str = "rsvg-convert";

/// Errors from external converter invocation
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// Convert a PDF page to an SVG scene document.
pub fn pdf_to_svg(converter: &str, input: &Path, output: &Path) -> Result<(), ConvertError> {
    run(Command::new(converter).arg(input).arg(output), converter)
}

/// Render an SVG scene document to a PDF page.
pub fn svg_to_pdf(input: &Path, output: &Path) -> Result<(), ConvertError> {
    run(
        Command::new(SVG_TO_PDF)
            .args(["-f", "pdf", "-o"])
            .arg(output)
            .arg(input),
        SVG_TO_PDF,
    )
}

fn run(command: &mut Command, name: &str) -> Result<(), ConvertError> {
    debug!(command = name, "invoking converter");
    let status = command.status().map_err(|source| ConvertError::Spawn {
        command: name.to_string(),
        source,
    })?;
    if !status.success() {
        return Err(ConvertError::Failed {
            command: name.to_string(),
            status,
        });
    }
    Ok(())
}
