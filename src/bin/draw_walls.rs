// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: highlight detected walls in a floor-plan PDF.
//!
//! Converts the page to an SVG scene with an external converter, runs
//! the detection pipeline, and renders the annotated scene back to PDF.
//!
//! Usage:
//!   draw-walls <input.pdf> [options]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::exit;
use wallscan::{annotate_scene, convert, detect_walls, svg_io, types::DetectionConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,wallscan=info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let input = PathBuf::from(&args[1]);

    // Parse options
    let mut output: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut converter = convert::DEFAULT_PDF_TO_SVG.to_string();
    let mut svg_mode = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                output = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--converter" => {
                i += 1;
                converter = args[i].clone();
            }
            "--svg" => {
                svg_mode = true;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                exit(1);
            }
        }
        i += 1;
    }

    let config = load_config(config_path.as_deref());

    // Step 1: Convert the page to a vector scene
    let temp_svg = input.with_extension("tmp.svg");
    let scene_path = if svg_mode {
        println!("[1/5] Using SVG input directly: {}", input.display());
        input.clone()
    } else {
        println!("[1/5] Converting to SVG with {}...", converter);
        if let Err(e) = convert::pdf_to_svg(&converter, &input, &temp_svg) {
            eprintln!("Error: conversion failed: {}", e);
            exit(1);
        }
        temp_svg.clone()
    };

    // Step 2: Read the scene
    println!("[2/5] Reading scene: {}", scene_path.display());
    let svg_text = fs::read_to_string(&scene_path).unwrap_or_else(|e| {
        eprintln!("Error: cannot read '{}': {}", scene_path.display(), e);
        exit(1);
    });

    // Step 3: Detect walls
    println!("[3/5] Detecting walls...");
    let scene = svg_io::read_scene(&svg_text).unwrap_or_else(|e| {
        eprintln!("Error: cannot parse scene: {}", e);
        exit(1);
    });
    let detected = detect_walls(&scene, &config);

    let stats = &detected.stats;
    println!("  Detection statistics:");
    println!(
        "    Wall lines:      {} horizontal, {} vertical",
        stats.horizontal_lines, stats.vertical_lines
    );
    println!(
        "    Markers:         {} horizontal, {} vertical",
        stats.horizontal_markers, stats.vertical_markers
    );
    println!(
        "    Raw candidates:  {} horizontal, {} vertical",
        stats.horizontal_candidates, stats.vertical_candidates
    );
    println!("    Validated walls: {}", stats.validated_walls);
    println!("    Gray regions:    {}", stats.gray_regions);

    // Step 4: Write the annotated scene
    println!("[4/5] Building overlay...");
    let elements = annotate_scene(&detected, &config);
    let annotated = svg_io::write_annotated(&svg_text, &elements).unwrap_or_else(|e| {
        eprintln!("Error: cannot write annotated scene: {}", e);
        exit(1);
    });

    // Step 5: Render the output document
    let output = output.unwrap_or_else(|| default_output(&input, svg_mode));
    if svg_mode {
        println!("[5/5] Writing annotated SVG: {}", output.display());
        fs::write(&output, annotated).unwrap_or_else(|e| {
            eprintln!("Error: cannot write '{}': {}", output.display(), e);
            exit(1);
        });
    } else {
        println!("[5/5] Rendering PDF: {}", output.display());
        let annotated_svg = input.with_extension("walls.svg");
        fs::write(&annotated_svg, annotated).unwrap_or_else(|e| {
            eprintln!("Error: cannot write '{}': {}", annotated_svg.display(), e);
            exit(1);
        });
        let render = convert::svg_to_pdf(&annotated_svg, &output);
        // Temporary files go away regardless of the render outcome
        let _ = fs::remove_file(&temp_svg);
        let _ = fs::remove_file(&annotated_svg);
        if let Err(e) = render {
            eprintln!("Error: rendering failed: {}", e);
            exit(1);
        }
    }

    println!(
        "Done! {} wall(s) highlighted.",
        detected.walls.len() + detected.gray_regions.len()
    );
}

fn load_config(path: Option<&Path>) -> DetectionConfig {
    match path {
        None => DetectionConfig::default(),
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error: cannot read config '{}': {}", path.display(), e);
                exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error: invalid config '{}': {}", path.display(), e);
                exit(1);
            })
        }
    }
}

fn default_output(input: &Path, svg_mode: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".into());
    let extension = if svg_mode { "svg" } else { "pdf" };
    input.with_file_name(format!("{}_walls.{}", stem, extension))
}

fn print_usage() {
    println!(
        r#"Floor Plan Wall Highlighter
===========================

Detects load-bearing walls in a vector floor-plan PDF and writes an
annotated copy with the detected walls highlighted.

USAGE:
  draw-walls <input.pdf> [OPTIONS]

ARGUMENTS:
  <input.pdf>          Floor-plan page (or an SVG scene with --svg)

OPTIONS:
  --output <path>      Output path (default: <input>_walls.pdf)
  --config <json>      Detection config overrides (JSON, partial is fine)
  --converter <cmd>    PDF→SVG converter command (default: pdf2svg)
  --svg                Treat input as SVG; skip conversion and emit SVG
  -h, --help           Show this help message

PIPELINE:
  1. External conversion of the page to a vector scene
  2. Scene classification: wall lines, hatching markers, gray fills
  3. Pairing parallel lines into wall candidates
  4. Marker-density validation of candidates
  5. Overlay rendering back to the output document

EXAMPLES:
  draw-walls plan.pdf
  draw-walls plan.pdf --output annotated.pdf --config tolerances.json
  draw-walls scene.svg --svg
"#
    );
}
