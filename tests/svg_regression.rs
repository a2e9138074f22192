//! SVG regression tests over the fixture matrices in `tests/fixtures/`
//!
//! Every `.txt` fixture must parse, render to well-formed SVG and re-rasterise
//! to exactly its dark modules.

use std::fs;
use std::path::Path;

use qr_vector::{compose, render_svg, ModuleMatrix, QrOptions, SvgConfig};

/// Pull the foreground `d` attribute (second path) out of a rendered SVG
fn foreground_d(svg: &str) -> Option<&str> {
    let mut rest = svg;
    let mut found = None;
    for _ in 0..2 {
        let at = rest.find(" d=\"")? + 4;
        let end = rest[at..].find('"')? + at;
        found = Some(&rest[at..end]);
        rest = &rest[end..];
    }
    found
}

/// Re-rasterise a path made of `M{x} {y}h{w}v1H{x}z` operations
fn rasterise(d: &str, size: usize, margin: usize) -> Vec<Vec<bool>> {
    let mut grid = vec![vec![false; size]; size];
    for op in d.split('M').filter(|s| !s.is_empty()) {
        let (x, rest) = op.split_once(' ').expect("x coordinate");
        let (y, rest) = rest.split_once('h').expect("y coordinate");
        let (w, _) = rest.split_once('v').expect("run width");
        let x: usize = x.parse().expect("numeric x");
        let y: usize = y.parse().expect("numeric y");
        let w: usize = w.parse().expect("numeric width");
        for cx in x..x + w {
            assert!(!grid[y - margin][cx - margin], "module painted twice");
            grid[y - margin][cx - margin] = true;
        }
    }
    grid
}

#[test]
fn test_svg_regression_all_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures");

    let mut tested = 0;
    let mut failures = Vec::new();

    for entry in fs::read_dir(fixtures_dir).expect("Failed to read fixtures directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.extension().map_or(false, |ext| ext == "txt") {
            let text = fs::read_to_string(&path).expect("Failed to read fixture");
            let matrix = match ModuleMatrix::parse(&text) {
                Ok(m) => m,
                Err(e) => {
                    failures.push(format!("Failed to parse {}: {}", path.display(), e));
                    continue;
                }
            };

            for margin in [0.0, 4.0] {
                let options = QrOptions::new().with_margin(margin);
                let drawing = match compose(&matrix, &options) {
                    Ok(d) => d,
                    Err(e) => {
                        failures.push(format!("Failed to render {}: {}", path.display(), e));
                        continue;
                    }
                };
                let svg = render_svg(&drawing, &SvgConfig::default());

                if !svg.contains("<svg") || !svg.ends_with("</svg>") {
                    failures.push(format!("Invalid SVG in {}", path.display()));
                    continue;
                }

                let d = foreground_d(&svg).unwrap_or_default();
                let grid = rasterise(d, matrix.size(), drawing.margin);
                let expected: Vec<Vec<bool>> = matrix.rows().map(|r| r.to_vec()).collect();
                if grid != expected {
                    failures.push(format!(
                        "Path for {} (margin {}) does not reproduce the matrix",
                        path.display(),
                        drawing.margin
                    ));
                }
            }
            tested += 1;
        }
    }

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("  - {}", failure);
        }
        panic!("{} fixture check(s) failed. See output above.", failures.len());
    }

    assert!(tested > 0, "No .txt fixtures found in tests/fixtures");
}

#[test]
fn test_finder_fixture_top_row() {
    let text = fs::read_to_string("tests/fixtures/finder21.txt").expect("fixture");
    let matrix = ModuleMatrix::parse(&text).expect("Should parse");
    let drawing = compose(&matrix, &QrOptions::default()).expect("Should compose");

    // "#######.#####.#######"
    let top: Vec<_> = drawing
        .foreground
        .runs()
        .iter()
        .filter(|r| r.y == 0)
        .map(|r| (r.x, r.width))
        .collect();
    assert_eq!(top, vec![(0, 7), (8, 5), (14, 7)]);
}

#[test]
fn test_fixture_output_is_stable() {
    let text = fs::read_to_string("tests/fixtures/stripes5.txt").expect("fixture");
    let matrix = ModuleMatrix::parse(&text).expect("Should parse");
    let drawing = compose(&matrix, &QrOptions::default()).expect("Should compose");
    insta::assert_snapshot!(
        drawing.foreground.to_svg_d(),
        @"M0 0h1v1H0zM2 0h1v1H2zM4 0h1v1H4zM0 2h5v1H0zM4 3h1v1H4zM0 4h1v1H0z"
    );
}
