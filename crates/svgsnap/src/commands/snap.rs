use std::{convert::Infallible, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use svgsnap_ast::{
    edit::Edits, element::Describe, parse::parse, visitor::Visitor, Document, Node,
};
use svgsnap_path::{normalize, Grid};

use crate::{
    args::RunCommand,
    config::Config,
    fs::{load_file, write_file},
};

#[derive(Parser, Debug)]
#[clap(
    bin_name = "snap-to-grid",
    name = "snap-to-grid",
    author,
    version,
    about = "Rewrites SVG paths with absolute coordinates snapped to a grid",
    long_about = None
)]
/// Rewrites each path of a document with absolute coordinates snapped to a grid
pub struct SnapToGrid {
    /// The document to read
    #[clap(value_parser, default_value = "input.svg")]
    pub input: PathBuf,
    /// The file to write the result to
    #[clap(value_parser, default_value = "output.svg")]
    pub output: PathBuf,
    /// The size of the grid, which must be a positive number.
    /// Defaults to the configured size, or 1
    pub grid: Option<Grid>,
}

impl RunCommand for SnapToGrid {
    fn run(self, config: Config) -> anyhow::Result<()> {
        let grid = match self.grid {
            Some(grid) => grid,
            None => match config.snap.and_then(|snap| snap.grid) {
                Some(unit) => Grid::new(unit).context("Configured grid is invalid")?,
                None => Grid::default(),
            },
        };

        let source = load_file(&self.input)?;
        let document = parse(&source)
            .with_context(|| format!("Failed to parse {}", self.input.display()))?;
        let edits = snap_document(&document, grid);
        write_file(&self.output, &document, &edits)?;

        println!("Done. Saved to {}", self.output.display());
        Ok(())
    }
}

struct SnapPaths {
    grid: Grid,
    edits: Edits,
    skipped: usize,
}

impl<'a, 'input: 'a> Visitor<'a, 'input> for SnapPaths {
    type Error = Infallible;

    fn element(&mut self, element: Node<'a, 'input>) -> Result<(), Self::Error> {
        let Some(d) = element.attribute("d") else {
            return Ok(());
        };
        match normalize(d, self.grid) {
            Ok(snapped) => {
                self.edits.set_attribute(element, "d", snapped);
            }
            Err(error) => {
                log::warn!("could not process path {}: {error}", Describe(element));
                self.skipped += 1;
            }
        }
        Ok(())
    }

    fn exit_document(&mut self, _document: &'a Document<'input>) -> Result<(), Self::Error> {
        log::debug!(
            "snap: snapped {} paths, skipped {}",
            self.edits.len(),
            self.skipped
        );
        Ok(())
    }
}

/// Normalizes the `d` attribute of every element in the document.
///
/// Paths that can't be normalized are logged and left out of the edits, so they're written as
/// they were.
pub fn snap_document(document: &Document, grid: Grid) -> Edits {
    let mut snap = SnapPaths {
        grid,
        edits: Edits::default(),
        skipped: 0,
    };
    if let Err(never) = snap.start(document) {
        match never {}
    }
    snap.edits
}

#[test]
fn snap_paths() {
    let document = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
  <path id="a" d="m 10.2,10.6 l 5 -5 h -2.5 z"/>
  <path id="broken" d="M 0 0 C 1 1 2 2 3"/>
  <g><path id="b" sodipodi:d="m 1 1" d="M 0.4 0.6 Q 1 1 2 2"/></g>
  <text d="v 3">d</text>
</svg>"#,
    )
    .unwrap();
    let edits = snap_document(&document, Grid::default());
    assert_eq!(edits.len(), 3);

    insta::assert_snapshot!(
        svgsnap_ast::serialize::to_string(&document, &edits).unwrap(),
        @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
      <path id="a" d="M 10 11 L 15 6 L 13 6 Z"/>
      <path id="broken" d="M 0 0 C 1 1 2 2 3"/>
      <g><path id="b" sodipodi:d="m 1 1" d="M 0 1 Q 1 1 2 2"/></g>
      <text d="L 0 3">d</text>
    </svg>
    "#
    );
}

#[test]
fn snap_grid() {
    let document = parse(r#"<svg><path d="M 0.3 0.3 L 0.6 0.9"/></svg>"#).unwrap();
    let edits = snap_document(&document, "0.5".parse().unwrap());
    assert_eq!(
        svgsnap_ast::serialize::to_string(&document, &edits).unwrap(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><path d=\"M 0.5 0.5 L 0.5 1\"/></svg>"
    );
}

#[test]
fn parse_args() {
    let args = SnapToGrid::try_parse_from(["snap-to-grid"]).unwrap();
    assert_eq!(args.input, PathBuf::from("input.svg"));
    assert_eq!(args.output, PathBuf::from("output.svg"));
    assert_eq!(args.grid, None);

    let args = SnapToGrid::try_parse_from(["snap-to-grid", "a.svg", "b.svg", "0.25"]).unwrap();
    assert_eq!(args.grid, Some(Grid::new(0.25).unwrap()));

    assert!(SnapToGrid::try_parse_from(["snap-to-grid", "a.svg", "b.svg", "0"]).is_err());
    assert!(SnapToGrid::try_parse_from(["snap-to-grid", "a.svg", "b.svg", "-2"]).is_err());
}

#[cfg(test)]
fn run_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("svgsnap-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn run_malformed_input() -> anyhow::Result<()> {
    let dir = run_dir("malformed");
    let input = dir.join("input.svg");
    let output = dir.join("output.svg");
    std::fs::write(&input, "<svg><path d=\"M 0 0\"></svg>")?;

    let command = SnapToGrid {
        input,
        output: output.clone(),
        grid: None,
    };
    assert!(command.run(Config::default()).is_err());
    assert!(!output.exists());

    std::fs::remove_dir_all(dir)?;
    Ok(())
}

#[test]
fn run_grid_precedence() -> anyhow::Result<()> {
    use crate::config::Snap;

    let dir = run_dir("precedence");
    let input = dir.join("input.svg");
    let output = dir.join("output.svg");
    std::fs::write(&input, r#"<svg><path d="M 0.3 0.3 L 0.6 0.9"/></svg>"#)?;
    let config = Config {
        snap: Some(Snap { grid: Some(0.5) }),
        ..Config::default()
    };

    SnapToGrid {
        input: input.clone(),
        output: output.clone(),
        grid: None,
    }
    .run(config.clone())?;
    assert_eq!(
        load_file(&output)?,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><path d=\"M 0.5 0.5 L 0.5 1\"/></svg>"
    );

    SnapToGrid {
        input: input.clone(),
        output: output.clone(),
        grid: Some(Grid::default()),
    }
    .run(config)?;
    assert_eq!(
        load_file(&output)?,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><path d=\"M 0 0 L 1 1\"/></svg>"
    );

    SnapToGrid {
        input,
        output: output.clone(),
        grid: None,
    }
    .run(Config::default())?;
    assert_eq!(
        load_file(&output)?,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg><path d=\"M 0 0 L 1 1\"/></svg>"
    );

    std::fs::remove_dir_all(dir)?;
    Ok(())
}

#[test]
fn run_invalid_configured_grid() -> anyhow::Result<()> {
    use crate::config::Snap;

    let dir = run_dir("configured-grid");
    let input = dir.join("input.svg");
    let output = dir.join("output.svg");
    std::fs::write(&input, r#"<svg><path d="M 0.3 0.3"/></svg>"#)?;
    let config = Config {
        snap: Some(Snap { grid: Some(0.0) }),
        ..Config::default()
    };

    let command = SnapToGrid {
        input,
        output: output.clone(),
        grid: None,
    };
    let error = command.run(config).unwrap_err();
    assert_eq!(error.to_string(), "Configured grid is invalid");
    assert!(!output.exists());

    std::fs::remove_dir_all(dir)?;
    Ok(())
}
