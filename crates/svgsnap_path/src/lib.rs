//! SVGSnap Path is a library used for normalizing SVG paths onto a grid.
//!
//! Path data is handled in three steps:
//! 1. [`parser::tokenize`] splits the definition into a [`Token`](command::Token) per command
//! 2. [`convert::absolute`] resolves every relative command against the running cursor
//! 3. [`snap::serialize`] snaps every coordinate to a [`Grid`] and writes the path back out
//!
//! Use [`normalize`] to run all three.
//!
//! # Limitations
//!
//! - Arcs (`A`) and smooth quadratics (`T`) are passed through as written, only uppercased.
//! - Smooth cubics (`S`) keep their implicit first control point implicit.
//! - A relative move (`m`) is always relative to the current point, which is the subpath start
//!   after a close path.
pub mod command;
pub mod convert;
pub mod geometry;
pub(crate) mod math;
pub mod parser;
pub mod snap;

pub use crate::snap::Grid;

#[derive(Debug, Clone, PartialEq, Default)]
/// A path made up of absolute commands
///
/// # Example
///
/// ```
/// use svgsnap_path::{command::Absolute, Path};
///
/// let path = Path::parse("m 10 10 h 5").unwrap();
/// assert_eq!(path.0[1], Absolute::LineTo([15.0, 10.0]));
/// ```
pub struct Path(pub Vec<command::Absolute>);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// An error while normalizing path data
pub enum Error {
    /// The commands couldn't be resolved to absolute coordinates
    #[error(transparent)]
    Convert(#[from] convert::Error),
    /// The coordinates couldn't be snapped
    #[error(transparent)]
    Snap(#[from] snap::Error),
}

impl Path {
    /// Parses a path definition, resolving it to absolute commands
    ///
    /// # Errors
    /// If a command is missing arguments
    pub fn parse(definition: &str) -> Result<Self, convert::Error> {
        convert::absolute(parser::tokenize(definition))
    }

    /// Serializes the path with its coordinates snapped to the grid
    ///
    /// # Errors
    /// If a coordinate isn't finite
    pub fn snap(&self, grid: Grid) -> Result<String, snap::Error> {
        snap::serialize(self, grid)
    }
}

/// Converts the path definition to absolute commands with every coordinate snapped to the grid
///
/// # Example
///
/// ```
/// use svgsnap_path::{normalize, Grid};
///
/// let d = normalize("m 0.4 0 c 1 1 2 2 3 3 z", Grid::default()).unwrap();
/// assert_eq!(d, "M 0 0 C 1 1 2 2 3 3 Z");
/// ```
///
/// # Errors
/// If the definition has a command with missing arguments, or coordinates that aren't finite
pub fn normalize(definition: &str, grid: Grid) -> Result<String, Error> {
    Ok(Path::parse(definition)?.snap(grid)?)
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_normalize() {
    let grid = Grid::default();

    insta::assert_snapshot!(
        normalize("M0 0 C1 1 2 2 3 3", grid).unwrap(),
        @"M 0 0 C 1 1 2 2 3 3"
    );
    insta::assert_snapshot!(
        normalize("m10.2,10.6 l5-5 h-2.5 v1 s1 1 2 2 q1 1 2 2z", grid).unwrap(),
        @"M 10 11 L 15 6 L 13 6 L 13 7 S 14 8 15 9 Q 16 10 17 11 Z"
    );
    insta::assert_snapshot!(
        normalize("M 0 0 L 0.26 0.74", Grid::new(0.25).unwrap()).unwrap(),
        @"M 0 0 L 0.25 0.75"
    );
    insta::assert_snapshot!(normalize("", grid).unwrap(), @"");

    assert_eq!(
        normalize("M 0 0 C 1 1 2 2 3", grid),
        Err(Error::Convert(convert::Error::IncompleteArguments {
            command: command::ID::CubicBezierTo,
            group: 3,
            received: 2
        }))
    );
    assert!(matches!(
        normalize("M 0 0 L 1e999 0", grid),
        Err(Error::Snap(_))
    ));
    assert!(matches!(
        normalize("M 1e300 0", Grid::new(1e-10).unwrap()),
        Err(Error::Snap(_))
    ));
}

#[test]
fn test_normalize_idempotent() {
    for (definition, unit) in [
        ("M 1 2 L 3 4 H 7 V 9 C 1 2 3 4 5 6 S 7 8 9 10 Q 1 2 3 4 Z", 1.0),
        ("M 0.1 0.2 L 3.33 4.44 C 1.7 2.2 3.9 4.1 5.5 6.6 Z", 0.5),
        ("M 12.5 7.5 L 100.25 -3.75 Q -1 -2 -3.3 -4.4", 0.1),
    ] {
        let grid = Grid::new(unit).unwrap();
        let once = normalize(definition, grid).unwrap();
        let twice = normalize(&once, grid).unwrap();
        assert_eq!(once, twice, "normalizing {definition} with grid {unit}");
    }
}
