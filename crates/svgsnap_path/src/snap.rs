//! Snapping coordinates to a grid and serializing the result.
use std::{fmt::Write as _, str::FromStr};

use itertools::Itertools as _;
use svgsnap_parse::Parse as _;

use crate::{command::Absolute, math::to_fixed, Path};

/// The number of decimal places kept after snapping, enough to hide floating point noise
const PRECISION: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
/// The pitch of a grid that coordinates are snapped to.
///
/// # Example
///
/// ```
/// use svgsnap_path::snap::Grid;
///
/// let grid = Grid::new(0.5).unwrap();
/// assert_eq!(grid.snap(1.3), 1.5);
/// assert!(Grid::new(0.0).is_err());
/// ```
pub struct Grid(f64);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// An error while creating a grid
pub enum GridError {
    /// The grid unit was zero, negative, or not finite
    #[error("grid size must be a positive number, but received {0}")]
    NotPositive(f64),
    /// The grid unit couldn't be read as a number
    #[error("grid size must be a number: {0}")]
    Parse(#[from] svgsnap_parse::error::Error),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// An error while snapping a path
pub enum Error {
    /// A coordinate was infinite or NaN and can't be placed on the grid
    #[error("cannot snap coordinate `{0}` to the grid")]
    NonFinite(f64),
}

impl Grid {
    /// Creates a grid with the given pitch
    ///
    /// # Errors
    /// If the unit isn't a positive, finite number
    pub fn new(unit: f64) -> Result<Self, GridError> {
        if unit.is_finite() && unit > 0.0 {
            Ok(Self(unit))
        } else {
            Err(GridError::NotPositive(unit))
        }
    }

    /// Moves the value to the nearest multiple of the grid unit
    pub fn snap(self, value: f64) -> f64 {
        to_fixed((value / self.0).round_ties_even() * self.0, PRECISION)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self(1.0)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(f64::parse_string(s)?)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a snapped number, leaving out the fraction of whole numbers
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        // `-0` is written as `0`
        format!("{}", n + 0.0)
    } else {
        n.to_string()
    }
}

/// Serializes the path with every coordinate snapped to the grid
///
/// Each command is written as its uppercase letter followed by its arguments, all separated by
/// single spaces.
///
/// # Errors
/// If any of the path's coordinates isn't finite, or overflows when placed on the grid
pub fn serialize(path: &Path, grid: Grid) -> Result<String, Error> {
    let mut output = String::new();
    for (i, command) in path.0.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        output.push(command.letter());
        if matches!(command, Absolute::ClosePath) {
            continue;
        }
        let args = command
            .args()
            .iter()
            .map(|&n| {
                let snapped = grid.snap(n);
                if snapped.is_finite() {
                    Ok(format_number(snapped))
                } else {
                    Err(Error::NonFinite(n))
                }
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let _ = write!(output, " {}", args.iter().join(" "));
    }
    Ok(output)
}

#[test]
fn snap_values() {
    let grid = Grid::default();
    assert_eq!(grid.snap(0.4), 0.0);
    assert_eq!(grid.snap(0.6), 1.0);
    assert_eq!(grid.snap(2.5), 2.0);
    assert_eq!(grid.snap(-1.7), -2.0);

    let grid = Grid::new(0.1).unwrap();
    assert_eq!(grid.snap(0.26), 0.3);
    assert_eq!(grid.snap(1.04), 1.0);

    let grid = Grid::new(8.0).unwrap();
    assert_eq!(grid.snap(13.0), 16.0);
    assert_eq!(grid.snap(11.9), 8.0);
}

#[test]
fn snap_within_half_unit() {
    for unit in [0.25, 1.0, 3.0, 10.0] {
        let grid = Grid::new(unit).unwrap();
        let mut value = -50.0;
        while value < 50.0 {
            let snapped = grid.snap(value);
            assert!(
                (snapped - value).abs() <= unit / 2.0 + 1e-6,
                "{value} snapped to {snapped} with grid {unit}"
            );
            value += 0.37;
        }
    }
}

#[test]
fn grid_from_str() {
    assert_eq!("0.5".parse::<Grid>(), Ok(Grid(0.5)));
    assert_eq!(" 2 ".parse::<Grid>(), Ok(Grid(2.0)));
    assert_eq!("0".parse::<Grid>(), Err(GridError::NotPositive(0.0)));
    assert_eq!("-1".parse::<Grid>(), Err(GridError::NotPositive(-1.0)));
    assert!("1e999".parse::<Grid>().is_err());
    assert!("one".parse::<Grid>().is_err());
}

#[test]
fn format_numbers() {
    assert_eq!(format_number(3.0), "3");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(-12.0), "-12");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(-1.25), "-1.25");
    assert_eq!(format_number(0.3), "0.3");
}

#[test]
fn serialize_commands() {
    use crate::command::ID;

    let path = Path(vec![
        Absolute::MoveTo([0.2, 0.0]),
        Absolute::QuadraticBezier([1.0, 1.0, 2.0, 2.0]),
        Absolute::ClosePath,
        Absolute::PassThrough {
            id: ID::ArcBy,
            args: vec![1.0, 1.0, 0.0, 0.0, 1.0, 4.6, 5.0],
        },
    ]);
    insta::assert_snapshot!(
        serialize(&path, Grid::default()).unwrap(),
        @"M 0 0 Q 1 1 2 2 Z A 1 1 0 0 1 5 5"
    );

    let path = Path(vec![Absolute::LineTo([f64::INFINITY, 0.0])]);
    assert_eq!(
        serialize(&path, Grid::default()),
        Err(Error::NonFinite(f64::INFINITY))
    );
}

#[test]
fn serialize_large_coordinates() {
    let path = Path(vec![Absolute::MoveTo([1e303, 0.0])]);
    let output = serialize(&path, Grid::default()).unwrap();
    assert!(output.starts_with("M 1000000000"), "{output}");
    assert!(output.ends_with(" 0"), "{output}");
    assert!(!output.contains("inf"), "{output}");

    let path = Path(vec![Absolute::MoveTo([1e300, 0.0])]);
    assert_eq!(
        serialize(&path, Grid::new(1e-10).unwrap()),
        Err(Error::NonFinite(1e300))
    );
}
