//! Definitions for the commands of path data.
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A type of path command, as written in path data.
pub enum ID {
    /// M
    /// Move the current point to coordinate `x`, `y`. Any subsequent coordinate pair(s) are
    /// interpreted as parameter(s) for implicit absolute `LineTo` (L) command(s)
    MoveTo,
    /// m
    MoveBy,
    /// Z or z
    ClosePath,
    /// L
    LineTo,
    /// l
    LineBy,
    /// H
    HorizontalLineTo,
    /// h
    HorizontalLineBy,
    /// V
    VerticalLineTo,
    /// v
    VerticalLineBy,
    /// C
    CubicBezierTo,
    /// c
    CubicBezierBy,
    /// S
    SmoothBezierTo,
    /// s
    SmoothBezierBy,
    /// Q
    QuadraticBezierTo,
    /// q
    QuadraticBezierBy,
    /// T
    SmoothQuadraticBezierTo,
    /// t
    SmoothQuadraticBezierBy,
    /// A
    ArcTo,
    /// a
    ArcBy,
}

#[derive(Clone, Debug, PartialEq)]
/// A command letter and the numbers that followed it, before any coordinates are resolved.
pub struct Token {
    /// The command as written
    pub id: ID,
    /// Every number found between this command and the next
    pub args: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
/// A path command where every coordinate is absolute.
pub enum Absolute {
    /// M
    MoveTo([f64; 2]),
    /// L, including lines resolved from H and V
    LineTo([f64; 2]),
    /// C
    CubicBezier([f64; 6]),
    /// S, with the first control point left implicit
    SmoothCubic([f64; 4]),
    /// Q
    QuadraticBezier([f64; 4]),
    /// Z
    ClosePath,
    /// A command that isn't resolved, such as an arc or smooth quadratic.
    /// Arguments are kept as written.
    PassThrough {
        /// The original command
        id: ID,
        /// The original arguments
        args: Vec<f64>,
    },
}

impl Absolute {
    /// Returns the uppercase letter used when serializing the command
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::LineTo(_) => 'L',
            Self::CubicBezier(_) => 'C',
            Self::SmoothCubic(_) => 'S',
            Self::QuadraticBezier(_) => 'Q',
            Self::ClosePath => 'Z',
            Self::PassThrough { id, .. } => id.to_absolute_char(),
        }
    }

    /// Returns the arguments for the command
    pub fn args(&self) -> &[f64] {
        match self {
            Self::MoveTo(a) | Self::LineTo(a) => a,
            Self::CubicBezier(a) => a,
            Self::SmoothCubic(a) | Self::QuadraticBezier(a) => a,
            Self::ClosePath => &[],
            Self::PassThrough { args, .. } => args,
        }
    }

    /// Returns the point the command ends at, if it's resolved
    pub fn end(&self) -> Option<[f64; 2]> {
        match self {
            Self::ClosePath | Self::PassThrough { .. } => None,
            _ => {
                let args = self.args();
                Some([args[args.len() - 2], args[args.len() - 1]])
            }
        }
    }
}

impl ID {
    /// Returns whether the command's arguments are relative to the current point
    pub fn is_by(self) -> bool {
        matches!(
            self,
            Self::MoveBy
                | Self::LineBy
                | Self::HorizontalLineBy
                | Self::VerticalLineBy
                | Self::CubicBezierBy
                | Self::SmoothBezierBy
                | Self::QuadraticBezierBy
                | Self::SmoothQuadraticBezierBy
                | Self::ArcBy
        )
    }

    /// Returns the uppercase form of the command's letter
    pub fn to_absolute_char(self) -> char {
        char::from(self).to_ascii_uppercase()
    }
}

impl TryFrom<char> for ID {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'M' => Ok(Self::MoveTo),
            'm' => Ok(Self::MoveBy),
            'L' => Ok(Self::LineTo),
            'l' => Ok(Self::LineBy),
            'H' => Ok(Self::HorizontalLineTo),
            'h' => Ok(Self::HorizontalLineBy),
            'V' => Ok(Self::VerticalLineTo),
            'v' => Ok(Self::VerticalLineBy),
            'C' => Ok(Self::CubicBezierTo),
            'c' => Ok(Self::CubicBezierBy),
            'S' => Ok(Self::SmoothBezierTo),
            's' => Ok(Self::SmoothBezierBy),
            'Q' => Ok(Self::QuadraticBezierTo),
            'q' => Ok(Self::QuadraticBezierBy),
            'T' => Ok(Self::SmoothQuadraticBezierTo),
            't' => Ok(Self::SmoothQuadraticBezierBy),
            'A' => Ok(Self::ArcTo),
            'a' => Ok(Self::ArcBy),
            'Z' | 'z' => Ok(Self::ClosePath),
            _ => Err(()),
        }
    }
}

impl From<ID> for char {
    fn from(value: ID) -> Self {
        match value {
            ID::MoveTo => 'M',
            ID::MoveBy => 'm',
            ID::ClosePath => 'Z',
            ID::LineTo => 'L',
            ID::LineBy => 'l',
            ID::HorizontalLineTo => 'H',
            ID::HorizontalLineBy => 'h',
            ID::VerticalLineTo => 'V',
            ID::VerticalLineBy => 'v',
            ID::CubicBezierTo => 'C',
            ID::CubicBezierBy => 'c',
            ID::SmoothBezierTo => 'S',
            ID::SmoothBezierBy => 's',
            ID::QuadraticBezierTo => 'Q',
            ID::QuadraticBezierBy => 'q',
            ID::SmoothQuadraticBezierTo => 'T',
            ID::SmoothQuadraticBezierBy => 't',
            ID::ArcTo => 'A',
            ID::ArcBy => 'a',
        }
    }
}

impl std::fmt::Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char((*self).into())
    }
}

#[test]
fn id_letters() {
    for letter in "MmZLlHhVvCcSsQqTtAa".chars() {
        let id = ID::try_from(letter).unwrap();
        assert_eq!(char::from(id), letter);
        assert_eq!(id.is_by(), letter.is_ascii_lowercase());
    }
    assert_eq!(ID::try_from('z'), Ok(ID::ClosePath));
    assert_eq!(ID::try_from('e'), Err(()));
    assert_eq!(ID::ArcBy.to_absolute_char(), 'A');
}

#[test]
fn absolute_end() {
    assert_eq!(
        Absolute::CubicBezier([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).end(),
        Some([5.0, 6.0])
    );
    assert_eq!(Absolute::ClosePath.end(), None);
    assert_eq!(Absolute::ClosePath.letter(), 'Z');
}
