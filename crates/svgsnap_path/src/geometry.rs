//! Points and the running position of a path
use std::ops::Add;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
/// An `x`, `y` coordinate
pub struct Point(pub [f64; 2]);

#[derive(Debug, Default, Clone, Copy, PartialEq)]
/// The position while walking through a path's commands
pub struct Cursor {
    /// The current point, where the next command will start from
    pub current: Point,
    /// The start of the current subpath, where a close path returns to
    pub start: Point,
}

impl Point {
    /// The point at `0, 0`
    pub const ORIGIN: Self = Self([0.0; 2]);

    /// Returns the x coordinate
    pub fn x(self) -> f64 {
        self.0[0]
    }

    /// Returns the y coordinate
    pub fn y(self) -> f64 {
        self.0[1]
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self(value)
    }
}

impl Cursor {
    /// Moves the cursor, starting a new subpath at the point
    pub fn move_to(&mut self, point: Point) {
        self.current = point;
        self.start = point;
    }

    /// Returns the cursor to the start of the subpath
    pub fn close(&mut self) {
        self.current = self.start;
    }
}

#[test]
fn cursor() {
    let mut cursor = Cursor::default();
    cursor.move_to(Point([1.0, 2.0]));
    cursor.current = cursor.current + Point([3.0, 3.0]);
    assert_eq!(cursor.current, Point([4.0, 5.0]));
    cursor.close();
    assert_eq!(cursor.current, Point([1.0, 2.0]));
}
