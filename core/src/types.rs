use core::fmt;
use core::ops::Add;
use serde::{Deserialize, Serialize};

/// Pixel scalar used for all board geometry.
pub type Px = f64;

/// Number of disks in play.
pub type DiskCount = u8;

/// A position on the drawing surface, relative to its origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Px,
    pub y: Px,
}

impl Point {
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis-aligned rectangle, `(x, y)` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: Px,
    pub y: Px,
    pub w: Px,
    pub h: Px,
}

impl Rect {
    pub const fn new(x: Px, y: Px, w: Px, h: Px) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Solid color; displays as a CSS `rgb(...)` fill style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One of the three named pegs, left to right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    pub const fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    pub const fn label(self) -> char {
        match self {
            Peg::A => 'A',
            Peg::B => 'B',
            Peg::C => 'C',
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let rect = Rect::new(10.0, 20.0, 40.0, 20.0);

        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(50.0, 40.0)));
        assert!(rect.contains(rect.center()));
        assert!(!rect.contains(Point::new(9.9, 30.0)));
        assert!(!rect.contains(Point::new(30.0, 40.1)));
    }

    #[test]
    fn rgb_displays_as_css_fill_style() {
        let color = Rgb { r: 12, g: 0, b: 255 };
        assert_eq!(color.to_string(), "rgb(12, 0, 255)");
    }

    #[test]
    fn peg_labels_match_left_to_right_order() {
        let labels: alloc::vec::Vec<char> = Peg::ALL.iter().map(|peg| peg.label()).collect();
        assert_eq!(labels, ['A', 'B', 'C']);
        assert_eq!(Peg::C.index(), 2);
    }
}
