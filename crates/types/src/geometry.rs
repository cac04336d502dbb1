//! Page geometry in PDF points with a bottom-left origin.

/// Tolerance used when comparing derived layout values.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same size with width and height swapped.
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// An axis-aligned rectangle. `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when the rectangle has no visible area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the interiors intersect. Shared edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right() - EPSILON
            && other.x < self.right() - EPSILON
            && self.y < other.top() - EPSILON
            && other.y < self.top() - EPSILON
    }

    /// True when `other` lies inside `self`, edges included.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.top() <= self.top() + EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 60.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_degenerate() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, 5.0, -1.0).is_degenerate());
        assert!(!Rect::new(0.0, 0.0, 5.0, 5.0).is_degenerate());
    }

    #[test]
    fn test_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(0.0, 50.0, 100.0, 50.0)));
        assert!(!outer.contains(&Rect::new(-1.0, 0.0, 10.0, 10.0)));
    }
}
