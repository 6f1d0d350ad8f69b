/// Pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Element bounds in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `x` falls inside the horizontal span, edges included.
    pub fn spans_x(&self, x: f64) -> bool {
        x >= self.left() && x <= self.right()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.spans_x(point.x) && point.y >= self.top() && point.y <= self.bottom()
    }
}

/// Scroll offset (or maximum offset) of a scrollable element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Clamps each axis to `[0, extent]`.
    pub fn clamp_to(self, extent: ScrollOffset) -> Self {
        Self {
            left: self.left.clamp(0.0, extent.left.max(0.0)),
            top: self.top.clamp(0.0, extent.top.max(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_x_includes_edges() {
        let rect = Rect::new(100.0, 0.0, 50.0, 10.0);
        assert!(rect.spans_x(100.0));
        assert!(rect.spans_x(150.0));
        assert!(!rect.spans_x(150.5));
        assert!(!rect.spans_x(99.0));
    }

    #[test]
    fn test_clamp_to_extent() {
        let extent = ScrollOffset::new(300.0, 0.0);
        assert_eq!(
            ScrollOffset::new(-10.0, 25.0).clamp_to(extent),
            ScrollOffset::new(0.0, 0.0)
        );
        assert_eq!(
            ScrollOffset::new(310.0, -1.0).clamp_to(extent),
            ScrollOffset::new(300.0, 0.0)
        );
    }

    #[test]
    fn test_negative_extent_clamps_to_zero() {
        let extent = ScrollOffset::new(-5.0, -5.0);
        assert_eq!(
            ScrollOffset::new(3.0, 3.0).clamp_to(extent),
            ScrollOffset::default()
        );
    }
}
