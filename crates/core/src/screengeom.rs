use glam::Vec2;

/// An axis-aligned rectangle on the screen in logical pixels. The origin is
/// in the top-left corner of the window.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenRect {
    min: Vec2,
    max: Vec2,
}

impl ScreenRect {
    /// Creates a new screen rectangle from two arbitrary corner points. The
    /// points may be given in any order, thus this handles rectangles dragged
    /// in all four directions.
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// X coordinate of the left edge.
    pub fn left(&self) -> f32 {
        self.min.x
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.max.x
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Returns size of the rectangle in logical pixels.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let rect = ScreenRect::from_points(Vec2::new(120., 40.), Vec2::new(80., 90.));
        assert_eq!(rect.left(), 80.);
        assert_eq!(rect.right(), 120.);
        assert_eq!(rect.top(), 40.);
        assert_eq!(rect.bottom(), 90.);
        assert_eq!(rect.size(), Vec2::new(40., 50.));
    }

    #[test]
    fn test_from_points_degenerate() {
        let rect = ScreenRect::from_points(Vec2::new(100., 100.), Vec2::new(150., 100.));
        assert_eq!(rect.left(), 100.);
        assert_eq!(rect.right(), 150.);
        assert_eq!(rect.size(), Vec2::new(50., 0.));
    }
}
