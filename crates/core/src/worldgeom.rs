use glam::Vec2;

/// An axis-aligned rectangle in world coordinates, used for entity bounds and
/// for the world-space projection of the selection marquee.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldRect {
    min: Vec2,
    max: Vec2,
}

impl WorldRect {
    /// Creates a new world rectangle from two arbitrary corner points given
    /// in any order.
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a rectangle centered at `center` with the given half extent
    /// on each axis.
    pub fn from_center(center: Vec2, half_size: Vec2) -> Self {
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Returns true if the point lies within the rectangle. Points on the
    /// edges are inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Returns true if the two rectangles intersect. Rectangles which merely
    /// touch by an edge or a corner intersect as well.
    pub fn intersects(&self, other: &WorldRect) -> bool {
        self.max.cmpge(other.min).all() && self.min.cmple(other.max).all()
    }
}
