use bevy::prelude::*;
use glam::Vec2;

use crate::worldgeom::WorldRect;

/// An object which can be selected by the player with a click or with the
/// selection marquee.
#[derive(Component)]
pub struct Selectable;

/// An object which can move and thus receive movement orders.
#[derive(Component)]
pub struct Mobile;

/// An object capable of having a rally point. Newly produced units head to
/// the rally point if one is set.
#[derive(Component, Default)]
pub struct RallyPoint(Option<Vec2>);

impl RallyPoint {
    pub fn get(&self) -> Option<Vec2> {
        self.0
    }

    pub fn set(&mut self, point: Vec2) {
        self.0 = Some(point);
    }
}

/// Axis-aligned extent of the object around its translation, used for
/// pointer hit-testing and marquee overlap tests.
#[derive(Component)]
pub struct ObjectBounds {
    half_size: Vec2,
}

impl ObjectBounds {
    pub fn new(half_size: Vec2) -> Self {
        debug_assert!(half_size.cmpge(Vec2::ZERO).all());
        Self { half_size }
    }

    pub fn half_size(&self) -> Vec2 {
        self.half_size
    }

    /// Returns the world-space rectangle of the object placed at `position`.
    pub fn rect(&self, position: Vec2) -> WorldRect {
        WorldRect::from_center(position, self.half_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect() {
        let bounds = ObjectBounds::new(Vec2::new(2., 3.));
        let rect = bounds.rect(Vec2::new(10., 20.));
        assert_eq!(rect.min(), Vec2::new(8., 17.));
        assert_eq!(rect.max(), Vec2::new(12., 23.));
    }
}
