use bevy::{ecs::system::SystemParam, prelude::*};

/// Projection from window coordinates onto the game world.
#[derive(SystemParam)]
pub(crate) struct ScreenCamera<'w, 's> {
    cameras: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<Camera2d>>,
}

impl<'w, 's> ScreenCamera<'w, 's> {
    /// Returns the world-space point below a point on the screen.
    ///
    /// # Arguments
    ///
    /// * `point` - position in the window in logical pixels.
    pub(crate) fn world_point(&self, point: Vec2) -> Option<Vec2> {
        let (camera, camera_transform) = self.cameras.get_single().ok()?;
        camera.viewport_to_world_2d(camera_transform, point)
    }
}
