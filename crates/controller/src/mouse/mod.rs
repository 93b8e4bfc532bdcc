use bevy::prelude::*;
use input::InputPlugin;
pub(crate) use input::{MouseDraggedEvent, MousePressedEvent, MouseSet};
pub use input::{MouseLeftClickEvent, MouseRightClickEvent};

mod input;

pub(crate) struct MousePlugin;

impl Plugin for MousePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputPlugin);
    }
}
