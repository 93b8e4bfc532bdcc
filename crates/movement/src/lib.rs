use bevy::{app::PluginGroupBuilder, prelude::PluginGroup};
use movement::MovementPlugin;
pub use movement::{MoveOrders, SetMoveTargetEvent};

mod movement;

/// Maximum object speed in world units per second.
const MAX_SPEED: f32 = 120.;

pub struct MovementPluginGroup;

impl PluginGroup for MovementPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>().add(MovementPlugin)
    }
}
