use bevy::{app::PluginGroupBuilder, prelude::PluginGroup};
use cleanup::CleanupPlugin;
use schedule::GameSchedulesPlugin;
use state::StatePlugin;

pub mod cleanup;
pub mod objects;
pub mod schedule;
pub mod screengeom;
pub mod state;
pub mod worldgeom;

pub struct CorePluginGroup;

impl PluginGroup for CorePluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(GameSchedulesPlugin)
            .add(StatePlugin)
            .add(CleanupPlugin)
    }
}
