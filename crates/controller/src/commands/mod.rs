//! This module translates click intents into game commands: click selection
//! toggles, movement orders and rally point updates.

use bevy::prelude::*;

use self::handlers::HandlersPlugin;

mod handlers;

pub(crate) struct CommandsPlugin;

impl Plugin for CommandsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(HandlersPlugin);
    }
}
