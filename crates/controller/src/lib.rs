//! This crate implements handling of user input: it interprets raw pointer
//! events as selection and command intents and executes them on the game
//! world.

use areaselect::AreaSelectPlugin;
use bevy::{app::PluginGroupBuilder, prelude::*};
use commands::CommandsPlugin;
use dragselect::DragSelectPlugin;
use marquee::MarqueePlugin;
use mouse::MousePlugin;
use selection::SelectionPlugin;

mod areaselect;
mod commands;
mod dragselect;
mod marquee;
mod mouse;
mod pointer;
mod selection;

pub use mouse::{MouseLeftClickEvent, MouseRightClickEvent};
pub use selection::{
    DeselectEntityEvent, SelectEntityEvent, Selected, SelectionChangedEvent, SelectionRegistry,
};

pub struct ControllerPluginGroup;

impl PluginGroup for ControllerPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(MousePlugin)
            .add(DragSelectPlugin)
            .add(AreaSelectPlugin)
            .add(SelectionPlugin)
            .add(CommandsPlugin)
            .add(MarqueePlugin)
    }
}
