use bevy::prelude::*;
use bookkeeping::BookkeepingPlugin;
pub(crate) use bookkeeping::SelectionSet;
#[cfg(test)]
pub(crate) use bookkeeping::update_selection;
pub use bookkeeping::{DeselectEntityEvent, SelectEntityEvent, Selected};
pub use registry::{SelectionChangedEvent, SelectionRegistry};

mod bookkeeping;
mod registry;

pub(crate) struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(BookkeepingPlugin);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub(crate) enum SelectionMode {
    /// Marquee membership replaces the current selection: entities outside
    /// of the rectangle are deselected.
    Replace,
    /// Entities inside the rectangle are added to the current selection and
    /// no entity is deselected.
    Add,
}
