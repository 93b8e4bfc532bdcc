use bevy::prelude::*;
use vg_core::{schedule::InputSchedule, state::GameState};

use crate::{
    areaselect::{AreaSelectSet, SelectInRectEvent},
    marquee::UpdateSelectionBoxEvent,
    mouse::{MouseDraggedEvent, MouseSet},
    selection::SelectionMode,
};

pub(crate) struct DragSelectPlugin;

impl Plugin for DragSelectPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            InputSchedule,
            update_drags
                .run_if(in_state(GameState::Playing))
                .after(MouseSet::Buttons)
                .before(AreaSelectSet::SelectInArea),
        );
    }
}

/// Translates drag updates to selection box redraws and, on every update, to
/// a live recomputation of the entities selected by the marquee.
fn update_drags(
    mut drag_events: EventReader<MouseDraggedEvent>,
    mut ui_events: EventWriter<UpdateSelectionBoxEvent>,
    mut select_events: EventWriter<SelectInRectEvent>,
) {
    for drag_event in drag_events.iter() {
        match drag_event.rects() {
            Some((screen_rect, world_rect)) => {
                ui_events.send(UpdateSelectionBoxEvent::from_rect(screen_rect));

                let mode = if drag_event.additive() {
                    SelectionMode::Add
                } else {
                    SelectionMode::Replace
                };
                select_events.send(SelectInRectEvent::new(world_rect, mode));
            }
            None => ui_events.send(UpdateSelectionBoxEvent::none()),
        }
    }
}
