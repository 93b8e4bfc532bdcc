use bevy::prelude::*;
use vg_core::{
    objects::{Mobile, ObjectBounds, RallyPoint, Selectable},
    schedule::InputSchedule,
    state::GameState,
};
use vg_movement::SetMoveTargetEvent;

use crate::{
    areaselect::AreaSelectSet,
    mouse::{MouseLeftClickEvent, MousePressedEvent, MouseRightClickEvent, MouseSet},
    selection::{DeselectEntityEvent, SelectEntityEvent, Selected, SelectionSet},
};

pub(super) struct HandlersPlugin;

impl Plugin for HandlersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            InputSchedule,
            (
                press_handler
                    .in_set(HandlersSet::Press)
                    .before(SelectionSet::Update)
                    .before(AreaSelectSet::SelectInArea),
                left_click_handler
                    .in_set(HandlersSet::LeftClick)
                    .before(SelectionSet::Update),
                right_click_handler.in_set(HandlersSet::RightClick),
            )
                .run_if(in_state(GameState::Playing))
                .after(MouseSet::Buttons),
        );
    }
}

#[derive(Copy, Clone, Hash, Debug, PartialEq, Eq, SystemSet)]
pub(crate) enum HandlersSet {
    Press,
    LeftClick,
    RightClick,
}

/// Clears the current selection when the primary button goes down, so that a
/// subsequent click or marquee drag builds the selection from scratch.
/// Holding the add-to-selection modifier suppresses the clearing.
fn press_handler(
    keys: Res<Input<KeyCode>>,
    mut events: EventReader<MousePressedEvent>,
    selected: Query<(Entity, &Selected)>,
    mut deselects: EventWriter<DeselectEntityEvent>,
) {
    // It is desirable to exhaust the iterator, thus .count() is used instead
    // of .is_empty()
    if events.iter().count() == 0 {
        return;
    }

    if keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight) {
        return;
    }

    for (entity, selected) in selected.iter() {
        deselects.send(DeselectEntityEvent::new(entity, selected.graphic()));
    }
}

/// Toggles the selection of the first selectable entity below the click
/// point. Exactly one entity is affected even when several overlap.
fn left_click_handler(
    mut clicks: EventReader<MouseLeftClickEvent>,
    candidates: Query<
        (Entity, &ObjectBounds, &Transform, Option<&Selected>),
        With<Selectable>,
    >,
    mut selects: EventWriter<SelectEntityEvent>,
    mut deselects: EventWriter<DeselectEntityEvent>,
) {
    for click in clicks.iter() {
        for (entity, bounds, transform, selected) in candidates.iter() {
            if !bounds
                .rect(transform.translation.truncate())
                .contains(click.position())
            {
                continue;
            }

            match selected {
                Some(selected) => {
                    deselects.send(DeselectEntityEvent::new(entity, selected.graphic()))
                }
                None => selects.send(SelectEntityEvent::new(entity)),
            }
            break;
        }
    }
}

type SelectedMobile = (With<Selected>, With<Mobile>);

/// Orders all selected mobile entities to the clicked point and sets the
/// rally point of all selected rally-point capable entities.
fn right_click_handler(
    keys: Res<Input<KeyCode>>,
    mut clicks: EventReader<MouseRightClickEvent>,
    mobile: Query<Entity, SelectedMobile>,
    mut rallies: Query<&mut RallyPoint, With<Selected>>,
    mut move_events: EventWriter<SetMoveTargetEvent>,
) {
    if let Some(click) = clicks.iter().last() {
        let queue = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);

        for entity in mobile.iter() {
            move_events.send(SetMoveTargetEvent::new(entity, click.position(), queue));
        }

        for mut rally_point in rallies.iter_mut() {
            rally_point.set(click.position());
        }
    }
}
