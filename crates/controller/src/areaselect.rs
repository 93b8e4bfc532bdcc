use bevy::prelude::*;
use vg_core::{
    objects::{ObjectBounds, Selectable},
    schedule::InputSchedule,
    state::GameState,
    worldgeom::WorldRect,
};

use crate::selection::{
    DeselectEntityEvent, SelectEntityEvent, Selected, SelectionMode, SelectionSet,
};

pub(crate) struct AreaSelectPlugin;

impl Plugin for AreaSelectPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SelectInRectEvent>().add_systems(
            InputSchedule,
            select_in_area
                .run_if(in_state(GameState::Playing))
                .in_set(AreaSelectSet::SelectInArea)
                .before(SelectionSet::Update),
        );
    }
}

#[derive(Copy, Clone, Hash, Debug, PartialEq, Eq, SystemSet)]
pub(crate) enum AreaSelectSet {
    SelectInArea,
}

#[derive(Event)]
pub(crate) struct SelectInRectEvent {
    rect: WorldRect,
    mode: SelectionMode,
}

impl SelectInRectEvent {
    pub(crate) fn new(rect: WorldRect, mode: SelectionMode) -> Self {
        Self { rect, mode }
    }

    fn rect(&self) -> &WorldRect {
        &self.rect
    }

    fn mode(&self) -> SelectionMode {
        self.mode
    }
}

/// Derives marquee selection membership from current geometry: entities
/// whose bounds overlap the rectangle get selected, entities outside of it
/// get deselected unless the selection mode is additive. Running this twice
/// with the same rectangle has no further effect.
fn select_in_area(
    mut events: EventReader<SelectInRectEvent>,
    candidates: Query<
        (Entity, &ObjectBounds, &Transform, Option<&Selected>),
        With<Selectable>,
    >,
    mut selects: EventWriter<SelectEntityEvent>,
    mut deselects: EventWriter<DeselectEntityEvent>,
) {
    if let Some(event) = events.iter().last() {
        for (entity, bounds, transform, selected) in candidates.iter() {
            let object_rect = bounds.rect(transform.translation.truncate());

            if object_rect.intersects(event.rect()) {
                if selected.is_none() {
                    selects.send(SelectEntityEvent::new(entity));
                }
            } else if let Some(selected) = selected {
                if event.mode() == SelectionMode::Replace {
                    deselects.send(DeselectEntityEvent::new(entity, selected.graphic()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{SelectionRegistry, update_selection};
    use vg_core::objects::Selectable;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<SelectInRectEvent>()
            .add_event::<SelectEntityEvent>()
            .add_event::<DeselectEntityEvent>()
            .add_event::<crate::selection::SelectionChangedEvent>()
            .init_resource::<SelectionRegistry>()
            .add_systems(Update, (select_in_area, update_selection).chain());
        app
    }

    fn spawn_object(app: &mut App, position: Vec2, half_size: Vec2) -> Entity {
        app.world
            .spawn((
                Selectable,
                ObjectBounds::new(half_size),
                Transform::from_translation(position.extend(0.)),
            ))
            .id()
    }

    #[test]
    fn test_live_membership() {
        let mut app = test_app();
        let inside = spawn_object(&mut app, Vec2::new(5., 5.), Vec2::splat(1.));
        let outside = spawn_object(&mut app, Vec2::new(50., 50.), Vec2::splat(1.));

        app.world.send_event(SelectInRectEvent::new(
            WorldRect::from_points(Vec2::ZERO, Vec2::new(10., 10.)),
            SelectionMode::Replace,
        ));
        app.update();

        assert!(app.world.get::<Selected>(inside).is_some());
        assert!(app.world.get::<Selected>(outside).is_none());

        // Shrinking the rectangle away from the entity deselects it again.
        app.world.send_event(SelectInRectEvent::new(
            WorldRect::from_points(Vec2::ZERO, Vec2::new(2., 2.)),
            SelectionMode::Replace,
        ));
        app.update();

        assert!(app.world.get::<Selected>(inside).is_none());
        assert!(app.world.resource::<SelectionRegistry>().is_empty());
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let mut app = test_app();
        let entity = spawn_object(&mut app, Vec2::new(5., 5.), Vec2::splat(1.));
        let rect = WorldRect::from_points(Vec2::ZERO, Vec2::new(10., 10.));

        for _ in 0..3 {
            app.world
                .send_event(SelectInRectEvent::new(rect, SelectionMode::Replace));
            app.update();
        }

        assert!(app.world.get::<Selected>(entity).is_some());
        assert_eq!(app.world.resource::<SelectionRegistry>().len(), 1);
    }

    #[test]
    fn test_additive_mode_preserves_selection() {
        let mut app = test_app();
        let previous = spawn_object(&mut app, Vec2::new(50., 50.), Vec2::splat(1.));
        let new = spawn_object(&mut app, Vec2::new(5., 5.), Vec2::splat(1.));

        app.world.send_event(SelectEntityEvent::new(previous));
        app.update();
        assert!(app.world.get::<Selected>(previous).is_some());

        // An additive marquee far away from the previously selected entity
        // must not deselect it.
        app.world.send_event(SelectInRectEvent::new(
            WorldRect::from_points(Vec2::ZERO, Vec2::new(10., 10.)),
            SelectionMode::Add,
        ));
        app.update();

        assert!(app.world.get::<Selected>(previous).is_some());
        assert!(app.world.get::<Selected>(new).is_some());
        assert_eq!(app.world.resource::<SelectionRegistry>().len(), 2);
    }

    #[test]
    fn test_edge_touching_bounds_are_selected() {
        let mut app = test_app();
        // The object's left edge exactly touches the rectangle's right edge.
        let entity = spawn_object(&mut app, Vec2::new(11., 5.), Vec2::splat(1.));

        app.world.send_event(SelectInRectEvent::new(
            WorldRect::from_points(Vec2::ZERO, Vec2::new(10., 10.)),
            SelectionMode::Replace,
        ));
        app.update();

        assert!(app.world.get::<Selected>(entity).is_some());
    }
}
