use ahash::AHashSet;
use bevy::prelude::*;
use vg_core::{objects::ObjectBounds, schedule::InputSchedule, state::GameState};

use super::registry::{SelectionChangedEvent, SelectionRegistry};

/// Margin between the edge of an object and its selection indicator.
const SELECTION_MARGIN: f32 = 4.;
const SELECTION_COLOR: Color = Color::rgba(0., 0.5, 0.8, 0.35);

pub(super) struct BookkeepingPlugin;

impl Plugin for BookkeepingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SelectEntityEvent>()
            .add_event::<DeselectEntityEvent>()
            .add_event::<SelectionChangedEvent>()
            .init_resource::<SelectionRegistry>()
            .add_systems(
                InputSchedule,
                update_selection
                    .run_if(in_state(GameState::Playing))
                    .in_set(SelectionSet::Update),
            );
    }
}

#[derive(Copy, Clone, Hash, Debug, PartialEq, Eq, SystemSet)]
pub(crate) enum SelectionSet {
    Update,
}

/// Request to select an entity. The selection indicator is attached as a
/// child of the entity itself.
#[derive(Event)]
pub struct SelectEntityEvent {
    entity: Entity,
}

impl SelectEntityEvent {
    pub fn new(entity: Entity) -> Self {
        Self { entity }
    }

    fn entity(&self) -> Entity {
        self.entity
    }
}

/// Request to deselect an entity. It carries the indicator entity created at
/// selection time so that teardown always removes the exact graphic which
/// was attached, even if the component state changed in the meantime.
#[derive(Event)]
pub struct DeselectEntityEvent {
    entity: Entity,
    graphic: Entity,
}

impl DeselectEntityEvent {
    pub fn new(entity: Entity, graphic: Entity) -> Self {
        Self { entity, graphic }
    }

    fn entity(&self) -> Entity {
        self.entity
    }

    fn graphic(&self) -> Entity {
        self.graphic
    }
}

/// Marks an entity as selected and remembers its selection indicator.
#[derive(Component)]
pub struct Selected {
    graphic: Entity,
}

impl Selected {
    pub fn graphic(&self) -> Entity {
        self.graphic
    }
}

/// Executes select and deselect requests. Both are idempotent: selecting an
/// already selected entity and deselecting an unselected entity are no-ops.
pub(crate) fn update_selection(
    mut commands: Commands,
    mut registry: ResMut<SelectionRegistry>,
    mut selects: EventReader<SelectEntityEvent>,
    mut deselects: EventReader<DeselectEntityEvent>,
    bounds: Query<&ObjectBounds>,
    selected: Query<Entity, With<Selected>>,
    mut changes: EventWriter<SelectionChangedEvent>,
) {
    let mut membership: AHashSet<Entity> = selected.iter().collect();

    for event in deselects.iter() {
        if !membership.remove(&event.entity()) {
            continue;
        }

        registry.remove(event.entity());
        commands.entity(event.entity()).remove::<Selected>();
        commands.entity(event.graphic()).remove_parent();
        commands.entity(event.graphic()).despawn();
        changes.send(SelectionChangedEvent::new(event.entity(), false));
    }

    for event in selects.iter() {
        if !membership.insert(event.entity()) {
            continue;
        }

        let Ok(bounds) = bounds.get(event.entity()) else {
            continue;
        };

        let radius = bounds.half_size().x + SELECTION_MARGIN;
        let graphic = commands
            .spawn(SpriteBundle {
                sprite: Sprite {
                    color: SELECTION_COLOR,
                    custom_size: Some(Vec2::splat(2. * radius)),
                    ..Default::default()
                },
                transform: Transform::from_translation(Vec3::new(0., 0., -0.1)),
                ..Default::default()
            })
            .id();
        commands
            .entity(event.entity())
            .add_child(graphic)
            .insert(Selected { graphic });

        registry.insert(event.entity());
        changes.send(SelectionChangedEvent::new(event.entity(), true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vg_core::objects::Selectable;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<SelectEntityEvent>()
            .add_event::<DeselectEntityEvent>()
            .add_event::<SelectionChangedEvent>()
            .init_resource::<SelectionRegistry>()
            .add_systems(Update, update_selection);
        app
    }

    fn spawn_object(app: &mut App) -> Entity {
        app.world
            .spawn((
                Selectable,
                ObjectBounds::new(Vec2::splat(8.)),
                Transform::default(),
            ))
            .id()
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut app = test_app();
        let entity = spawn_object(&mut app);

        app.world.send_event(SelectEntityEvent::new(entity));
        app.world.send_event(SelectEntityEvent::new(entity));
        app.update();

        let graphic = app.world.get::<Selected>(entity).unwrap().graphic();
        assert!(app.world.get::<Sprite>(graphic).is_some());
        assert_eq!(app.world.resource::<SelectionRegistry>().len(), 1);

        // Selecting again in a later frame changes nothing either.
        app.world.send_event(SelectEntityEvent::new(entity));
        app.update();

        assert_eq!(app.world.get::<Selected>(entity).unwrap().graphic(), graphic);
        assert_eq!(app.world.resource::<SelectionRegistry>().len(), 1);
    }

    #[test]
    fn test_deselect_unselected_is_noop() {
        let mut app = test_app();
        let entity = spawn_object(&mut app);
        let bogus = app.world.spawn_empty().id();

        app.world
            .send_event(DeselectEntityEvent::new(entity, bogus));
        app.update();

        assert!(app.world.get::<Selected>(entity).is_none());
        assert!(app.world.resource::<SelectionRegistry>().is_empty());
    }

    #[test]
    fn test_deselect_removes_graphic() {
        let mut app = test_app();
        let entity = spawn_object(&mut app);

        app.world.send_event(SelectEntityEvent::new(entity));
        app.update();
        let graphic = app.world.get::<Selected>(entity).unwrap().graphic();

        app.world
            .send_event(DeselectEntityEvent::new(entity, graphic));
        app.update();

        assert!(app.world.get::<Selected>(entity).is_none());
        assert!(app.world.get_entity(graphic).is_none());
        assert!(app.world.resource::<SelectionRegistry>().is_empty());
    }

    #[test]
    fn test_indicator_sized_from_bounds() {
        let mut app = test_app();
        let entity = spawn_object(&mut app);

        app.world.send_event(SelectEntityEvent::new(entity));
        app.update();

        let graphic = app.world.get::<Selected>(entity).unwrap().graphic();
        let sprite = app.world.get::<Sprite>(graphic).unwrap();
        assert_eq!(sprite.custom_size, Some(Vec2::splat(2. * (8. + 4.))));
        assert_eq!(app.world.get::<Parent>(graphic).unwrap().get(), entity);
    }
}
