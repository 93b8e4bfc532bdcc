use std::collections::VecDeque;

use bevy::prelude::*;
use vg_core::{objects::Mobile, schedule::MovementSchedule, state::GameState};

use crate::MAX_SPEED;

pub(crate) struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SetMoveTargetEvent>().add_systems(
            MovementSchedule,
            (process_move_targets, advance)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Send this event to order an entity to a point on the map. Depending on
/// `queue`, the target either replaces all current orders of the entity or
/// is appended after them.
#[derive(Event)]
pub struct SetMoveTargetEvent {
    entity: Entity,
    target: Vec2,
    queue: bool,
}

impl SetMoveTargetEvent {
    pub fn new(entity: Entity, target: Vec2, queue: bool) -> Self {
        Self {
            entity,
            target,
            queue,
        }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn queue(&self) -> bool {
        self.queue
    }
}

/// FIFO of waypoints the entity moves to, front first.
#[derive(Component, Default)]
pub struct MoveOrders(VecDeque<Vec2>);

impl MoveOrders {
    /// Discards all orders and replaces them with a single waypoint.
    fn set(&mut self, target: Vec2) {
        self.0.clear();
        self.0.push_back(target);
    }

    /// Appends a waypoint after all current orders.
    fn push(&mut self, target: Vec2) {
        self.0.push_back(target);
    }

    pub fn current(&self) -> Option<Vec2> {
        self.0.front().copied()
    }

    pub fn is_idle(&self) -> bool {
        self.0.is_empty()
    }

    fn finish_current(&mut self) {
        self.0.pop_front();
    }
}

fn process_move_targets(
    mut commands: Commands,
    mut events: EventReader<SetMoveTargetEvent>,
    mut orders: Query<&mut MoveOrders>,
) {
    for event in events.iter() {
        match orders.get_mut(event.entity()) {
            Ok(mut orders) => {
                if event.queue() {
                    orders.push(event.target());
                } else {
                    orders.set(event.target());
                }
            }
            Err(_) => {
                let mut orders = MoveOrders::default();
                orders.set(event.target());
                commands.entity(event.entity()).insert(orders);
            }
        }
    }
}

fn advance(
    time: Res<Time>,
    mut objects: Query<(&mut Transform, &mut MoveOrders), With<Mobile>>,
) {
    let step = MAX_SPEED * time.delta_seconds();

    for (mut transform, mut orders) in objects.iter_mut() {
        let Some(target) = orders.current() else {
            continue;
        };

        let position = transform.translation.truncate();
        let remaining = target - position;
        if remaining.length_squared() <= step * step {
            transform.translation = target.extend(transform.translation.z);
            orders.finish_current();
        } else {
            transform.translation += (remaining.normalize() * step).extend(0.);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<SetMoveTargetEvent>()
            .init_resource::<Time>()
            .add_systems(Update, (process_move_targets, advance).chain());
        app
    }

    fn tick(app: &mut App, delta: Duration) {
        let mut time = app.world.resource_mut::<Time>();
        let last = time.last_update().unwrap_or_else(|| time.startup());
        time.update_with_instant(last + delta);
        app.update();
    }

    fn position(app: &App, entity: Entity) -> Vec2 {
        app.world
            .get::<Transform>(entity)
            .unwrap()
            .translation
            .truncate()
    }

    #[test]
    fn test_replace_and_queue() {
        let mut app = test_app();
        let entity = app.world.spawn((Mobile, MoveOrders::default())).id();

        app.world
            .send_event(SetMoveTargetEvent::new(entity, Vec2::new(10., 0.), false));
        app.update();
        app.world
            .send_event(SetMoveTargetEvent::new(entity, Vec2::new(20., 0.), true));
        app.update();

        let orders = app.world.get::<MoveOrders>(entity).unwrap();
        assert_eq!(orders.0, VecDeque::from(vec![Vec2::new(10., 0.), Vec2::new(20., 0.)]));

        // A non-queued order replaces everything.
        app.world
            .send_event(SetMoveTargetEvent::new(entity, Vec2::new(5., 5.), false));
        app.update();

        let orders = app.world.get::<MoveOrders>(entity).unwrap();
        assert_eq!(orders.0, VecDeque::from(vec![Vec2::new(5., 5.)]));
    }

    #[test]
    fn test_advance_consumes_waypoints_in_order() {
        let mut app = test_app();
        let entity = app
            .world
            .spawn((Mobile, MoveOrders::default(), Transform::default()))
            .id();

        app.world
            .send_event(SetMoveTargetEvent::new(entity, Vec2::new(120., 0.), false));
        app.world
            .send_event(SetMoveTargetEvent::new(entity, Vec2::new(120., 90.), true));
        // The first time update establishes the reference instant and has a
        // zero delta.
        tick(&mut app, Duration::ZERO);
        assert_eq!(position(&app, entity), Vec2::ZERO);

        // Half a second at MAX_SPEED covers 60 units toward the front
        // waypoint.
        tick(&mut app, Duration::from_millis(500));
        assert_eq!(position(&app, entity), Vec2::new(60., 0.));

        // Arrival snaps onto the waypoint and uncovers the next one.
        tick(&mut app, Duration::from_millis(500));
        assert_eq!(position(&app, entity), Vec2::new(120., 0.));
        assert_eq!(
            app.world.get::<MoveOrders>(entity).unwrap().current(),
            Some(Vec2::new(120., 90.))
        );

        tick(&mut app, Duration::from_millis(500));
        assert_eq!(position(&app, entity), Vec2::new(120., 60.));

        tick(&mut app, Duration::from_millis(500));
        assert_eq!(position(&app, entity), Vec2::new(120., 90.));
        assert!(app.world.get::<MoveOrders>(entity).unwrap().is_idle());
    }

    #[test]
    fn test_orders_component_inserted_on_demand() {
        let mut app = test_app();
        let entity = app.world.spawn(Mobile).id();

        app.world
            .send_event(SetMoveTargetEvent::new(entity, Vec2::new(10., 0.), true));
        app.update();

        let orders = app.world.get::<MoveOrders>(entity).unwrap();
        assert_eq!(orders.current(), Some(Vec2::new(10., 0.)));
    }
}
