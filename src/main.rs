use bevy::prelude::*;
use vg_controller::{ControllerPluginGroup, SelectionChangedEvent, SelectionRegistry};
use vg_core::{
    cleanup::DespawnOnGameExit,
    objects::{Mobile, ObjectBounds, RallyPoint, Selectable},
    state::{AppState, GameState},
    CorePluginGroup,
};
use vg_log::LogPluginGroup;
use vg_movement::{MoveOrders, MovementPluginGroup};

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const UNIT_COLOR: Color = Color::rgb(0.2, 0.7, 0.3);
const BUILDING_COLOR: Color = Color::rgb(0.6, 0.6, 0.2);

fn main() {
    let mut app = App::new();
    app.add_plugins(LogPluginGroup)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Vanguard".to_string(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // vg_log installs the global tracing subscriber.
                .disable::<bevy::log::LogPlugin>(),
        )
        .add_plugins(CorePluginGroup)
        .add_plugins(ControllerPluginGroup)
        .add_plugins(MovementPluginGroup)
        .add_plugins(GamePlugin);

    info!("Starting Vanguard {CARGO_PKG_VERSION}");
    app.run();
}

struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_game)
            .add_systems(OnEnter(GameState::Playing), setup_battlefield)
            .add_systems(
                Update,
                report_selection.run_if(in_state(GameState::Playing)),
            );
    }
}

fn start_game(mut next_state: ResMut<NextState<AppState>>) {
    next_state.set(AppState::InGame);
}

fn report_selection(
    mut events: EventReader<SelectionChangedEvent>,
    registry: Res<SelectionRegistry>,
) {
    // It is desirable to exhaust the iterator, thus .count() is used instead
    // of .is_empty()
    if events.iter().count() > 0 {
        info!("{} objects selected", registry.len());
    }
}

fn setup_battlefield(mut commands: Commands) {
    commands.spawn((Camera2dBundle::default(), DespawnOnGameExit));

    for column in 0..4 {
        for row in 0..2 {
            let position = Vec3::new(-120. + 80. * column as f32, -60. + 120. * row as f32, 0.);
            commands.spawn((
                SpriteBundle {
                    sprite: Sprite {
                        color: UNIT_COLOR,
                        custom_size: Some(Vec2::splat(24.)),
                        ..Default::default()
                    },
                    transform: Transform::from_translation(position),
                    ..Default::default()
                },
                Selectable,
                Mobile,
                MoveOrders::default(),
                ObjectBounds::new(Vec2::splat(12.)),
                DespawnOnGameExit,
            ));
        }
    }

    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: BUILDING_COLOR,
                custom_size: Some(Vec2::new(64., 64.)),
                ..Default::default()
            },
            transform: Transform::from_translation(Vec3::new(200., 0., 0.)),
            ..Default::default()
        },
        Selectable,
        RallyPoint::default(),
        ObjectBounds::new(Vec2::splat(32.)),
        DespawnOnGameExit,
    ));
}
