use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::{prelude::*, window::PrimaryWindow};
use vg_core::{
    schedule::InputSchedule,
    screengeom::ScreenRect,
    state::{AppState, GameState},
    worldgeom::WorldRect,
};

use crate::pointer::ScreenCamera;

/// Maximum cursor travel from the press position, in logical pixels on
/// either axis, below which a press-release pair still counts as a click.
const DRAGGING_THRESHOLD: f32 = 10.;

pub(super) struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MousePressedEvent>()
            .add_event::<MouseLeftClickEvent>()
            .add_event::<MouseRightClickEvent>()
            .add_event::<MouseDraggedEvent>()
            .add_systems(OnEnter(AppState::InGame), setup)
            .add_systems(OnExit(AppState::InGame), cleanup)
            .add_systems(
                InputSchedule,
                (
                    update_position.in_set(MouseSet::Position),
                    update_drags
                        .run_if(resource_exists_and_changed::<MousePosition>())
                        .in_set(MouseSet::Drags)
                        .after(MouseSet::Position),
                    update_buttons
                        .in_set(MouseSet::Buttons)
                        .after(MouseSet::Drags),
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

#[derive(Copy, Clone, Hash, Debug, PartialEq, Eq, SystemSet)]
pub(crate) enum MouseSet {
    Position,
    Drags,
    Buttons,
}

/// Sent when the primary mouse button is pressed over the game world. The
/// event precedes any click or drag event of the same press.
#[derive(Event)]
pub(crate) struct MousePressedEvent;

/// Sent when the primary mouse button is released without the cursor having
/// left the dragging threshold since the press.
#[derive(Event)]
pub struct MouseLeftClickEvent {
    position: Vec2,
}

impl MouseLeftClickEvent {
    pub(crate) fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// World-space position of the release.
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// Sent as soon as the secondary mouse button is pressed over the game
/// world, independently of any drag in progress.
#[derive(Event)]
pub struct MouseRightClickEvent {
    position: Vec2,
}

impl MouseRightClickEvent {
    pub(crate) fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// World-space position of the press.
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

#[derive(Event)]
pub(crate) struct MouseDraggedEvent {
    rects: Option<(ScreenRect, WorldRect)>,
    additive: bool,
}

impl MouseDraggedEvent {
    fn new(rects: Option<(ScreenRect, WorldRect)>, additive: bool) -> Self {
        Self { rects, additive }
    }

    /// The rectangle spanned by the drag in screen and world coordinates. It
    /// is None when the drag ended or was cancelled and the selection box
    /// should disappear.
    pub(crate) fn rects(&self) -> Option<(ScreenRect, WorldRect)> {
        self.rects
    }

    /// True when the add-to-selection modifier was held when the drag
    /// started.
    pub(crate) fn additive(&self) -> bool {
        self.additive
    }
}

#[derive(Default, Resource)]
pub(crate) struct MousePosition(Option<Vec2>);

impl MousePosition {
    /// Position of the cursor in the window in logical pixels, or None when
    /// the cursor is not over the window.
    fn position(&self) -> Option<Vec2> {
        self.0
    }

    fn set_position(&mut self, position: Option<Vec2>) {
        self.0 = position;
    }
}

/// State of an in-progress primary-button press. It exists only between a
/// press and the following release; a new press discards any previous state.
#[derive(Default, Resource, Debug)]
struct MouseDragStates(Option<DragState>);

impl MouseDragStates {
    fn set(&mut self, state: DragState) {
        self.0 = Some(state);
    }

    fn resolve(&mut self) -> Option<DragResolution> {
        self.0.take().map(DragState::resolve)
    }

    fn cancel(&mut self) -> bool {
        self.0.take().is_some()
    }

    fn update(&mut self, screen: Vec2, world: Vec2) -> Option<(ScreenRect, WorldRect)> {
        self.0.as_mut().and_then(|drag| drag.update(screen, world))
    }

    fn additive(&self) -> bool {
        self.0.as_ref().map_or(false, |drag| drag.additive)
    }
}

#[derive(Debug)]
struct DragState {
    screen_start: Vec2,
    world_start: Vec2,
    screen_stop: Vec2,
    world_stop: Vec2,
    additive: bool,
    active: bool,
}

impl DragState {
    fn new(screen: Vec2, world: Vec2, additive: bool) -> Self {
        Self {
            screen_start: screen,
            world_start: world,
            screen_stop: screen,
            world_stop: world,
            additive,
            active: false,
        }
    }

    /// Updates the end position of the drag. The rectangles spanned by the
    /// drag are returned once the cursor traveled at least
    /// [`DRAGGING_THRESHOLD`] on any axis from the press position.
    fn update(&mut self, screen: Vec2, world: Vec2) -> Option<(ScreenRect, WorldRect)> {
        self.screen_stop = screen;
        self.world_stop = world;

        self.active |=
            (self.screen_stop - self.screen_start).abs().max_element() >= DRAGGING_THRESHOLD;

        if self.active {
            Some((
                ScreenRect::from_points(self.screen_start, self.screen_stop),
                WorldRect::from_points(self.world_start, self.world_stop),
            ))
        } else {
            None
        }
    }

    fn resolve(self) -> DragResolution {
        if self.active {
            DragResolution::Drag
        } else {
            DragResolution::Click(self.world_stop)
        }
    }
}

enum DragResolution {
    /// The cursor never left the dragging threshold, the press-release pair
    /// is a click at this world-space position.
    Click(Vec2),
    Drag,
}

fn setup(mut commands: Commands) {
    commands.init_resource::<MousePosition>();
    commands.init_resource::<MouseDragStates>();
}

fn cleanup(mut commands: Commands) {
    commands.remove_resource::<MousePosition>();
    commands.remove_resource::<MouseDragStates>();
}

fn update_position(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut mouse: ResMut<MousePosition>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let position = window.cursor_position();

    // Avoid unnecessary change detection.
    if mouse.position() != position {
        mouse.set_position(position);
    }
}

fn update_drags(
    mouse_position: Res<MousePosition>,
    camera: ScreenCamera,
    mut mouse_state: ResMut<MouseDragStates>,
    mut drags: EventWriter<MouseDraggedEvent>,
) {
    let additive = mouse_state.additive();

    let projected = mouse_position
        .position()
        .and_then(|screen| camera.world_point(screen).map(|world| (screen, world)));

    match projected {
        Some((screen, world)) => {
            if let Some(rects) = mouse_state.update(screen, world) {
                drags.send(MouseDraggedEvent::new(Some(rects), additive));
            }
        }
        None => {
            // The cursor left the window or the world, which ends the press
            // as if the button was released without a click.
            if mouse_state.cancel() {
                drags.send(MouseDraggedEvent::new(None, additive));
            }
        }
    }
}

fn update_buttons(
    mouse_position: Res<MousePosition>,
    camera: ScreenCamera,
    keys: Res<Input<KeyCode>>,
    mut mouse_state: ResMut<MouseDragStates>,
    mut input_events: EventReader<MouseButtonInput>,
    mut presses: EventWriter<MousePressedEvent>,
    mut left_clicks: EventWriter<MouseLeftClickEvent>,
    mut right_clicks: EventWriter<MouseRightClickEvent>,
    mut drags: EventWriter<MouseDraggedEvent>,
) {
    for event in input_events.iter() {
        let projected = mouse_position
            .position()
            .and_then(|screen| camera.world_point(screen).map(|world| (screen, world)));

        match (event.button, event.state) {
            (MouseButton::Left, ButtonState::Pressed) => {
                let Some((screen, world)) = projected else {
                    continue;
                };

                let additive =
                    keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
                mouse_state.set(DragState::new(screen, world, additive));
                drags.send(MouseDraggedEvent::new(None, additive));
                presses.send(MousePressedEvent);
            }
            (MouseButton::Left, ButtonState::Released) => {
                let additive = mouse_state.additive();
                let Some(resolution) = mouse_state.resolve() else {
                    continue;
                };

                drags.send(MouseDraggedEvent::new(None, additive));
                if let DragResolution::Click(position) = resolution {
                    left_clicks.send(MouseLeftClickEvent::new(position));
                }
            }
            (MouseButton::Right, ButtonState::Pressed) => {
                let Some((_, world)) = projected else {
                    continue;
                };
                right_clicks.send(MouseRightClickEvent::new(world));
            }
            _ => (),
        }
    }
}
