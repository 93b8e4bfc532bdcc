use bevy::prelude::*;
use vg_core::{cleanup::DespawnOnGameExit, screengeom::ScreenRect, state::GameState};

const SELECTION_BOX_COLOR: Color = Color::rgba(0., 0.5, 0.8, 0.2);

pub(crate) struct MarqueePlugin;

impl Plugin for MarqueePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<UpdateSelectionBoxEvent>().add_systems(
            PostUpdate,
            process_events.run_if(in_state(GameState::Playing)),
        );
    }
}

/// Updates the selection box drawn over the screen during a drag. A None
/// rectangle hides the box.
#[derive(Event)]
pub(crate) struct UpdateSelectionBoxEvent(Option<ScreenRect>);

impl UpdateSelectionBoxEvent {
    pub(crate) fn none() -> Self {
        Self(None)
    }

    pub(crate) fn from_rect(rect: ScreenRect) -> Self {
        Self(Some(rect))
    }
}

#[derive(Component)]
struct SelectionBox;

fn process_events(
    mut commands: Commands,
    mut boxes: Query<(Entity, &mut Style), With<SelectionBox>>,
    mut events: EventReader<UpdateSelectionBoxEvent>,
) {
    if let Some(event) = events.iter().last() {
        match event.0 {
            Some(rect) => {
                let size = rect.size();
                let width = Val::Px(size.x);
                let height = Val::Px(size.y);
                let left = Val::Px(rect.left());
                let top = Val::Px(rect.top());

                match boxes.get_single_mut() {
                    Ok((_, mut style)) => {
                        style.width = width;
                        style.height = height;
                        style.left = left;
                        style.top = top;
                    }
                    Err(_) => {
                        assert!(boxes.is_empty());

                        commands.spawn((
                            NodeBundle {
                                style: Style {
                                    position_type: PositionType::Absolute,
                                    width,
                                    height,
                                    left,
                                    top,
                                    ..Default::default()
                                },
                                background_color: BackgroundColor(SELECTION_BOX_COLOR),
                                ..Default::default()
                            },
                            SelectionBox,
                            DespawnOnGameExit,
                        ));
                    }
                }
            }
            None => {
                for (entity, _) in boxes.iter() {
                    commands.entity(entity).despawn_recursive();
                }
            }
        }
    }
}
