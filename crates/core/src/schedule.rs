//! This module extends default Bevy schedules.

use bevy::{app::MainScheduleOrder, ecs::schedule::ScheduleLabel, prelude::*};

pub struct GameSchedulesPlugin;

impl Plugin for GameSchedulesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup);
    }
}

fn setup(mut main: ResMut<MainScheduleOrder>) {
    main.insert_after(First, InputSchedule);
    main.insert_after(InputSchedule, MovementSchedule);
}

/// All user input is handled during this schedule.
#[derive(ScheduleLabel, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InputSchedule;

/// All movement of game entities (changes to [`bevy::prelude::Transform`])
/// happens during this schedule.
#[derive(ScheduleLabel, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MovementSchedule;
