use bevy::prelude::*;

pub(crate) struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.add_state::<AppState>()
            .add_state::<GameState>()
            .add_systems(OnEnter(AppState::InGame), start_game)
            .add_systems(OnExit(AppState::InGame), finish_game);
    }
}

#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppState {
    #[default]
    InMenu,
    InGame,
}

/// Phase of an already started game.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    None,
    Playing,
}

fn start_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}

fn finish_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::None);
}
