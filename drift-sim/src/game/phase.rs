use crate::physics::vehicle::Vehicle;

pub enum GamePhase {
    // Title screen; no car exists, scores are whatever is on disk
    MainMenu,
    // The car is on the map and every tick steps it with the joystick input
    Racing(RacingState),
    // Same car, frozen in place behind the pause overlay
    Paused(RacingState),
}

pub struct RacingState {
    pub vehicle: Vehicle,
    pub ticks_elapsed: u64,
}

impl RacingState {
    pub fn new(vehicle: Vehicle) -> RacingState {
        RacingState {
            vehicle,
            ticks_elapsed: 0,
        }
    }
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::MainMenu => "main menu",
            GamePhase::Racing(_) => "racing",
            GamePhase::Paused(_) => "paused",
        }
    }

    pub fn racing_state(&self) -> Option<&RacingState> {
        match self {
            GamePhase::MainMenu => None,
            GamePhase::Racing(state) | GamePhase::Paused(state) => Some(state),
        }
    }
}
