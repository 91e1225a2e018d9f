use std::mem;

use drift_core::camera;
use drift_core::entity_location::EntityLocation;
use drift_core::player::joystick::Joystick;
use drift_core::player::player_inputs::PointerEvent;
use glam::DVec2;
use tracing::{debug, info};

use crate::cars;
use crate::physics::vehicle::{Vehicle, VehicleTuning};
use crate::scores::ScoreBook;

use self::phase::*;

pub mod phase;
pub mod runner;

pub struct GameSession {
    phase: GamePhase,
    joystick: Joystick,
    scores: ScoreBook,
    start_position: DVec2,
    map_size: DVec2,
    tuning: VehicleTuning,
}

impl GameSession {
    pub fn new(
        joystick: Joystick,
        scores: ScoreBook,
        start_position: DVec2,
        map_size: DVec2,
        tuning: VehicleTuning,
    ) -> GameSession {
        GameSession {
            phase: GamePhase::MainMenu,
            joystick,
            scores,
            start_position,
            map_size,
            tuning,
        }
    }

    pub fn from_config() -> GameSession {
        GameSession::new(
            Joystick::from_config(),
            ScoreBook::from_config(),
            cars::get_starting_position(),
            cars::get_map_size(),
            cars::get_configured_tuning(),
        )
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    pub fn scores(&self) -> &ScoreBook {
        &self.scores
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.phase.racing_state().map(|state| &state.vehicle)
    }

    pub fn entity_location(&self) -> Option<EntityLocation> {
        self.vehicle().map(Vehicle::entity_location)
    }

    // top-left of the view in map space, for scrolling the city under the car
    pub fn camera_offset(&self, viewport: DVec2) -> Option<DVec2> {
        self.vehicle()
            .map(|vehicle| camera::camera_offset(vehicle.position, viewport))
    }

    /// Screen positions of every map tile needed to fill the viewport
    /// around the car.
    pub fn visible_map_tiles(&self, viewport: DVec2) -> Option<Vec<DVec2>> {
        self.camera_offset(viewport)
            .map(|offset| camera::visible_tiles(offset, self.map_size, viewport))
    }

    pub fn start_race(&mut self) {
        if !matches!(self.phase, GamePhase::MainMenu) {
            debug!(phase = self.phase.name(), "ignoring start outside the menu");
            return;
        }
        self.scores.reload();
        self.joystick.release();
        let vehicle = Vehicle::new(self.start_position, self.tuning);
        self.phase = GamePhase::Racing(RacingState::new(vehicle));
        info!(high_score = self.scores.high_score(), "race started");
    }

    pub fn pause(&mut self) {
        if let GamePhase::Racing(_) = self.phase {
            // a held stick would otherwise still be steering on resume
            self.joystick.release();
            self.transition(|phase| match phase {
                GamePhase::Racing(state) => GamePhase::Paused(state),
                other => other,
            });
            debug!("paused");
        }
    }

    pub fn resume(&mut self) {
        if let GamePhase::Paused(_) = self.phase {
            self.transition(|phase| match phase {
                GamePhase::Paused(state) => GamePhase::Racing(state),
                other => other,
            });
            debug!("resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Racing(_) => self.pause(),
            GamePhase::Paused(_) => self.resume(),
            GamePhase::MainMenu => {}
        }
    }

    /// Leaves the race for the title screen, banking the score. Returns the
    /// score of the race that just ended.
    pub fn return_to_menu(&mut self) -> Option<u64> {
        match mem::replace(&mut self.phase, GamePhase::MainMenu) {
            GamePhase::MainMenu => None,
            GamePhase::Racing(state) | GamePhase::Paused(state) => {
                self.joystick.release();
                let score = state.vehicle.score;
                let new_high_score = self.scores.record_session(score);
                info!(score, new_high_score, ticks = state.ticks_elapsed, "race ended");
                Some(score)
            }
        }
    }

    // the stick only listens while the car is actually driving
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let GamePhase::Racing(_) = self.phase {
            self.joystick.handle_event(event);
        }
    }

    // advance the race by `time_step` reference ticks
    pub fn tick(&mut self, time_step: f64) {
        if let GamePhase::Racing(state) = &mut self.phase {
            let drive = self.joystick.current_vector();
            state.vehicle.step(drive, time_step);
            state.ticks_elapsed += 1;

            if self.scores.offer_high_score(state.vehicle.score) {
                debug!(score = state.vehicle.score, "new high score");
            }
        }
    }

    fn transition(&mut self, next: impl FnOnce(GamePhase) -> GamePhase) {
        let current = mem::replace(&mut self.phase, GamePhase::MainMenu);
        self.phase = next(current);
    }
}
