use drift_core::GLOBAL_CONFIG;
use glam::DVec2;

use crate::physics::vehicle::{Vehicle, VehicleTuning};

// Everything about the car comes out of the config file; the defaults there
// are the handling the game shipped with.
pub fn get_configured_tuning() -> VehicleTuning {
    VehicleTuning {
        acceleration: GLOBAL_CONFIG.car_acceleration,
        friction: GLOBAL_CONFIG.car_friction,
        max_speed: GLOBAL_CONFIG.max_car_speed,
        turn_rate: GLOBAL_CONFIG.car_turn_rate,
        drift_factor: GLOBAL_CONFIG.drift_factor,
        dead_zone: GLOBAL_CONFIG.drive_dead_zone,
        drift_score_threshold: GLOBAL_CONFIG.drift_score_threshold,
        drift_score_multiplier: GLOBAL_CONFIG.drift_score_multiplier,
        min_scoring_speed: GLOBAL_CONFIG.min_scoring_speed,
    }
}

pub fn get_starting_position() -> DVec2 {
    DVec2::new(GLOBAL_CONFIG.start_x, GLOBAL_CONFIG.start_y)
}

// size of one tile of the city map; the map repeats endlessly
pub fn get_map_size() -> DVec2 {
    DVec2::new(GLOBAL_CONFIG.map_width, GLOBAL_CONFIG.map_height)
}

// Get the car as it sits on the start line: parked, pointing up, no score
pub fn get_starting_vehicle() -> Vehicle {
    Vehicle::new(get_starting_position(), get_configured_tuning())
}
