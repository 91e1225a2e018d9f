use drift_core::angles::{self, Degrees};
use drift_core::entity_location::EntityLocation;
use drift_core::player::player_inputs::DriveVector;
use glam::DVec2;

// slack for float residue when a quantity is one step away from a boundary
const ROUNDING_SLACK: f64 = 1e-9;

// All rate values are per reference tick (one frame at the configured frame
// rate); step() scales them by however many reference ticks actually passed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VehicleTuning {
    pub acceleration: f64,
    pub friction: f64,
    pub max_speed: f64,
    pub turn_rate: Degrees,
    // in (0, 1]; lower keeps the car sliding sideways for longer
    pub drift_factor: f64,
    pub dead_zone: f64,
    pub drift_score_threshold: Degrees,
    pub drift_score_multiplier: f64,
    pub min_scoring_speed: f64,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            acceleration: 0.2,
            friction: 0.05,
            max_speed: 5.0,
            turn_rate: 3.0,
            drift_factor: 0.15,
            dead_zone: 0.2,
            drift_score_threshold: 10.0,
            drift_score_multiplier: 0.1,
            min_scoring_speed: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Vehicle {
    pub position: DVec2,
    // where the nose points; follows the stick quickly
    pub facing_angle: Degrees,
    // where the car actually travels; trails facing_angle, which is the drift
    pub movement_angle: Degrees,
    pub speed: f64,
    pub score: u64,

    pub tuning: VehicleTuning,

    // drift points earned so far in the current reference tick, and how much
    // of that tick has elapsed; points are floored once per full tick
    score_carry: f64,
    score_clock: f64,
}

impl Vehicle {
    pub fn new(position: DVec2, tuning: VehicleTuning) -> Vehicle {
        Vehicle {
            position,
            facing_angle: 0.0,
            movement_angle: 0.0,
            speed: 0.0,
            score: 0,
            tuning,
            score_carry: 0.0,
            score_clock: 0.0,
        }
    }

    /* Advance the car by `time_step` reference ticks under the given stick
     * input. Pushing past the dead zone steers and accelerates; anything less
     * lets the car coast to a stop along its current line. */
    pub fn step(&mut self, drive: DriveVector, time_step: f64) {
        if self.is_throttling(drive) {
            let target_angle = angles::heading_from_offset(drive.as_vec());
            self.facing_angle = angles::approach_angle(
                self.facing_angle,
                target_angle,
                self.tuning.turn_rate * time_step,
            );

            // measured before the movement angle catches up, so the score
            // reflects the slide the player was holding going into this tick
            let drift_difference = self.drift_difference();
            self.movement_angle = angles::normalize_degrees(
                self.movement_angle + drift_difference * self.smoothing(time_step),
            );

            self.speed = f64::min(
                self.speed + self.tuning.acceleration * time_step,
                self.tuning.max_speed,
            );

            self.accrue_drift_points(drift_difference.abs(), time_step);
        } else {
            let braking = self.tuning.friction * time_step;
            // repeated subtraction leaves residue; the last step lands on zero
            self.speed = if self.speed <= braking + ROUNDING_SLACK {
                0.0
            } else {
                self.speed - braking
            };
            self.accrue_drift_points(0.0, time_step);
        }

        self.position += self.velocity() * time_step;
    }

    pub fn is_throttling(&self, drive: DriveVector) -> bool {
        drive.length() > self.tuning.dead_zone
    }

    /// Signed facing-minus-movement angle, the short way round.
    pub fn drift_difference(&self) -> Degrees {
        angles::shortest_arc(self.facing_angle, self.movement_angle)
    }

    // Travel follows movement_angle, not facing_angle, so the nose can point
    // away from the path the car is really on
    pub fn velocity(&self) -> DVec2 {
        let direction = (-self.movement_angle).to_radians();
        DVec2::new(direction.cos(), direction.sin()) * self.speed
    }

    pub fn entity_location(&self) -> EntityLocation {
        EntityLocation {
            position: self.position,
            facing_angle: self.facing_angle,
        }
    }

    // Exponential smoothing per reference tick, compounded for longer or
    // shorter steps. A full reference tick uses the factor untouched.
    fn smoothing(&self, time_step: f64) -> f64 {
        if time_step == 1.0 {
            self.tuning.drift_factor
        } else {
            1.0 - (1.0 - self.tuning.drift_factor).powf(time_step)
        }
    }

    // Points accumulate over a reference tick and are floored when it
    // completes, so a full-tick step scores floor(drift * multiplier) and
    // shorter steps add up to about the same.
    fn accrue_drift_points(&mut self, drift_amount: Degrees, time_step: f64) {
        if drift_amount > self.tuning.drift_score_threshold
            && self.speed > self.tuning.min_scoring_speed
        {
            self.score_carry += drift_amount * self.tuning.drift_score_multiplier * time_step;
        }

        self.score_clock += time_step;
        let whole_ticks = (self.score_clock + ROUNDING_SLACK).floor();
        if whole_ticks >= 1.0 {
            self.score += self.score_carry.floor() as u64;
            self.score_carry = 0.0;
            self.score_clock = f64::max(self.score_clock - whole_ticks, 0.0);
        }
    }
}
