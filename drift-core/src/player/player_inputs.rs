use glam::DVec2;
use serde::{Deserialize, Serialize};

// Raw pointer interaction, in screen pixels, as delivered by whatever owns the
// window. The joystick turns a stream of these into a DriveVector.
#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum PointerEvent {
    Press(DVec2),
    Move(DVec2),
    Release,
}

/// Normalized steering/throttle input. Direction is where the player wants the
/// car to point, length (never above 1) is how hard they are pushing.
#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct DriveVector(DVec2);

impl DriveVector {
    pub const ZERO: DriveVector = DriveVector(DVec2::ZERO);

    // anything outside the unit disk is pulled back onto its edge
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_vec(DVec2::new(x, y))
    }

    pub fn from_vec(v: DVec2) -> Self {
        DriveVector(v.clamp_length_max(1.0))
    }

    pub fn as_vec(&self) -> DVec2 {
        self.0
    }

    pub fn length(&self) -> f64 {
        self.0.length()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == DVec2::ZERO
    }
}
