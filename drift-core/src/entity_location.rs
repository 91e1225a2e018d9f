use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::angles::Degrees;

// EntityLocation is what the renderer needs from a car each frame: where to
// draw it and which way its nose points (which is not where it is going!)
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EntityLocation {
    pub position: DVec2,
    pub facing_angle: Degrees,
}
