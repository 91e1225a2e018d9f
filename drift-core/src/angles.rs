//! Degree arithmetic shared by the car and anything that renders it.
//!
//! Every angle handed out by these helpers lies in (-180, 180]. Differences are
//! always taken along the shorter arc, so a car pointing at 179 degrees that
//! wants to face -179 turns 2 degrees, not 358.

use glam::DVec2;

pub type Degrees = f64;

/// Reduce any angle to the canonical (-180, 180] range.
pub fn normalize_degrees(angle: Degrees) -> Degrees {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps 180 onto -180; flip it back so the range is half-open at the bottom
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Signed angle that takes `from` onto `to` the short way round.
/// Positive means counterclockwise in angle space.
pub fn shortest_arc(to: Degrees, from: Degrees) -> Degrees {
    normalize_degrees(to - from)
}

/// Rotate `current` toward `target` by no more than `max_step` degrees,
/// landing exactly on `target` once it is within reach.
pub fn approach_angle(current: Degrees, target: Degrees, max_step: Degrees) -> Degrees {
    let remaining = shortest_arc(target, current);
    if remaining.abs() <= max_step {
        normalize_degrees(target)
    } else {
        normalize_degrees(current + max_step.copysign(remaining))
    }
}

/// Heading for a screen-space offset, with screen "up" (negative y) as 0
/// degrees and rightward offsets giving negative angles.
pub fn heading_from_offset(offset: DVec2) -> Degrees {
    normalize_degrees(-offset.x.atan2(-offset.y).to_degrees())
}
