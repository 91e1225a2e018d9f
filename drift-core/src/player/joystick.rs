use glam::DVec2;

use crate::player::player_inputs::{DriveVector, PointerEvent};
use crate::GLOBAL_CONFIG;

/// On-screen virtual stick. A press near the base grabs the knob, dragging
/// moves it (never further than `max_offset` from the base), and letting go
/// snaps it back.
#[derive(Clone, Debug)]
pub struct Joystick {
    center: DVec2,
    knob_radius: f64,
    max_offset: f64,
    active: bool,
    drag_position: Option<DVec2>,
}

impl Joystick {
    pub fn new(center: DVec2, knob_radius: f64, max_offset: f64) -> Joystick {
        Joystick {
            center,
            knob_radius,
            max_offset,
            active: false,
            drag_position: None,
        }
    }

    // bottom-center of the configured viewport
    pub fn from_config() -> Joystick {
        let center = DVec2::new(
            (GLOBAL_CONFIG.viewport_width / 2.0).floor(),
            GLOBAL_CONFIG.viewport_height - GLOBAL_CONFIG.joystick_bottom_margin,
        );
        Joystick::new(
            center,
            GLOBAL_CONFIG.joystick_knob_radius,
            GLOBAL_CONFIG.joystick_max_offset,
        )
    }

    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(position) => self.begin(position),
            PointerEvent::Move(position) => self.drag(position),
            PointerEvent::Release => self.release(),
        }
    }

    // presses outside the base ring are ignored; an accepted press is kept
    // where it landed until the first drag
    pub fn begin(&mut self, pointer: DVec2) {
        if pointer.distance(self.center) < self.activation_radius() {
            self.active = true;
            self.drag_position = Some(pointer);
        }
    }

    pub fn drag(&mut self, pointer: DVec2) {
        if !self.active {
            return;
        }
        self.drag_position = Some(self.clamp_to_travel(pointer));
    }

    pub fn release(&mut self) {
        self.active = false;
        self.drag_position = None;
    }

    pub fn current_vector(&self) -> DriveVector {
        match self.drag_position {
            Some(position) if self.active => {
                // a press can land past the travel radius, so clamp here too
                let offset = (position - self.center).clamp_length_max(self.max_offset);
                DriveVector::from_vec(offset / self.max_offset)
            }
            _ => DriveVector::ZERO,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn knob_radius(&self) -> f64 {
        self.knob_radius
    }

    /// Where the knob should be drawn, if it is being held.
    pub fn knob_position(&self) -> Option<DVec2> {
        self.drag_position
    }

    pub fn activation_radius(&self) -> f64 {
        self.knob_radius * 2.0
    }

    fn clamp_to_travel(&self, pointer: DVec2) -> DVec2 {
        self.center + (pointer - self.center).clamp_length_max(self.max_offset)
    }
}
