pub mod joystick;
pub mod player_inputs;
