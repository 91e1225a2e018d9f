use config::{Config, ConfigError, Environment, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    // reference frame rate; every per-tick tuning value below assumes it
    pub frame_rate: u64,
    // run ticks on the wall clock instead of back-to-back
    pub realtime: bool,

    pub viewport_width: f64,
    pub viewport_height: f64,
    pub map_width: f64,
    pub map_height: f64,

    pub start_x: f64,
    pub start_y: f64,

    // joystick sits centered horizontally, this far above the bottom edge
    pub joystick_bottom_margin: f64,
    pub joystick_knob_radius: f64,
    pub joystick_max_offset: f64,

    pub car_acceleration: f64,
    pub car_friction: f64,
    pub max_car_speed: f64,
    pub car_turn_rate: f64,
    pub drift_factor: f64,
    pub drive_dead_zone: f64,
    pub drift_score_threshold: f64,
    pub drift_score_multiplier: f64,
    pub min_scoring_speed: f64,

    pub high_score_path: String,
    pub total_score_path: String,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("frame_rate", 60)?
            .set_default("realtime", false)?
            .set_default("viewport_width", 800.0)?
            .set_default("viewport_height", 600.0)?
            .set_default("map_width", 1600.0)?
            .set_default("map_height", 1200.0)?
            .set_default("start_x", 800.0)?
            .set_default("start_y", 600.0)?
            .set_default("joystick_bottom_margin", 80.0)?
            .set_default("joystick_knob_radius", 40.0)?
            .set_default("joystick_max_offset", 40.0)?
            .set_default("car_acceleration", 0.2)?
            .set_default("car_friction", 0.05)?
            .set_default("max_car_speed", 5.0)?
            .set_default("car_turn_rate", 3.0)?
            .set_default("drift_factor", 0.15)?
            .set_default("drive_dead_zone", 0.2)?
            .set_default("drift_score_threshold", 10.0)?
            .set_default("drift_score_multiplier", 0.1)?
            .set_default("min_scoring_speed", 1.0)?
            .set_default("high_score_path", "highscore.txt")?
            .set_default("total_score_path", "totalscore.txt")?
            .add_source(File::with_name("config.yaml").required(false))
            .add_source(Environment::with_prefix("DRIFT"))
            .build()?;

        config.try_deserialize()
    }

    /// Length of one reference tick in seconds.
    pub fn tick_seconds(&self) -> f64 {
        1.0 / self.frame_rate as f64
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}
