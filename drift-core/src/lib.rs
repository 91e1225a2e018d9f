pub mod angles;
pub mod camera;
pub mod entity_location;
pub mod player;
mod settings;

pub use settings::GLOBAL_CONFIG;
