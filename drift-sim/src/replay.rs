use std::fs;
use std::path::Path;

use drift_core::player::player_inputs::PointerEvent;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("could not read replay file: {0}")]
    Io(#[from] std::io::Error),
    #[error("replay file is not a list of timed pointer events: {0}")]
    Format(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReplayError>;

// One recorded pointer event and the tick it arrived on
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimedPointerEvent {
    pub tick: u64,
    pub event: PointerEvent,
}

/// Parses a JSON replay and orders it by tick. Events sharing a tick keep
/// their recorded order.
pub fn parse_replay(json: &str) -> Result<Vec<TimedPointerEvent>> {
    let mut events: Vec<TimedPointerEvent> = serde_json::from_str(json)?;
    events.sort_by_key(|timed| timed.tick);
    Ok(events)
}

pub fn load_replay(path: impl AsRef<Path>) -> Result<Vec<TimedPointerEvent>> {
    let contents = fs::read_to_string(path)?;
    parse_replay(&contents)
}
