use std::thread;
use std::time::{Duration, Instant};

use drift_core::GLOBAL_CONFIG;
use tracing::{info, warn};

use crate::game::GameSession;
use crate::replay::TimedPointerEvent;

pub struct RaceSummary {
    pub ticks: u64,
    pub score: u64,
    pub high_score: u64,
    pub total_score: u64,
}

// Plays one race from the menu to the finish, feeding in recorded pointer
// events on the tick they were captured.
pub struct SessionRunner {
    session: GameSession,
    events: Vec<TimedPointerEvent>,
    tick_duration: Duration,
    realtime: bool,
}

impl SessionRunner {
    pub fn new(
        session: GameSession,
        events: Vec<TimedPointerEvent>,
        tick_duration: Duration,
        realtime: bool,
    ) -> SessionRunner {
        SessionRunner {
            session,
            events,
            tick_duration,
            realtime,
        }
    }

    pub fn from_config(session: GameSession, events: Vec<TimedPointerEvent>) -> SessionRunner {
        SessionRunner::new(
            session,
            events,
            Duration::from_secs_f64(GLOBAL_CONFIG.tick_seconds()),
            GLOBAL_CONFIG.realtime,
        )
    }

    // enough ticks to play back every event, plus `tail` to let the car coast
    pub fn replay_length(&self, tail: u64) -> u64 {
        self.events.last().map_or(0, |timed| timed.tick + 1) + tail
    }

    pub fn run(mut self, ticks: u64) -> RaceSummary {
        info!(ticks, events = self.events.len(), realtime = self.realtime, "starting race");
        self.session.start_race();

        let mut pending = self.events.iter().peekable();
        for tick in 0..ticks {
            let start_time = Instant::now();

            while let Some(timed) = pending.next_if(|timed| timed.tick <= tick) {
                self.session.handle_pointer(timed.event);
            }

            // every tick is one reference tick, whether or not we are
            // keeping up with the wall clock, so runs are repeatable
            self.session.tick(1.0);

            if self.realtime {
                match self.tick_duration.checked_sub(start_time.elapsed()) {
                    Some(remaining) => thread::sleep(remaining),
                    None => warn!(tick, "tick took longer than configured length"),
                }
            }
        }

        let score = self.session.return_to_menu().unwrap_or(0);
        RaceSummary {
            ticks,
            score,
            high_score: self.session.scores().high_score(),
            total_score: self.session.scores().total_score(),
        }
    }
}
