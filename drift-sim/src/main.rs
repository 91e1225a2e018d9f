use std::process;

use drift_core::GLOBAL_CONFIG;
use tracing::{error, info};

use drift_sim::game::runner::SessionRunner;
use drift_sim::game::GameSession;
use drift_sim::replay;

// ticks to keep simulating after the last recorded event, so the car can roll to a stop
const COAST_TICKS: u64 = 120;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() {
    init_tracing();

    // usage: drift-sim [replay.json] [ticks]
    let mut args = std::env::args().skip(1);
    let events = match args.next() {
        Some(path) => match replay::load_replay(&path) {
            Ok(events) => events,
            Err(e) => {
                error!(%path, error = %e, "could not load replay");
                process::exit(1);
            }
        },
        None => Vec::new(),
    };
    let requested_ticks = match args.next().map(|ticks| ticks.parse::<u64>()) {
        Some(Ok(ticks)) => Some(ticks),
        Some(Err(e)) => {
            error!(error = %e, "tick count must be a whole number");
            process::exit(1);
        }
        None => None,
    };

    info!(frame_rate = GLOBAL_CONFIG.frame_rate, "drift city starting");

    let runner = SessionRunner::from_config(GameSession::from_config(), events);
    let ticks = requested_ticks.unwrap_or_else(|| runner.replay_length(COAST_TICKS));
    let summary = runner.run(ticks);

    info!(
        ticks = summary.ticks,
        score = summary.score,
        high_score = summary.high_score,
        total_score = summary.total_score,
        "race finished"
    );
}
