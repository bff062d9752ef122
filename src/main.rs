//! Drift Storm headless driver
//!
//! Runs the simulation in demo mode at a fixed 60 Hz frame delta and prints
//! the final snapshot as JSON.
//!
//! Usage: `drift-storm [settings.json] [max_frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use drift_storm::sim::{GameEvent, GameState, advance, autopilot};
    use drift_storm::{AudioManager, LogSink, Settings};

    /// Frame delta handed to the simulation (ms)
    const FRAME_MS: f32 = 1000.0 / 60.0;
    const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let max_frames = args
        .next()
        .and_then(|s| match s.parse::<u64>() {
            Ok(n) => Some(n),
            Err(e) => {
                log::warn!("Ignoring frame limit {:?}: {}", s, e);
                None
            }
        })
        .unwrap_or(DEFAULT_MAX_FRAMES);

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Drift Storm (headless) starting, seed {}", seed);

    let mut state = GameState::new(seed, &settings);
    let mut audio = AudioManager::with_settings(LogSink, &settings);

    while state.frame < max_frames && !state.session.game_over {
        let intents = autopilot(&state);
        advance(&mut state, &intents, FRAME_MS);

        let events = state.drain_events();
        for event in &events {
            if let GameEvent::WaveCleared { .. } | GameEvent::GameOver { .. } = event {
                log::info!("{}", state.hud().status_line());
            }
        }
        audio.dispatch(&events);
    }

    let hud = state.hud();
    match hud.game_over_banner() {
        Some(banner) => println!("{}", banner),
        None => println!("{}", hud.status_line()),
    }
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}
