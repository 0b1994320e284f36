pub mod game;
pub mod simulation;

/// Win/lose proportions and convergence tolerances.
pub type Probability = f64;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Interval (in rounds) between progress log messages during long batches.
pub const BATCH_LOG_INTERVAL: usize = 100_000;

/// Initialize terminal logging. INFO level, locations and thread names
/// suppressed.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

/// Global interrupt flag for graceful early termination between rounds.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if graceful early termination was requested (via stdin "Q").
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}

/// Request graceful early termination. The batch runner stops between
/// rounds and returns the trials collected so far.
pub fn interrupt() {
    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
}

/// Register graceful interrupt watcher. Type "Q" + Enter to stop after the
/// current round.
pub fn brb() {
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            if let Ok(_) = std::io::stdin().read_line(buffer) {
                if buffer.trim().to_uppercase() == "Q" {
                    log::warn!("graceful interrupt requested, finishing current round...");
                    interrupt();
                    break;
                }
            }
        }
    });
}
