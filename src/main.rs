//! Bouncing Squares entry point

use std::time::{SystemTime, UNIX_EPOCH};

use bouncing_squares::app::App;
use bouncing_squares::sim::World;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Bouncing Squares starting with seed {seed}");

    let world = World::new(seed);
    App::new(world).run();

    log::info!("Shut down cleanly");
}
