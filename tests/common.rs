//! Test utilities & fixtures shared by the integration tests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use squirrelhaven::config::{Config, GamesConfig};
use squirrelhaven::haven::{Event, HavenServer};
use squirrelhaven::text::TextCatalog;

/// Default config with short game clocks so sessions finish in a few ticks.
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        games: GamesConfig {
            nut_catch_secs: 5,
            quick_click_secs: 5,
            memory_secs: 10,
            ..GamesConfig::default()
        },
        ..Config::default()
    }
}

#[allow(dead_code)]
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Server with the bundled text document and a seeded RNG.
#[allow(dead_code)]
pub fn server(seed: u64) -> HavenServer {
    HavenServer::with_rng(test_config(), TextCatalog::builtin(), rng(seed))
}

/// Send one input line and join the replies.
#[allow(dead_code)]
pub fn say(server: &mut HavenServer, line: &str) -> String {
    server.apply(Event::Input(line.to_string())).join("\n")
}
