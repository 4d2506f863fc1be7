use tracing::metadata::LevelFilter;

mod error;
pub use error::*;

mod element;
pub use element::*;

mod repository;
pub use repository::*;

mod table;
pub use table::*;

mod parse;
pub use parse::*;

mod molecule;
pub use molecule::*;

mod units;
pub use units::*;

mod session;
pub use session::*;

pub mod orbital;

/// Sends `tracing` output at `level` and above ("trace", "debug", "info",
/// "warn", "error" or "off") to stderr. Unknown levels mean "info".
///
/// Only the first call installs a subscriber, so tests can call this freely.
pub fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
