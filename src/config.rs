use tqe::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logger setup for the demo binary. `RUST_LOG` overrides the default
/// `Info` level.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    return Ok(());
}
