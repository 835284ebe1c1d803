use std::str::FromStr;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// Log lines go to stderr so they never interleave with the menus printed on stdout.
pub fn setup_tracing(config: &Configuration) -> LibraryResult<()> {
    let level = tracing::Level::from_str(config.log_level.as_str()).unwrap_or(tracing::Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    let res = if config.log_json {
        builder.with_ansi(false).json().try_init()
    } else {
        builder.try_init()
    };
    res.map_err(|err| LibraryError::runtime(format!("tracing setup {:?}", err).as_str(), None))
}
