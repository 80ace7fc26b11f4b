//! Logger setup.

use env_logger::{Builder, Env};
use std::io::Write;

/// Default filter for a `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialises `env_logger` on stderr. `RUST_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    let env = Env::default().filter_or("RUST_LOG", default_filter(verbosity));
    let _ = Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init();
}
