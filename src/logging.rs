// src/logging.rs
use log::LevelFilter;

/// Install the stderr logger. `RUST_LOG` overrides `default_level`.
pub fn init(default_level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(default_level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
