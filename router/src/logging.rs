use tracing_subscriber::{EnvFilter, fmt, registry, prelude::*};

fn default_level(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Logs to stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u64) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));
    let stderr_log = fmt::layer().with_writer(std::io::stderr);
    // a subscriber may already be installed, e.g. by a test harness
    registry().with(stderr_log).with(env_filter).try_init().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_test() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "debug");
        assert_eq!(default_level(2), "trace");
        assert_eq!(default_level(7), "trace");
    }

    #[test]
    fn init_twice_test() {
        init_logging(0);
        init_logging(3);
    }
}
