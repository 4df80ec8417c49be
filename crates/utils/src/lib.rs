use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Keeps CLI output free of log noise.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the filter used by [`init_tracing`].
///
/// `RUST_LOG` wins when it parses; otherwise `fallback` is used.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a stderr tracing subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_LOG_FILTER))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_twice_does_not_panic() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn fallback_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
