use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` wins over the `-v` count.
pub fn init(verbose: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(verbose)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second install (tests, embedding) keeps the first subscriber.
    let _ = Registry::default().with(env_filter).with(layer).try_init();
}

fn level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::level;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "debug");
        assert_eq!(level(4), "trace");
    }
}
