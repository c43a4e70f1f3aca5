//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Output format of the process-wide subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One JSON object per event.
    Json,
    /// Compact single-line text.
    Pretty,
}

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Events go to stderr; stdout belongs to the
/// host's own output.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: Format) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false);

    let _ = match format {
        Format::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_writer(std::io::stderr)
            .try_init(),
        Format::Pretty => builder
            .compact()
            .with_writer(std::io::stderr)
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init(Format::Json);
        init(Format::Pretty);
        init(Format::Json);
        ::tracing::info!("still logging");
    }
}
