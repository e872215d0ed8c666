use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the store library and the CLI.
///
/// Only events from `wayfarer_store` and `wayfarer_cli` are shown. Seeding
/// progress is logged at INFO; per-operation details need `-v` or `-vv`.
///
/// # Arguments
/// * `json` - If true, output logs in JSON format; otherwise, use human-readable format.
/// * `verbose` - Verbosity level: 0 for INFO, 1 for DEBUG, 2+ for TRACE.
pub fn init_tracing(json: bool, verbose: u8) {
    let filter = EnvFilter::new(directives(verbose));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Filter directives for the given verbosity.
fn directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("wayfarer_store={},wayfarer_cli={}", level, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_by_verbosity() {
        assert_eq!(directives(0), "wayfarer_store=info,wayfarer_cli=info");
        assert_eq!(directives(1), "wayfarer_store=debug,wayfarer_cli=debug");
        assert_eq!(directives(5), "wayfarer_store=trace,wayfarer_cli=trace");
    }
}
