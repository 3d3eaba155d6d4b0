use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate targets covered by the default filter
const TARGETS: [&str; 2] = ["rubricgen", "rubricgen_core"];

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", rules = rows.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match (verbose, log_level) {
        (_, Some(level)) => filter_directive(level),
        (true, None) => filter_directive("debug"),
        (false, None) => filter_directive("warn"),
    };

    // RUST_LOG wins, then RUBRICGEN_LOG, then the CLI-derived directive
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("RUBRICGEN_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Expand a bare level into a per-crate directive; full directives pass through.
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_covers_both_crates() {
        assert_eq!(
            filter_directive("debug"),
            "rubricgen=debug,rubricgen_core=debug"
        );
    }

    #[test]
    fn test_full_directive_passes_through() {
        assert_eq!(filter_directive("rubricgen_core=trace"), "rubricgen_core=trace");
    }
}
