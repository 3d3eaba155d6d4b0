//! Pre-parse helpers for reporting clap failures as rubricgen errors

use clap::error::ErrorKind;
use rubricgen_core::error::RubricError;

/// Whether the raw arguments ask for JSON output, checked before clap runs
pub fn requests_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}

/// Map a clap failure onto the error taxonomy.
///
/// Returns `None` for help and version output, which are not failures.
pub fn parse_failure(err: &clap::Error) -> Option<RubricError> {
    let mapped = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return None,
        ErrorKind::ArgumentConflict => RubricError::DuplicateFormat,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument => RubricError::UsageError(err.to_string()),
        _ => RubricError::Other(err.to_string()),
    };
    Some(mapped)
}
