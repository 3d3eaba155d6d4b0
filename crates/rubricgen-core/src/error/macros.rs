//! Error macros for rubricgen

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RubricError::UsageError($msg.to_string()))
    };
}
