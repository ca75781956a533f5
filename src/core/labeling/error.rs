//! Labeling error types.

use thiserror::Error;

/// Errors raised while validating labeler and filter arguments.
///
/// All checks run before the scan starts, so a failed call never
/// produces a partial label sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelError {
    #[error("Invalid argument: {name} - {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl LabelError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        LabelError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias for labeling operations.
pub type Result<T> = std::result::Result<T, LabelError>;

/// Excursion must be a finite, strictly positive magnitude.
pub(crate) fn check_excursion(excursion: f64) -> Result<()> {
    if !(excursion.is_finite() && excursion > 0.0) {
        return Err(LabelError::invalid(
            "excursion",
            format!("must be finite and > 0, got {}", excursion),
        ));
    }
    Ok(())
}

pub(crate) fn check_inactive(inactive: usize) -> Result<()> {
    if inactive == 0 {
        return Err(LabelError::invalid("inactive", "must be at least 1 sample"));
    }
    Ok(())
}

pub(crate) fn check_lengths(values: usize, labels: usize) -> Result<()> {
    if values != labels {
        return Err(LabelError::invalid(
            "dir",
            format!("length {} does not match values length {}", labels, values),
        ));
    }
    Ok(())
}
