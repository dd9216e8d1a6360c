use structure::validate::SeriesError;
use thiserror::Error;

/// Плохие параметры вызова (проверяются до любых расчётов)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("look_back must be >= 1")]
    LookBackTooShort,
    #[error("multiplier must be a finite number > 0, got {0}")]
    NonPositiveMultiplier(f64),
    #[error("series is empty")]
    EmptySeries,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuperTrendError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),
    #[error("series invariant violated: {0}")]
    InvariantViolation(#[from] SeriesError),
}
