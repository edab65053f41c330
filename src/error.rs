use thiserror::Error;

/// Everything the advisor rejects before it will score a hand.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdvisorError {
    #[error("invalid rank {0}: expected a value between 1 and 14")]
    InvalidRank(i64),

    #[error("invalid suit '{0}': expected H, S, D or C")]
    InvalidSuit(String),

    #[error("invalid {field} {value}: amounts must be finite and not negative")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("amount to call must be greater than zero to compute pot odds")]
    ZeroCall,

    #[error("malformed input: {0}")]
    MalformedInput(String),
}

pub type Result<T, E = AdvisorError> = std::result::Result<T, E>;

/// Rejects negative and non-finite monetary inputs.
pub(crate) fn check_amount(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AdvisorError::InvalidAmount { field, value })
    }
}
