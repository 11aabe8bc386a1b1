use thiserror::Error;

/// Error type for strict unit-label parsing.
///
/// Only the `FromStr` implementations return this. The aggregation and
/// formatting paths are total: malformed records degrade to zero-valued
/// contributions instead of erroring, so a partially-loaded trip never
/// fails to render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("unknown weight unit: {0}")]
    UnknownWeightUnit(String),

    #[error("unknown volume unit: {0}")]
    UnknownVolumeUnit(String),
}
