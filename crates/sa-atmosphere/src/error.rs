//! Atmosphere model errors.

use sa_core::SaError;
use thiserror::Error;

/// Result type for atmosphere operations.
pub type AtmosphereResult<T> = Result<T, AtmosphereError>;

/// Errors that can occur while evaluating the standard atmosphere.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmosphereError {
    /// Altitude has no segment in the model (geopotential at or above the ceiling,
    /// or no finite geopotential at all).
    #[error(
        "Altitude {altitude_m} m (geopotential {geopotential_km} km) is outside the standard atmosphere (H < 84.852 km)"
    )]
    OutOfDomain {
        altitude_m: f64,
        geopotential_km: f64,
    },

    /// Non-physical auxiliary argument (reference length, speed).
    #[error("Invalid argument for {what}: {value}")]
    InvalidArgument { what: &'static str, value: f64 },

    /// Shared numeric guard failure.
    #[error(transparent)]
    Core(#[from] SaError),
}

impl AtmosphereError {
    /// The altitude that caused an out-of-domain failure, if any.
    pub fn altitude_m(&self) -> Option<f64> {
        match self {
            Self::OutOfDomain { altitude_m, .. } => Some(*altitude_m),
            _ => None,
        }
    }

    /// Whether this error means the altitude itself is unusable.
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, Self::OutOfDomain { .. })
    }
}

impl From<AtmosphereError> for SaError {
    fn from(err: AtmosphereError) -> Self {
        match err {
            AtmosphereError::OutOfDomain { altitude_m, .. } => SaError::OutOfRange {
                what: "altitude",
                value: altitude_m,
            },
            AtmosphereError::InvalidArgument { what, value } if !value.is_finite() => {
                SaError::NonFinite { what, value }
            }
            AtmosphereError::InvalidArgument { what, value } => {
                SaError::NonPositive { what, value }
            }
            AtmosphereError::Core(inner) => inner,
        }
    }
}
