//! The altitude-to-state evaluator.

use crate::error::{AtmosphereError, AtmosphereResult};
use crate::segment::{find_segment, geopotential_km};
use crate::state::AtmosphericState;

/// 1976 Standard Atmosphere evaluator.
///
/// Carries no data: all reference values are crate constants, so the model is
/// free to copy and share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtmosphereModel;

impl AtmosphereModel {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the atmosphere at geometric altitude `altitude_m` [m].
    ///
    /// Fails with [`AtmosphereError::OutOfDomain`] when the geopotential altitude
    /// is at or above 84.852 km, or when the input has no finite geopotential.
    /// Negative altitudes are accepted and extrapolate the troposphere.
    pub fn evaluate(&self, altitude_m: f64) -> AtmosphereResult<AtmosphericState> {
        let h_km = geopotential_km(altitude_m);
        let seg = find_segment(h_km)
            .filter(|_| h_km.is_finite())
            .ok_or(AtmosphereError::OutOfDomain {
                altitude_m,
                geopotential_km: h_km,
            })?;

        let state = AtmosphericState::from_segment(altitude_m, h_km, seg);
        tracing::trace!(
            altitude_m,
            geopotential_km = h_km,
            band = %seg.band,
            temperature_k = state.temperature(),
            "evaluated standard atmosphere"
        );
        Ok(state)
    }
}

/// Shorthand for `AtmosphereModel::new().evaluate(altitude_m)`.
pub fn evaluate(altitude_m: f64) -> AtmosphereResult<AtmosphericState> {
    AtmosphereModel.evaluate(altitude_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{Band, ceiling_altitude_m};

    #[test]
    fn sea_level_reference_values() {
        let s = evaluate(0.0).unwrap();
        assert!((s.temperature() - 288.15).abs() / 288.15 < 1e-3);
        assert!((s.pressure() - 101_325.0).abs() / 101_325.0 < 1e-3);
        assert!((s.density() - 1.225).abs() / 1.225 < 1e-3);
        assert!((s.sound_speed() - 340.294).abs() / 340.294 < 1e-3);
        assert_eq!(s.band(), Band::Troposphere);
    }

    #[test]
    fn tropopause_at_11km_geopotential() {
        let z = crate::segment::geometric_altitude_m(11.0);
        let s = evaluate(z).unwrap();
        assert!((s.temperature() - 216.65).abs() < 1e-6);
        assert!((s.pressure() - 22_632.0).abs() < 5.0, "P = {}", s.pressure());
    }

    #[test]
    fn ceiling_is_exclusive() {
        let ceiling = ceiling_altitude_m();
        let below = evaluate(ceiling - 1.0).unwrap();
        assert_eq!(below.band(), Band::UpperMesosphere);

        let err = evaluate(86_000.0).unwrap_err();
        assert!(err.is_out_of_domain());
        assert_eq!(err.altitude_m(), Some(86_000.0));
    }

    #[test]
    fn geometric_84852_m_is_still_inside() {
        // Ceiling is on geopotential, not geometric, altitude
        let s = evaluate(84_852.0).unwrap();
        assert!(s.geopotential_km() < 84.0);
    }

    #[test]
    fn non_finite_altitudes_are_out_of_domain() {
        for z in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = evaluate(z).unwrap_err();
            assert!(err.is_out_of_domain(), "z = {z}");
        }
    }

    #[test]
    fn negative_altitude_extrapolates() {
        let s = evaluate(-400.0).unwrap();
        assert_eq!(s.band(), Band::Troposphere);
        assert!(s.temperature() > 288.15);
        assert!(s.pressure() > 101_325.0);
    }

    #[test]
    fn model_and_free_function_agree() {
        let a = AtmosphereModel::new().evaluate(12_345.0).unwrap();
        let b = evaluate(12_345.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn model_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<AtmosphereModel>();
        assert_send_sync::<AtmosphericState>();
    }
}
