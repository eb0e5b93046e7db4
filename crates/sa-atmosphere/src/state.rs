//! Atmospheric state at one altitude and the quantities derived from it.

use std::fmt;

use sa_core::numeric::{ensure_finite, ensure_positive};

use crate::constants::{
    A_SL_MPS, P_SL_PA, RHO_SL_KG_M3, SUTHERLAND_BETA, SUTHERLAND_S_K, T_SL_K,
};
use crate::error::{AtmosphereError, AtmosphereResult};
use crate::segment::{Band, Segment};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Temperature and pressure ratios of the standard atmosphere at one altitude.
///
/// Built only by [`crate::AtmosphereModel::evaluate`], so the ratios always come
/// from exactly one band. Every other quantity is derived on demand from the
/// stored ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AtmosphericState {
    altitude_m: f64,
    geopotential_km: f64,
    band: Band,
    temperature_ratio: f64,
    pressure_ratio: f64,
    density_ratio: f64,
}

impl AtmosphericState {
    pub(crate) fn from_segment(altitude_m: f64, geopotential_km: f64, seg: &Segment) -> Self {
        let (t_k, pressure_ratio) = seg.evaluate(geopotential_km);
        let temperature_ratio = t_k / T_SL_K;
        Self {
            altitude_m,
            geopotential_km,
            band: seg.band,
            temperature_ratio,
            pressure_ratio,
            density_ratio: pressure_ratio / temperature_ratio,
        }
    }

    /// Geometric altitude [m] this state was evaluated at.
    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    /// Geopotential altitude [km].
    pub fn geopotential_km(&self) -> f64 {
        self.geopotential_km
    }

    /// Band that produced the ratios.
    pub fn band(&self) -> Band {
        self.band
    }

    /// T / T_sl
    pub fn temperature_ratio(&self) -> f64 {
        self.temperature_ratio
    }

    /// P / P_sl
    pub fn pressure_ratio(&self) -> f64 {
        self.pressure_ratio
    }

    /// ρ / ρ_sl
    pub fn density_ratio(&self) -> f64 {
        self.density_ratio
    }

    /// Temperature [K].
    pub fn temperature(&self) -> f64 {
        T_SL_K * self.temperature_ratio
    }

    /// Pressure [Pa].
    pub fn pressure(&self) -> f64 {
        P_SL_PA * self.pressure_ratio
    }

    /// Density [kg/m³].
    pub fn density(&self) -> f64 {
        RHO_SL_KG_M3 * self.density_ratio
    }

    /// Speed of sound [m/s].
    pub fn sound_speed(&self) -> f64 {
        A_SL_MPS * self.temperature_ratio.sqrt()
    }

    /// Dynamic viscosity [Pa·s] from Sutherland's law.
    ///
    /// ```text
    /// μ = β T^1.5 / (T + S)
    /// ```
    pub fn dynamic_viscosity(&self) -> f64 {
        let t = self.temperature();
        SUTHERLAND_BETA * t.powf(1.5) / (t + SUTHERLAND_S_K)
    }

    /// Kinematic viscosity [m²/s].
    pub fn kinematic_viscosity(&self) -> f64 {
        self.dynamic_viscosity() / self.density()
    }

    /// Dynamic pressure [Pa] at airspeed `speed_mps`.
    pub fn dynamic_pressure(&self, speed_mps: f64) -> f64 {
        self.density() * speed_mps * speed_mps / 2.0
    }

    /// Reynolds number for reference length `length_m` (e.g. chord) at `speed_mps`.
    ///
    /// Fails with [`AtmosphereError::InvalidArgument`] when the length is not
    /// strictly positive or the speed is NaN/∞.
    pub fn reynolds(&self, length_m: f64, speed_mps: f64) -> AtmosphereResult<f64> {
        let length_m = ensure_positive(length_m, "reference length").map_err(|_| {
            AtmosphereError::InvalidArgument {
                what: "reference length",
                value: length_m,
            }
        })?;
        let speed_mps =
            ensure_finite(speed_mps, "airspeed").map_err(|_| AtmosphereError::InvalidArgument {
                what: "airspeed",
                value: speed_mps,
            })?;
        Ok(self.density() * speed_mps * length_m / self.dynamic_viscosity())
    }

    /// Mach number at airspeed `speed_mps`.
    pub fn mach(&self, speed_mps: f64) -> f64 {
        speed_mps / self.sound_speed()
    }
}

impl fmt::Display for AtmosphericState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "z={:.1} m (H={:.3} km, {}): T={:.2} K, P={:.1} Pa, ρ={:.4} kg/m³, a={:.2} m/s",
            self.altitude_m,
            self.geopotential_km,
            self.band,
            self.temperature(),
            self.pressure(),
            self.density(),
            self.sound_speed()
        )
    }
}
