//! Unit-typed snapshot of an atmospheric state.

use sa_core::units::{
    Density, DynVisc, Length, Pressure, Temperature, Velocity, k, kg_m3, km, m, mps, pa, pa_s,
};
use uom::si::{
    dynamic_viscosity::pascal_second,
    length::{kilometer, meter},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::state::AtmosphericState;

#[cfg(feature = "serde")]
use serde::Serialize;

/// All absolute properties of one state, as uom quantities.
///
/// Computed once from an [`AtmosphericState`] so callers that need several
/// values (reports, sweeps) do not re-run the viscosity formula per access.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AtmosphericProperties {
    /// Geometric altitude
    pub altitude: Length,
    /// Geopotential altitude
    pub geopotential: Length,
    /// Static temperature
    pub t: Temperature,
    /// Static pressure
    pub p: Pressure,
    /// Density
    pub rho: Density,
    /// Speed of sound
    pub a: Velocity,
    /// Dynamic viscosity
    pub mu: DynVisc,
    /// Kinematic viscosity [m²/s]
    pub nu_m2_s: f64,
}

impl AtmosphericProperties {
    pub fn from_state(state: &AtmosphericState) -> Self {
        let mu = state.dynamic_viscosity();
        let rho = state.density();
        Self {
            altitude: m(state.altitude_m()),
            geopotential: km(state.geopotential_km()),
            t: k(state.temperature()),
            p: pa(state.pressure()),
            rho: kg_m3(rho),
            a: mps(state.sound_speed()),
            mu: pa_s(mu),
            nu_m2_s: mu / rho,
        }
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude.get::<meter>()
    }

    pub fn geopotential_km(&self) -> f64 {
        self.geopotential.get::<kilometer>()
    }

    pub fn temperature_k(&self) -> f64 {
        self.t.get::<kelvin>()
    }

    pub fn pressure_pa(&self) -> f64 {
        self.p.get::<pascal>()
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.rho.get::<kilogram_per_cubic_meter>()
    }

    pub fn sound_speed_mps(&self) -> f64 {
        self.a.get::<meter_per_second>()
    }

    pub fn dynamic_viscosity_pa_s(&self) -> f64 {
        self.mu.get::<pascal_second>()
    }

    pub fn kinematic_viscosity_m2_s(&self) -> f64 {
        self.nu_m2_s
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Atmo(z={:.0}m,T={:.2}K,P={:.1}Pa,ρ={:.4}kg/m³,a={:.2}m/s,μ={:.4e}Pa·s,ν={:.4e}m²/s)",
            self.altitude_m(),
            self.temperature_k(),
            self.pressure_pa(),
            self.density_kg_m3(),
            self.sound_speed_mps(),
            self.dynamic_viscosity_pa_s(),
            self.kinematic_viscosity_m2_s()
        )
    }
}

impl AtmosphericState {
    /// Unit-typed snapshot of this state.
    pub fn properties(&self) -> AtmosphericProperties {
        AtmosphericProperties::from_state(self)
    }
}
