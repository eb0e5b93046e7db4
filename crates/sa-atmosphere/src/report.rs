//! Plain-text reports for single points and sweeps.

use crate::error::AtmosphereResult;
use crate::state::AtmosphericState;
use crate::sweep_executor::{FlightCondition, SweepResult};

/// Multi-line report of every quantity at one altitude.
///
/// `speed_mps` adds dynamic pressure and Mach; `length_m` (with a speed) adds
/// the Reynolds number.
pub fn point_report(
    state: &AtmosphericState,
    speed_mps: Option<f64>,
    length_m: Option<f64>,
) -> AtmosphereResult<String> {
    let mut out = String::new();
    out.push_str(&format!("Altitude            {:>14.1} m\n", state.altitude_m()));
    out.push_str(&format!("Geopotential        {:>14.4} km\n", state.geopotential_km()));
    out.push_str(&format!("Band                {:>14}\n", state.band().label()));
    out.push_str(&format!("Temperature         {:>14.3} K\n", state.temperature()));
    out.push_str(&format!("Pressure            {:>14.2} Pa\n", state.pressure()));
    out.push_str(&format!("Density             {:>14.6} kg/m^3\n", state.density()));
    out.push_str(&format!("Sound speed         {:>14.3} m/s\n", state.sound_speed()));
    out.push_str(&format!(
        "Dynamic viscosity   {:>14.6e} Pa s\n",
        state.dynamic_viscosity()
    ));
    out.push_str(&format!(
        "Kinematic viscosity {:>14.6e} m^2/s\n",
        state.kinematic_viscosity()
    ));

    if let Some(u) = speed_mps {
        out.push_str(&format!("Airspeed            {:>14.3} m/s\n", u));
        out.push_str(&format!(
            "Dynamic pressure    {:>14.3} Pa\n",
            state.dynamic_pressure(u)
        ));
        out.push_str(&format!("Mach                {:>14.5}\n", state.mach(u)));
        if let Some(l) = length_m {
            let re = state.reynolds(l, u)?;
            out.push_str(&format!("Reynolds (L={:<6}) {:>14.4e}\n", l, re));
        }
    }

    Ok(out)
}

/// Aligned table of an altitude sweep; skipped points are marked.
pub fn sweep_table(result: &SweepResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>12} {:>10} {:>12} {:>10} {:>10}\n",
        "z [m]", "T [K]", "P [Pa]", "rho", "a [m/s]"
    ));
    for (z, state) in result.altitudes_m.iter().zip(&result.states) {
        match state {
            Some(s) => {
                out.push_str(&format!(
                    "{:>12.1} {:>10.3} {:>12.2} {:>10.5} {:>10.3}\n",
                    z,
                    s.temperature(),
                    s.pressure(),
                    s.density(),
                    s.sound_speed()
                ));
            }
            None => {
                out.push_str(&format!("{:>12.1} {:>10}\n", z, "out of domain"));
            }
        }
    }
    out
}

/// Aligned table of flight conditions.
pub fn conditions_table(conditions: &[Option<FlightCondition>]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>12} {:>10} {:>10} {:>12} {:>12}\n",
        "z [m]", "U [m/s]", "Mach", "q [Pa]", "Re"
    ));
    for (i, condition) in conditions.iter().enumerate() {
        match condition {
            Some(c) => {
                let re = c
                    .reynolds
                    .map(|re| format!("{re:.4e}"))
                    .unwrap_or_else(|| "-".to_string());
                out.push_str(&format!(
                    "{:>12.1} {:>10.2} {:>10.5} {:>12.3} {:>12}\n",
                    c.altitude_m, c.speed_mps, c.mach, c.dynamic_pressure_pa, re
                ));
            }
            None => {
                out.push_str(&format!("{:>12} point {} skipped\n", "-", i));
            }
        }
    }
    out
}
