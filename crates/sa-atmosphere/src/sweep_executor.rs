//! Sweep execution over altitude and airspeed lists.
//!
//! Connects sweep definitions with the atmosphere model and collects ordered
//! results. What happens to an out-of-domain point is the caller's choice via
//! [`SweepPolicy`]; the model itself has no batch policy.

use rayon::prelude::*;
use sa_core::numeric::ensure_positive;
use thiserror::Error;

use crate::error::{AtmosphereError, AtmosphereResult};
use crate::model::AtmosphereModel;
use crate::state::AtmosphericState;
use crate::sweeps::{SweepDefinition, SweepVariable};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Error in sweep execution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    /// Invalid sweep configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Paired sweep inputs differ in length
    #[error("Length mismatch: {altitudes} altitudes vs {speeds} speeds")]
    LengthMismatch { altitudes: usize, speeds: usize },

    /// A point failed under [`SweepPolicy::Abort`]
    #[error("Computation failed at point {point_index}: {source}")]
    ComputationFailed {
        point_index: usize,
        #[source]
        source: AtmosphereError,
    },
}

pub type SweepResultOf<T> = Result<T, SweepError>;

/// What to do with a point the model cannot evaluate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SweepPolicy {
    /// Stop at the first failing point and return its error
    #[default]
    Abort,
    /// Record `None` for the point and continue
    Skip,
}

/// Result of an altitude sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SweepResult {
    /// Altitudes in sweep order [m]
    pub altitudes_m: Vec<f64>,
    /// One entry per altitude; `None` for skipped points
    pub states: Vec<Option<AtmosphericState>>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    fn collect(
        altitudes_m: Vec<f64>,
        outcomes: Vec<AtmosphereResult<AtmosphericState>>,
        policy: SweepPolicy,
    ) -> SweepResultOf<Self> {
        let states = apply_policy(outcomes, policy)?;
        let num_successful = states.iter().filter(|s| s.is_some()).count();
        let num_failed = states.len() - num_successful;

        tracing::debug!(
            points = states.len(),
            num_successful,
            num_failed,
            "altitude sweep finished"
        );

        Ok(Self {
            altitudes_m,
            states,
            num_successful,
            num_failed,
        })
    }

    /// Successful states in sweep order.
    pub fn successful_states(&self) -> impl Iterator<Item = &AtmosphericState> {
        self.states.iter().flatten()
    }

    /// Get temperature array (excluding failed points)
    pub fn temperature_k(&self) -> Vec<f64> {
        self.successful_states().map(|s| s.temperature()).collect()
    }

    /// Get pressure array (excluding failed points)
    pub fn pressure_pa(&self) -> Vec<f64> {
        self.successful_states().map(|s| s.pressure()).collect()
    }

    /// Get density array (excluding failed points)
    pub fn density_kg_m3(&self) -> Vec<f64> {
        self.successful_states().map(|s| s.density()).collect()
    }

    /// Get sound speed array (excluding failed points)
    pub fn sound_speed_mps(&self) -> Vec<f64> {
        self.successful_states().map(|s| s.sound_speed()).collect()
    }

    /// Get altitudes corresponding to successful states
    pub fn successful_altitudes(&self) -> Vec<f64> {
        self.altitudes_m
            .iter()
            .zip(&self.states)
            .filter_map(|(z, state)| state.as_ref().map(|_| *z))
            .collect()
    }
}

/// Flight-mechanics quantities at one (altitude, airspeed) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FlightCondition {
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub mach: f64,
    pub dynamic_pressure_pa: f64,
    /// Present when a reference length was supplied
    pub reynolds: Option<f64>,
}

impl FlightCondition {
    /// Derive the condition from an evaluated state.
    pub fn at(
        state: &AtmosphericState,
        speed_mps: f64,
        length_m: Option<f64>,
    ) -> AtmosphereResult<Self> {
        let reynolds = length_m
            .map(|l| state.reynolds(l, speed_mps))
            .transpose()?;
        Ok(Self {
            altitude_m: state.altitude_m(),
            speed_mps,
            mach: state.mach(speed_mps),
            dynamic_pressure_pa: state.dynamic_pressure(speed_mps),
            reynolds,
        })
    }
}

/// Evaluate every altitude in order.
pub fn execute_altitude_sweep(
    model: &AtmosphereModel,
    altitudes_m: &[f64],
    policy: SweepPolicy,
) -> SweepResultOf<SweepResult> {
    let outcomes = altitudes_m.iter().map(|&z| model.evaluate(z)).collect();
    SweepResult::collect(altitudes_m.to_vec(), outcomes, policy)
}

/// Same as [`execute_altitude_sweep`], with points evaluated on the rayon pool.
///
/// Results keep input order; under [`SweepPolicy::Abort`] the reported error is
/// the first failing point in that order.
pub fn execute_altitude_sweep_par(
    model: &AtmosphereModel,
    altitudes_m: &[f64],
    policy: SweepPolicy,
) -> SweepResultOf<SweepResult> {
    let outcomes = altitudes_m.par_iter().map(|&z| model.evaluate(z)).collect();
    SweepResult::collect(altitudes_m.to_vec(), outcomes, policy)
}

/// Evaluate the altitudes generated by an altitude sweep definition.
pub fn execute_defined_altitude_sweep(
    model: &AtmosphereModel,
    sweep_def: &SweepDefinition,
    policy: SweepPolicy,
) -> SweepResultOf<SweepResult> {
    if sweep_def.variable != SweepVariable::Altitude {
        return Err(SweepError::InvalidConfiguration(
            "Sweep definition must be for Altitude".to_string(),
        ));
    }
    execute_altitude_sweep(model, &sweep_def.generate_points(), policy)
}

/// Flight conditions for many airspeeds at one altitude.
///
/// The altitude is evaluated once; an out-of-domain altitude fails the whole
/// sweep since no point could succeed.
pub fn execute_speed_sweep(
    model: &AtmosphereModel,
    altitude_m: f64,
    speeds_mps: &[f64],
    length_m: Option<f64>,
) -> SweepResultOf<Vec<FlightCondition>> {
    check_length(length_m)?;
    let state = model
        .evaluate(altitude_m)
        .map_err(|source| SweepError::ComputationFailed {
            point_index: 0,
            source,
        })?;

    let conditions = speeds_mps
        .iter()
        .enumerate()
        .map(|(point_index, &u)| {
            FlightCondition::at(&state, u, length_m)
                .map_err(|source| SweepError::ComputationFailed {
                    point_index,
                    source,
                })
        })
        .collect::<SweepResultOf<Vec<_>>>()?;

    tracing::debug!(altitude_m, points = conditions.len(), "speed sweep finished");
    Ok(conditions)
}

/// Speed sweep driven by a speed sweep definition.
pub fn execute_defined_speed_sweep(
    model: &AtmosphereModel,
    altitude_m: f64,
    sweep_def: &SweepDefinition,
    length_m: Option<f64>,
) -> SweepResultOf<Vec<FlightCondition>> {
    if sweep_def.variable != SweepVariable::Speed {
        return Err(SweepError::InvalidConfiguration(
            "Sweep definition must be for Speed".to_string(),
        ));
    }
    execute_speed_sweep(model, altitude_m, &sweep_def.generate_points(), length_m)
}

/// Element-wise (altitude_i, speed_i) flight conditions.
pub fn execute_paired_sweep(
    model: &AtmosphereModel,
    altitudes_m: &[f64],
    speeds_mps: &[f64],
    length_m: Option<f64>,
    policy: SweepPolicy,
) -> SweepResultOf<Vec<Option<FlightCondition>>> {
    if altitudes_m.len() != speeds_mps.len() {
        return Err(SweepError::LengthMismatch {
            altitudes: altitudes_m.len(),
            speeds: speeds_mps.len(),
        });
    }
    check_length(length_m)?;

    let outcomes = altitudes_m
        .iter()
        .zip(speeds_mps)
        .map(|(&z, &u)| {
            model
                .evaluate(z)
                .and_then(|state| FlightCondition::at(&state, u, length_m))
        })
        .collect();
    let conditions = apply_policy(outcomes, policy)?;

    tracing::debug!(points = conditions.len(), "paired sweep finished");
    Ok(conditions)
}

fn check_length(length_m: Option<f64>) -> SweepResultOf<()> {
    match length_m {
        Some(l) if ensure_positive(l, "reference length").is_err() => Err(
            SweepError::InvalidConfiguration(format!("Reference length must be positive, got {l}")),
        ),
        _ => Ok(()),
    }
}

fn apply_policy<T>(
    outcomes: Vec<AtmosphereResult<T>>,
    policy: SweepPolicy,
) -> SweepResultOf<Vec<Option<T>>> {
    outcomes
        .into_iter()
        .enumerate()
        .map(|(point_index, outcome)| match (outcome, policy) {
            (Ok(value), _) => Ok(Some(value)),
            (Err(source), SweepPolicy::Abort) => Err(SweepError::ComputationFailed {
                point_index,
                source,
            }),
            (Err(source), SweepPolicy::Skip) => {
                tracing::warn!(point_index, error = %source, "skipping sweep point");
                Ok(None)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: AtmosphereModel = AtmosphereModel;

    #[test]
    fn altitude_sweep_densities_decrease() {
        let z = [0.0, 1_500.0, 3_000.0, 4_500.0, 10_000.0];
        let result = execute_altitude_sweep(&MODEL, &z, SweepPolicy::Abort).unwrap();
        assert_eq!(result.num_successful, 5);
        assert_eq!(result.num_failed, 0);
        let rho = result.density_kg_m3();
        assert!(rho.windows(2).all(|w| w[0] > w[1]), "{rho:?}");
        assert!((rho[0] - 1.225).abs() < 1e-12);
    }

    #[test]
    fn abort_policy_reports_first_failure() {
        let z = [0.0, 90_000.0, 100_000.0];
        let err = execute_altitude_sweep(&MODEL, &z, SweepPolicy::Abort).unwrap_err();
        match err {
            SweepError::ComputationFailed {
                point_index,
                source,
            } => {
                assert_eq!(point_index, 1);
                assert_eq!(source.altitude_m(), Some(90_000.0));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn skip_policy_keeps_order() {
        let z = [0.0, 90_000.0, 5_000.0];
        let result = execute_altitude_sweep(&MODEL, &z, SweepPolicy::Skip).unwrap();
        assert_eq!(result.num_successful, 2);
        assert_eq!(result.num_failed, 1);
        assert!(result.states[1].is_none());
        assert_eq!(result.successful_altitudes(), vec![0.0, 5_000.0]);
        assert_eq!(result.temperature_k().len(), 2);
    }

    #[test]
    fn parallel_sweep_matches_sequential() {
        let def = SweepDefinition::linear(SweepVariable::Altitude, -500.0, 85_000.0, 200).unwrap();
        let z = def.generate_points();
        let seq = execute_altitude_sweep(&MODEL, &z, SweepPolicy::Skip).unwrap();
        let par = execute_altitude_sweep_par(&MODEL, &z, SweepPolicy::Skip).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn defined_sweep_checks_variable() {
        let def = SweepDefinition::linear(SweepVariable::Speed, 10.0, 50.0, 5).unwrap();
        let err = execute_defined_altitude_sweep(&MODEL, &def, SweepPolicy::Abort).unwrap_err();
        assert!(matches!(err, SweepError::InvalidConfiguration(_)));
    }

    #[test]
    fn speed_sweep_mach_is_linear() {
        let def = SweepDefinition::stepped(SweepVariable::Speed, 10.0, 50.0, 5.0).unwrap();
        let conditions = execute_defined_speed_sweep(&MODEL, 1_500.0, &def, None).unwrap();
        assert_eq!(conditions.len(), 8);
        let a = MODEL.evaluate(1_500.0).unwrap().sound_speed();
        for c in &conditions {
            assert!((c.mach * a - c.speed_mps).abs() < 1e-9);
            assert!(c.reynolds.is_none());
        }
    }

    #[test]
    fn speed_sweep_out_of_domain_altitude_fails() {
        let err = execute_speed_sweep(&MODEL, 95_000.0, &[10.0], None).unwrap_err();
        assert!(matches!(err, SweepError::ComputationFailed { .. }));
    }

    #[test]
    fn paired_sweep_computes_reynolds() {
        let z = [0.0, 1_500.0, 3_000.0, 4_500.0, 10_000.0];
        let u = [30.0, 35.0, 40.0, 45.0, 50.0];
        let conditions =
            execute_paired_sweep(&MODEL, &z, &u, Some(0.2), SweepPolicy::Abort).unwrap();
        assert_eq!(conditions.len(), 5);
        let first = conditions[0].unwrap();
        let expected = MODEL.evaluate(0.0).unwrap().reynolds(0.2, 30.0).unwrap();
        assert_eq!(first.reynolds, Some(expected));
    }

    #[test]
    fn paired_sweep_rejects_mismatched_inputs() {
        let err =
            execute_paired_sweep(&MODEL, &[0.0, 1.0], &[10.0], None, SweepPolicy::Abort)
                .unwrap_err();
        assert_eq!(
            err,
            SweepError::LengthMismatch {
                altitudes: 2,
                speeds: 1
            }
        );
    }

    #[test]
    fn paired_sweep_rejects_bad_length_upfront() {
        let err = execute_paired_sweep(&MODEL, &[0.0], &[10.0], Some(0.0), SweepPolicy::Skip)
            .unwrap_err();
        assert!(matches!(err, SweepError::InvalidConfiguration(_)));
    }
}
