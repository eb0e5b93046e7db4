//! Sweep point generation.
//!
//! Produces the ordered lists of altitudes or airspeeds that the sweep executor
//! evaluates. Used for flight-envelope tables and plots.

use std::fmt;

use crate::sweep_executor::SweepError;

/// Upper bound on the points a single sweep may generate.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Independent variable of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SweepVariable {
    /// Geometric altitude [m]
    Altitude,
    /// Airspeed [m/s]
    Speed,
}

impl SweepVariable {
    pub fn label(self) -> &'static str {
        match self {
            Self::Altitude => "Altitude [m]",
            Self::Speed => "Airspeed [m/s]",
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SweepType {
    /// `num_points` uniformly spaced values, both ends included
    Linear { num_points: usize },
    /// `start, start + step, ...` strictly short of `end`
    Stepped { step: f64 },
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepDefinition {
    pub variable: SweepVariable,
    /// Start value in SI units
    pub start: f64,
    /// End value in SI units
    pub end: f64,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Uniform sweep including both bounds.
    pub fn linear(
        variable: SweepVariable,
        start: f64,
        end: f64,
        num_points: usize,
    ) -> Result<Self, SweepError> {
        Self::new(variable, start, end, SweepType::Linear { num_points })
    }

    /// Fixed-step sweep that stops before `end`.
    pub fn stepped(
        variable: SweepVariable,
        start: f64,
        end: f64,
        step: f64,
    ) -> Result<Self, SweepError> {
        Self::new(variable, start, end, SweepType::Stepped { step })
    }

    fn new(
        variable: SweepVariable,
        start: f64,
        end: f64,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "Sweep bounds must be finite".to_string(),
            ));
        }

        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        match sweep_type {
            SweepType::Linear { num_points } if num_points < 2 => {
                return Err(SweepError::InvalidConfiguration(
                    "Sweep must have at least 2 points".to_string(),
                ));
            }
            SweepType::Stepped { step } if !step.is_finite() || step == 0.0 => {
                return Err(SweepError::InvalidConfiguration(
                    "Sweep step must be finite and non-zero".to_string(),
                ));
            }
            SweepType::Stepped { step } if (end - start).signum() != step.signum() => {
                return Err(SweepError::InvalidConfiguration(
                    "Sweep step points away from the end value".to_string(),
                ));
            }
            _ => {}
        }

        let sweep = Self {
            variable,
            start,
            end,
            sweep_type,
        };
        let count = sweep.point_count();
        if count > MAX_SWEEP_POINTS {
            return Err(SweepError::InvalidConfiguration(format!(
                "Sweep would produce {count} points (limit {MAX_SWEEP_POINTS})"
            )));
        }
        Ok(sweep)
    }

    /// Number of points [`generate_points`](Self::generate_points) yields.
    ///
    /// Saturates at `usize::MAX` for step counts that do not fit.
    pub fn point_count(&self) -> usize {
        match self.sweep_type {
            SweepType::Linear { num_points } => num_points,
            SweepType::Stepped { step } => {
                let count = ((self.end - self.start) / step).ceil().max(0.0);
                if count >= usize::MAX as f64 {
                    usize::MAX
                } else {
                    count as usize
                }
            }
        }
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear { num_points } => self.generate_linear(num_points),
            SweepType::Stepped { step } => self.generate_stepped(step),
        }
    }

    fn generate_linear(&self, num_points: usize) -> Vec<f64> {
        if num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (num_points - 1) as f64;
        let mut points: Vec<f64> = (0..num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[num_points - 1] = self.end;
        points
    }

    fn generate_stepped(&self, step: f64) -> Vec<f64> {
        (0..self.point_count()).map(|i| self.start + i as f64 * step).collect()
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear { num_points } => write!(f, "Linear, {} points", num_points),
            Self::Stepped { step } => write!(f, "Stepped by {}", step),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({})",
            self.variable, self.start, self.end, self.sweep_type
        )
    }
}
