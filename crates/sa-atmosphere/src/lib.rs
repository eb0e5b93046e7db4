//! sa-atmosphere: the 1976 Standard Atmosphere for stdatmo.
//!
//! Provides:
//! - Altitude-to-state evaluation over the seven-band segment table
//! - Derived quantities (density, sound speed, viscosity, dynamic pressure,
//!   Reynolds and Mach numbers)
//! - Unit-typed property snapshots
//! - Altitude / airspeed sweeps and plain-text reports
//!
//! # Example
//!
//! ```
//! use sa_atmosphere::evaluate;
//!
//! let state = evaluate(2850.0).unwrap();
//! let re = state.reynolds(0.305, 10.0).unwrap();
//! println!("T = {:.2} K, Re = {:.3e}", state.temperature(), re);
//! ```

pub mod constants;
pub mod error;
pub mod model;
pub mod properties;
pub mod report;
pub mod segment;
pub mod state;
pub mod sweep_executor;
pub mod sweeps;

// Re-exports for ergonomics
pub use error::{AtmosphereError, AtmosphereResult};
pub use model::{AtmosphereModel, evaluate};
pub use properties::AtmosphericProperties;
pub use segment::{Band, Layer, SEGMENTS, Segment, ceiling_altitude_m, geopotential_km};
pub use state::AtmosphericState;
pub use sweep_executor::{
    FlightCondition, SweepError, SweepPolicy, SweepResult, execute_altitude_sweep,
    execute_altitude_sweep_par, execute_defined_altitude_sweep, execute_defined_speed_sweep,
    execute_paired_sweep, execute_speed_sweep,
};
pub use sweeps::{MAX_SWEEP_POINTS, SweepDefinition, SweepType, SweepVariable};
