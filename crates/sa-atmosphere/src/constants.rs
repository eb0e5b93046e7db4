//! Sea-level reference values and model constants of the 1976 Standard Atmosphere.
//!
//! These are process-wide and read-only; nothing in the crate stores copies of
//! them per state.

/// Sea-level temperature [K]
pub const T_SL_K: f64 = 288.15;

/// Sea-level pressure [Pa]
pub const P_SL_PA: f64 = 101_325.0;

/// Sea-level density [kg/m³]
pub const RHO_SL_KG_M3: f64 = 1.225;

/// Sea-level speed of sound [m/s]
pub const A_SL_MPS: f64 = 340.294;

/// Sutherland coefficient β [kg/(m·s·K^½)]
pub const SUTHERLAND_BETA: f64 = 1.458e-6;

/// Sutherland temperature S [K]
pub const SUTHERLAND_S_K: f64 = 110.4;

/// g0·M/R* expressed per km of geopotential altitude [K/km].
pub const K_HYDROSTATIC: f64 = 34.163195;

/// Effective Earth radius used for the geopotential conversion [km]
pub const EARTH_RADIUS_KM: f64 = 6356.766;

/// Upper limit of the model in geopotential altitude [km] (exclusive).
pub const GEOPOTENTIAL_CEILING_KM: f64 = 84.852;

/// Meters per kilometer
pub const M_PER_KM: f64 = 1000.0;
