//! Segment table of the 1976 Standard Atmosphere.
//!
//! The model is seven contiguous bands ordered by geopotential altitude. Each
//! band is either a gradient layer (temperature linear in H, power-law pressure)
//! or an isothermal layer (constant temperature, exponential pressure).
//!
//! Lookup walks [`SEGMENTS`] in order and takes the first band whose top lies
//! above H. The first band has no lower bound, so negative altitudes extrapolate
//! the troposphere. Nothing matches at or above [`GEOPOTENTIAL_CEILING_KM`].
//!
//! Base pressures are the 5-significant-figure values of the reference model.
//! Adjacent bands agree at their shared boundary to that precision and must not
//! be "corrected".

use std::fmt;

use crate::constants::{EARTH_RADIUS_KM, GEOPOTENTIAL_CEILING_KM, K_HYDROSTATIC, M_PER_KM};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometric altitude [m] to geopotential altitude [km].
///
/// ```text
/// H = z / (1 + z / r0)     (z, r0 in km)
/// ```
#[inline]
pub fn geopotential_km(altitude_m: f64) -> f64 {
    let z_km = altitude_m / M_PER_KM;
    z_km / (1.0 + z_km / EARTH_RADIUS_KM)
}

/// Inverse of [`geopotential_km`]: geopotential [km] back to geometric altitude [m].
#[inline]
pub fn geometric_altitude_m(geopotential_km: f64) -> f64 {
    M_PER_KM * geopotential_km / (1.0 - geopotential_km / EARTH_RADIUS_KM)
}

/// Geometric altitude [m] at which the model ends (≈ 86 km).
pub fn ceiling_altitude_m() -> f64 {
    geometric_altitude_m(GEOPOTENTIAL_CEILING_KM)
}

/// Temperature law of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layer {
    /// T = T_b + lapse·(H − H_b), P = P_b·(T_b / T)^(K / lapse)
    Gradient { lapse_k_per_km: f64 },
    /// T = T_b, P = P_b·exp(−K·(H − H_b) / T_b)
    Isothermal,
}

/// Identifies one of the seven bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Band {
    Troposphere,
    Tropopause,
    LowerStratosphere,
    UpperStratosphere,
    Stratopause,
    LowerMesosphere,
    UpperMesosphere,
}

impl Band {
    pub const ALL: [Band; 7] = [
        Band::Troposphere,
        Band::Tropopause,
        Band::LowerStratosphere,
        Band::UpperStratosphere,
        Band::Stratopause,
        Band::LowerMesosphere,
        Band::UpperMesosphere,
    ];

    /// Position in [`SEGMENTS`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn segment(self) -> &'static Segment {
        &SEGMENTS[self.index()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Troposphere => "troposphere",
            Self::Tropopause => "tropopause",
            Self::LowerStratosphere => "stratosphere I",
            Self::UpperStratosphere => "stratosphere II",
            Self::Stratopause => "stratopause",
            Self::LowerMesosphere => "mesosphere I",
            Self::UpperMesosphere => "mesosphere II",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One band of the model with its boundary conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub band: Band,
    /// Geopotential altitude of the band base [km]
    pub base_km: f64,
    /// Geopotential altitude of the band top [km], exclusive
    pub top_km: f64,
    /// Temperature at the base [K]
    pub base_temperature_k: f64,
    /// Pressure ratio P/P_sl at the base
    pub base_pressure_ratio: f64,
    pub layer: Layer,
}

impl Segment {
    /// Temperature [K] at geopotential altitude `h_km`.
    #[inline]
    pub fn temperature_k(&self, h_km: f64) -> f64 {
        match self.layer {
            Layer::Gradient { lapse_k_per_km } => {
                self.base_temperature_k + lapse_k_per_km * (h_km - self.base_km)
            }
            Layer::Isothermal => self.base_temperature_k,
        }
    }

    /// Pressure ratio at `h_km`, given the band temperature `t_k` at that altitude.
    #[inline]
    pub fn pressure_ratio(&self, h_km: f64, t_k: f64) -> f64 {
        match self.layer {
            Layer::Gradient { lapse_k_per_km } => {
                self.base_pressure_ratio
                    * (self.base_temperature_k / t_k).powf(K_HYDROSTATIC / lapse_k_per_km)
            }
            Layer::Isothermal => {
                self.base_pressure_ratio
                    * (-K_HYDROSTATIC * (h_km - self.base_km) / self.base_temperature_k).exp()
            }
        }
    }

    /// (temperature [K], pressure ratio) at `h_km`, ignoring band limits.
    #[inline]
    pub fn evaluate(&self, h_km: f64) -> (f64, f64) {
        let t = self.temperature_k(h_km);
        (t, self.pressure_ratio(h_km, t))
    }
}

/// The seven bands, ordered by increasing geopotential altitude.
pub const SEGMENTS: [Segment; 7] = [
    Segment {
        band: Band::Troposphere,
        base_km: 0.0,
        top_km: 11.0,
        base_temperature_k: 288.15,
        base_pressure_ratio: 1.0,
        layer: Layer::Gradient {
            lapse_k_per_km: -6.5,
        },
    },
    Segment {
        band: Band::Tropopause,
        base_km: 11.0,
        top_km: 20.0,
        base_temperature_k: 216.65,
        base_pressure_ratio: 0.22336,
        layer: Layer::Isothermal,
    },
    Segment {
        band: Band::LowerStratosphere,
        base_km: 20.0,
        top_km: 32.0,
        base_temperature_k: 216.65,
        base_pressure_ratio: 0.054032,
        layer: Layer::Gradient {
            lapse_k_per_km: 1.0,
        },
    },
    Segment {
        band: Band::UpperStratosphere,
        base_km: 32.0,
        top_km: 47.0,
        base_temperature_k: 228.65,
        base_pressure_ratio: 0.0085666,
        layer: Layer::Gradient {
            lapse_k_per_km: 2.8,
        },
    },
    Segment {
        band: Band::Stratopause,
        base_km: 47.0,
        top_km: 51.0,
        base_temperature_k: 270.65,
        base_pressure_ratio: 0.0010945,
        layer: Layer::Isothermal,
    },
    Segment {
        band: Band::LowerMesosphere,
        base_km: 51.0,
        top_km: 71.0,
        base_temperature_k: 270.65,
        base_pressure_ratio: 0.00066063,
        layer: Layer::Gradient {
            lapse_k_per_km: -2.8,
        },
    },
    Segment {
        band: Band::UpperMesosphere,
        base_km: 71.0,
        top_km: GEOPOTENTIAL_CEILING_KM,
        base_temperature_k: 214.65,
        base_pressure_ratio: 3.9046e-5,
        layer: Layer::Gradient {
            lapse_k_per_km: -2.0,
        },
    },
];

/// First band whose top lies above `h_km`; `None` at/above the ceiling or for NaN.
pub fn find_segment(h_km: f64) -> Option<&'static Segment> {
    SEGMENTS.iter().find(|seg| h_km < seg.top_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_contiguous_and_ordered() {
        for pair in SEGMENTS.windows(2) {
            assert_eq!(pair[0].top_km, pair[1].base_km);
            assert!(pair[0].base_km < pair[0].top_km);
        }
        assert_eq!(SEGMENTS[6].top_km, GEOPOTENTIAL_CEILING_KM);
    }

    #[test]
    fn band_index_matches_table_position() {
        for (i, band) in Band::ALL.iter().enumerate() {
            assert_eq!(band.index(), i);
            assert_eq!(band.segment().band, *band);
        }
    }

    #[test]
    fn lookup_uses_exclusive_tops() {
        assert_eq!(find_segment(0.0).map(|s| s.band), Some(Band::Troposphere));
        assert_eq!(find_segment(10.999).map(|s| s.band), Some(Band::Troposphere));
        assert_eq!(find_segment(11.0).map(|s| s.band), Some(Band::Tropopause));
        assert_eq!(find_segment(20.0).map(|s| s.band), Some(Band::LowerStratosphere));
        assert_eq!(find_segment(32.0).map(|s| s.band), Some(Band::UpperStratosphere));
        assert_eq!(find_segment(47.0).map(|s| s.band), Some(Band::Stratopause));
        assert_eq!(find_segment(51.0).map(|s| s.band), Some(Band::LowerMesosphere));
        assert_eq!(find_segment(71.0).map(|s| s.band), Some(Band::UpperMesosphere));
        assert_eq!(find_segment(84.851).map(|s| s.band), Some(Band::UpperMesosphere));
        assert!(find_segment(84.852).is_none());
        assert!(find_segment(f64::NAN).is_none());
    }

    #[test]
    fn negative_geopotential_falls_in_troposphere() {
        let seg = find_segment(-0.5).unwrap();
        assert_eq!(seg.band, Band::Troposphere);
        let (t, p) = seg.evaluate(-0.5);
        assert!((t - 291.4).abs() < 1e-9);
        assert!(p > 1.0);
    }

    #[test]
    fn sea_level_is_reference() {
        let (t, p) = SEGMENTS[0].evaluate(0.0);
        assert_eq!(t, 288.15);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn gradient_form_matches_tabulated_formulas() {
        let k = K_HYDROSTATIC;
        let h: f64 = 60.0;
        let t = 270.65 - 2.8 * (h - 51.0);
        let expected = 0.00066063 * (270.65 / t).powf(-k / 2.8);
        let (t_seg, p_seg) = Band::LowerMesosphere.segment().evaluate(h);
        assert!((t_seg - t).abs() < 1e-12);
        assert!((p_seg - expected).abs() / expected < 1e-12);

        let h: f64 = 25.0;
        let t = 216.65 + (h - 20.0);
        let expected = 0.054032 * (216.65 / t).powf(k);
        let (_, p_seg) = Band::LowerStratosphere.segment().evaluate(h);
        assert!((p_seg - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn isothermal_form_matches_tabulated_formula() {
        let h: f64 = 15.0;
        let expected = 0.22336 * (-K_HYDROSTATIC * (h - 11.0) / 216.65).exp();
        let (t, p) = Band::Tropopause.segment().evaluate(h);
        assert_eq!(t, 216.65);
        assert!((p - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn geopotential_round_trip_at_ceiling() {
        let z = ceiling_altitude_m();
        assert!((z - 85_999.95).abs() < 0.1, "z = {z}");
        assert!((geopotential_km(z) - GEOPOTENTIAL_CEILING_KM).abs() < 1e-9);
    }
}
