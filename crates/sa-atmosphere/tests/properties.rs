//! Property tests over the valid altitude range.

use proptest::prelude::*;
use sa_atmosphere::{ceiling_altitude_m, evaluate};
use sa_core::numeric::relative_difference;

proptest! {
    #[test]
    fn troposphere_temperature_strictly_decreases(
        z1 in 0.0_f64..11_000.0,
        dz in 1.0_f64..11_000.0,
    ) {
        let z2 = (z1 + dz).min(11_000.0);
        prop_assume!(z2 > z1);
        let t1 = evaluate(z1).unwrap().temperature();
        let t2 = evaluate(z2).unwrap().temperature();
        prop_assert!(t1 > t2, "T({z1}) = {t1}, T({z2}) = {t2}");
    }

    #[test]
    fn pressure_strictly_decreases(z1 in -1_000.0_f64..85_000.0, dz in 10.0_f64..5_000.0) {
        let z2 = z1 + dz;
        prop_assume!(z2 < ceiling_altitude_m());
        prop_assert!(evaluate(z1).unwrap().pressure() > evaluate(z2).unwrap().pressure());
    }

    #[test]
    fn mach_times_sound_speed_is_speed(z in -500.0_f64..85_000.0, u in -500.0_f64..3_000.0) {
        let s = evaluate(z).unwrap();
        prop_assert!((s.mach(u) * s.sound_speed() - u).abs() <= 1e-9 * u.abs().max(1.0));
    }

    #[test]
    fn reynolds_is_linear_in_speed(
        z in 0.0_f64..85_000.0,
        length in 0.01_f64..10.0,
        u in 0.1_f64..1_000.0,
    ) {
        let s = evaluate(z).unwrap();
        let re1 = s.reynolds(length, u).unwrap();
        let re2 = s.reynolds(length, 2.0 * u).unwrap();
        prop_assert!(relative_difference(re2, 2.0 * re1) < 1e-12);
    }

    #[test]
    fn states_are_physical(z in -2_000.0_f64..85_999.0) {
        let s = evaluate(z).unwrap();
        prop_assert!(s.temperature() > 0.0);
        prop_assert!(s.pressure() > 0.0);
        prop_assert!(s.density() > 0.0);
        prop_assert!(s.dynamic_viscosity() > 0.0);
        prop_assert!(s.kinematic_viscosity().is_finite());
    }

    #[test]
    fn above_ceiling_always_fails(z in 86_000.0_f64..1.0e6) {
        let err = evaluate(z).unwrap_err();
        prop_assert!(err.is_out_of_domain());
        prop_assert_eq!(err.altitude_m(), Some(z));
    }
}
