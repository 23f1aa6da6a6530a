use crate::units::types::Unit;
use serde::Serialize;

/// One capacitance expressed in all four units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub nano: f64,
    pub pico: f64,
    pub micro: f64,
    pub milli: f64,
}

impl Conversion {
    pub fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Nano => self.nano,
            Unit::Pico => self.pico,
            Unit::Micro => self.micro,
            Unit::Milli => self.milli,
        }
    }

    /// (unit, value) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        Unit::ALL.into_iter().map(move |u| (u, self.get(u)))
    }
}

/// Convert `value` given in `unit` into all four units.
///
/// Total over every f64, including zero, negatives and non-finite values.
/// The entry for `unit` itself is `value` unchanged. Each ratio is applied as a
/// single multiply or divide by a power of a thousand, so whole numbers convert
/// without drift. No rounding happens here.
pub fn convert(value: f64, unit: Unit) -> Conversion {
    match unit {
        Unit::Nano => Conversion {
            nano: value,
            pico: value * 1e3,
            micro: value / 1e3,
            milli: value / 1e6,
        },
        Unit::Pico => Conversion {
            nano: value / 1e3,
            pico: value,
            micro: value / 1e6,
            milli: value / 1e9,
        },
        Unit::Micro => Conversion {
            nano: value * 1e3,
            pico: value * 1e6,
            micro: value,
            milli: value / 1e3,
        },
        Unit::Milli => Conversion {
            nano: value * 1e6,
            pico: value * 1e9,
            micro: value * 1e3,
            milli: value,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
    }

    #[test]
    fn test_source_unit_is_identity() {
        for unit in Unit::ALL {
            assert_eq!(convert(4.7, unit).get(unit), 4.7);
        }
    }

    #[test]
    fn test_nano_scenario() {
        let c = convert(1000.0, Unit::Nano);
        assert_eq!(c.pico, 1_000_000.0);
        assert_eq!(c.micro, 1.0);
        assert_eq!(c.milli, 0.001);
    }

    #[test]
    fn test_micro_scenario() {
        let c = convert(2.5, Unit::Micro);
        assert_eq!(c.nano, 2500.0);
        assert_eq!(c.pico, 2_500_000.0);
        assert_eq!(c.milli, 0.0025);
    }

    #[test]
    fn test_ratios_match_factor_table() {
        for from in Unit::ALL {
            let c = convert(1.0, from);
            for to in Unit::ALL {
                let expected = from.factor_to_nano() / to.factor_to_nano();
                assert!(
                    close(c.get(to), expected),
                    "1 {} -> {}: got {}, expected {}",
                    from,
                    to,
                    c.get(to),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_negative_and_non_finite_pass_through() {
        let c = convert(-3.0, Unit::Nano);
        assert_eq!(c.pico, -3000.0);

        let c = convert(f64::INFINITY, Unit::Pico);
        assert_eq!(c.milli, f64::INFINITY);

        let c = convert(f64::NAN, Unit::Micro);
        assert!(c.nano.is_nan());
    }

    #[test]
    fn test_iter_is_field_order() {
        let units: Vec<Unit> = convert(1.0, Unit::Milli).iter().map(|(u, _)| u).collect();
        assert_eq!(units, Unit::ALL.to_vec());
    }

    proptest! {
        #[test]
        fn prop_round_trip_between_units(v in -1e12f64..1e12, a in 0usize..4, b in 0usize..4) {
            let (from, to) = (Unit::ALL[a], Unit::ALL[b]);
            let there = convert(v, from).get(to);
            let back = convert(there, to).get(from);
            prop_assert!(close(back, v), "{} {} -> {} {} -> {}", v, from, there, to, back);
        }

        #[test]
        fn prop_milli_scale(v in 0f64..1e9) {
            let c = convert(v, Unit::Milli);
            prop_assert_eq!(c.pico, v * 1e9);
            prop_assert_eq!(c.micro, v * 1e3);
            prop_assert_eq!(c.nano, v * 1e6);
        }
    }
}
