//! Unit conversion within a physical category
//!
//! Each category has a table mapping a unit symbol to the factor that converts
//! one of that unit into the category's SI base unit. Exactly one unit per
//! category has factor 1.
//!
//! # Formula
//! ```text
//! converted = value × factor(from) / factor(to)
//! ```

use crate::error::{MechanicsError, Result};
use crate::core_types::validation::finite;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Physical category a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Mass,
    Time,
    Force,
    Energy,
    Velocity,
    Acceleration,
}

const LENGTH_UNITS: &[(&str, f64)] = &[
    ("m", 1.0),
    ("km", 1000.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("ft", 0.3048),
    ("in", 0.0254),
    ("mi", 1609.34),
];

const MASS_UNITS: &[(&str, f64)] = &[
    ("kg", 1.0),
    ("g", 0.001),
    ("t", 1000.0),
    ("lb", 0.453592),
    ("oz", 0.0283495),
];

const TIME_UNITS: &[(&str, f64)] = &[
    ("s", 1.0),
    ("min", 60.0),
    ("h", 3600.0),
    ("day", 86400.0),
    ("yr", 31536000.0),
];

const FORCE_UNITS: &[(&str, f64)] = &[
    ("N", 1.0),
    ("kN", 1000.0),
    ("lbf", 4.44822),
    ("dyn", 1e-5),
];

const ENERGY_UNITS: &[(&str, f64)] = &[
    ("J", 1.0),
    ("kJ", 1000.0),
    ("cal", 4.184),
    ("kcal", 4184.0),
    ("kWh", 3.6e6),
    ("eV", 1.602e-19),
];

const VELOCITY_UNITS: &[(&str, f64)] = &[
    ("m/s", 1.0),
    ("km/h", 0.277778),
    ("mph", 0.44704),
    ("kn", 0.514444),
];

// "gn" is standard gravity, kept distinct from the gram symbol
const ACCELERATION_UNITS: &[(&str, f64)] = &[
    ("m/s²", 1.0),
    ("gn", 9.80665),
    ("ft/s²", 0.3048),
];

impl UnitCategory {
    /// Every category, in display order
    pub const ALL: [UnitCategory; 7] = [
        UnitCategory::Length,
        UnitCategory::Mass,
        UnitCategory::Time,
        UnitCategory::Force,
        UnitCategory::Energy,
        UnitCategory::Velocity,
        UnitCategory::Acceleration,
    ];

    /// Unit symbols and their SI factors, in display order
    #[must_use]
    pub const fn units(&self) -> &'static [(&'static str, f64)] {
        match self {
            Self::Length => LENGTH_UNITS,
            Self::Mass => MASS_UNITS,
            Self::Time => TIME_UNITS,
            Self::Force => FORCE_UNITS,
            Self::Energy => ENERGY_UNITS,
            Self::Velocity => VELOCITY_UNITS,
            Self::Acceleration => ACCELERATION_UNITS,
        }
    }

    /// The SI base unit symbol (the entry with factor 1)
    #[must_use]
    pub fn base_unit(&self) -> &'static str {
        self.units()
            .iter()
            .find(|(_, factor)| *factor == 1.0)
            .map_or("", |(symbol, _)| *symbol)
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Time => "time",
            Self::Force => "force",
            Self::Energy => "energy",
            Self::Velocity => "velocity",
            Self::Acceleration => "acceleration",
        };
        f.write_str(name)
    }
}

type UnitTable = FxHashMap<&'static str, f64>;

static REGISTRY: LazyLock<FxHashMap<UnitCategory, UnitTable>> = LazyLock::new(|| {
    UnitCategory::ALL
        .iter()
        .map(|category| (*category, category.units().iter().copied().collect()))
        .collect()
});

/// SI factor for a unit, or `InvalidUnit` if the category does not list it
pub fn factor(category: UnitCategory, unit: &str) -> Result<f64> {
    REGISTRY
        .get(&category)
        .and_then(|table| table.get(unit))
        .copied()
        .ok_or_else(|| MechanicsError::InvalidUnit {
            category,
            unit: unit.to_owned(),
        })
}

/// Convert `value` from one unit to another within the same category
///
/// # Example
/// ```
/// use mechanics_core::physics::conversion::{convert, UnitCategory};
///
/// let metres = convert(1.0, UnitCategory::Length, "km", "m").unwrap();
/// assert_eq!(metres, 1000.0);
/// ```
pub fn convert(value: f64, category: UnitCategory, from: &str, to: &str) -> Result<f64> {
    let value = finite("value", value)?;
    let from_factor = factor(category, from)?;
    let to_factor = factor(category, to)?;
    let converted = value * (from_factor / to_factor);
    debug!(%category, from, to, value, converted, "unit conversion");
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_base_unit_per_category() {
        for category in UnitCategory::ALL {
            let bases = category
                .units()
                .iter()
                .filter(|(_, factor)| *factor == 1.0)
                .count();
            assert_eq!(bases, 1, "{category} must have exactly one SI base unit");
        }
    }

    #[test]
    fn test_base_units() {
        assert_eq!(UnitCategory::Length.base_unit(), "m");
        assert_eq!(UnitCategory::Energy.base_unit(), "J");
        assert_eq!(UnitCategory::Acceleration.base_unit(), "m/s²");
    }

    #[test]
    fn test_convert_feet_to_metres() {
        let m = convert(10.0, UnitCategory::Length, "ft", "m").unwrap();
        assert!((m - 3.048).abs() < 1e-12);
    }

    #[test]
    fn test_convert_kwh_to_kj() {
        let kj = convert(1.0, UnitCategory::Energy, "kWh", "kJ").unwrap();
        assert!((kj - 3600.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_from_other_category_is_rejected() {
        let err = convert(1.0, UnitCategory::Mass, "m", "kg").unwrap_err();
        assert_eq!(
            err,
            MechanicsError::InvalidUnit {
                category: UnitCategory::Mass,
                unit: "m".to_owned()
            }
        );
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for category in UnitCategory::ALL {
            for (a, _) in category.units() {
                for (b, _) in category.units() {
                    let there = convert(123.456, category, a, b).unwrap();
                    let back = convert(there, category, b, a).unwrap();
                    assert!(
                        ((back - 123.456) / 123.456).abs() < 1e-12,
                        "{category}: {a} -> {b} -> {a} gave {back}"
                    );
                }
            }
        }
    }
}
