//! Unit conversion between mass units and canonical grams.
//!
//! Every weight in the crate is carried internally in grams; these are the
//! only functions that touch unit labels or conversion factors. Conversions
//! are total: non-finite or non-positive inputs degrade to zero instead of
//! erroring, because the callers are display aggregators that must keep
//! rendering over dirty or partially-loaded records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnitError;

pub const GRAMS_PER_OZ: f64 = 28.3495;
pub const GRAMS_PER_LB: f64 = 453.592;
pub const GRAMS_PER_KG: f64 = 1000.0;
/// 1 L of water = 1 kg.
pub const GRAMS_PER_LITER_WATER: f64 = 1000.0;
/// 1 fl oz = 0.02957 L.
pub const LITERS_PER_FL_OZ: f64 = 0.02957;

/// Mass unit attached to a gear item's recorded weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    #[default]
    Oz,
    Lb,
    G,
    Kg,
}

impl WeightUnit {
    /// Lenient mapping for loosely-shaped records: a missing or unrecognized
    /// label falls back to ounces. Use the `FromStr` impl when rejecting bad
    /// input matters (e.g. validating a form submission).
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_lowercase()) {
            Some(l) => match l.as_str() {
                "lb" => WeightUnit::Lb,
                "g" => WeightUnit::G,
                "kg" => WeightUnit::Kg,
                _ => WeightUnit::Oz,
            },
            None => WeightUnit::Oz,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Oz => "oz",
            WeightUnit::Lb => "lb",
            WeightUnit::G => "g",
            WeightUnit::Kg => "kg",
        }
    }

    fn grams_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Oz => GRAMS_PER_OZ,
            WeightUnit::Lb => GRAMS_PER_LB,
            WeightUnit::G => 1.0,
            WeightUnit::Kg => GRAMS_PER_KG,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeightUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oz" => Ok(WeightUnit::Oz),
            "lb" => Ok(WeightUnit::Lb),
            "g" => Ok(WeightUnit::G),
            "kg" => Ok(WeightUnit::Kg),
            _ => Err(UnitError::UnknownWeightUnit(s.to_string())),
        }
    }
}

impl Serialize for WeightUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for WeightUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(WeightUnit::from_label(label.as_deref()))
    }
}

/// Volume unit used to display a trip's carried water. The stored volume is
/// always liters; this only affects presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    #[default]
    Liters,
    FlOz,
}

impl VolumeUnit {
    /// Lenient mapping: anything other than `"fl oz"` displays as liters.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("fl oz") => VolumeUnit::FlOz,
            _ => VolumeUnit::Liters,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VolumeUnit::Liters => "L",
            VolumeUnit::FlOz => "fl oz",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VolumeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" => Ok(VolumeUnit::Liters),
            "fl oz" => Ok(VolumeUnit::FlOz),
            _ => Err(UnitError::UnknownVolumeUnit(s.to_string())),
        }
    }
}

impl Serialize for VolumeUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for VolumeUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(VolumeUnit::from_label(label.as_deref()))
    }
}

/// Convert a weight in the given unit to grams. Non-finite input contributes
/// zero.
pub fn to_grams(weight: f64, unit: WeightUnit) -> f64 {
    if !weight.is_finite() {
        return 0.0;
    }
    weight * unit.grams_per_unit()
}

/// Convert a canonical gram value to the given unit. Zero or non-finite
/// grams returns zero.
pub fn from_grams(grams: f64, unit: WeightUnit) -> f64 {
    if grams == 0.0 || !grams.is_finite() {
        return 0.0;
    }
    grams / unit.grams_per_unit()
}

/// Convert liters to fluid ounces. Non-positive input returns zero.
pub fn liters_to_fl_oz(liters: f64) -> f64 {
    if liters <= 0.0 || !liters.is_finite() {
        return 0.0;
    }
    liters / LITERS_PER_FL_OZ
}

/// Convert fluid ounces to liters. Non-positive input returns zero.
pub fn fl_oz_to_liters(fl_oz: f64) -> f64 {
    if fl_oz <= 0.0 || !fl_oz.is_finite() {
        return 0.0;
    }
    fl_oz * LITERS_PER_FL_OZ
}

/// Weight in grams of a volume of carried water (1 L = 1 kg). Non-positive
/// input returns zero.
pub fn water_weight_grams(volume_liters: f64) -> f64 {
    if volume_liters <= 0.0 || !volume_liters.is_finite() {
        return 0.0;
    }
    volume_liters * GRAMS_PER_LITER_WATER
}
