//! Record types mirroring the upstream store's loosely-shaped trip and gear
//! data. Optional references are explicit `Option`s rather than
//! presence-checked fields, and deserialization is tolerant of missing or
//! null fields so a half-edited record still aggregates (as zero).

use serde::{Deserialize, Serialize};

use crate::units::{fl_oz_to_liters, liters_to_fl_oz, to_grams, water_weight_grams};
use crate::units::{VolumeUnit, WeightUnit};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

/// A gear inventory item, read-only to this crate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearItem {
    pub weight: Option<f64>,
    pub weight_unit: WeightUnit,
    pub category_id: Option<CategoryId>,
}

impl GearItem {
    /// Recorded weight in grams, or `None` when the weight field is empty,
    /// zero, or not a finite number. A weight cleared mid-edit and a genuine
    /// zero are indistinguishable; both contribute nothing.
    pub(crate) fn weight_grams(&self) -> Option<f64> {
        let w = self.weight?;
        if w == 0.0 || !w.is_finite() {
            return None;
        }
        Some(to_grams(w, self.weight_unit))
    }
}

/// Join record linking a gear item into a trip's pack list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripItemEntry {
    /// Embedded item, absent when the referenced gear row is gone. Entries
    /// without an item are skipped entirely during aggregation.
    pub item: Option<GearItem>,
    pub quantity: Option<f64>,
    /// Worn on the body rather than carried; excluded from base weight.
    pub is_worn: bool,
    /// Used up during the trip (food, fuel); excluded from base weight.
    pub is_consumable: bool,
}

impl TripItemEntry {
    /// Effective quantity multiplier: floored, defaulting to 1 when absent
    /// or below 1.
    pub fn effective_quantity(&self) -> f64 {
        match self.quantity {
            Some(q) if q.is_finite() && q.floor() >= 1.0 => q.floor(),
            _ => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display hex color, e.g. `"#FF8700"`.
    pub color: String,
}

/// Carried water for a trip. The volume is always stored in liters; the
/// display unit is a presentation preference and never changes the stored
/// value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterSpec {
    pub volume_liters: f64,
    pub display_unit: VolumeUnit,
}

impl WaterSpec {
    /// Normalize user input in the given unit to canonical liters.
    pub fn from_input(volume: f64, unit: VolumeUnit) -> Self {
        let volume = if volume.is_finite() && volume > 0.0 {
            volume
        } else {
            0.0
        };
        let volume_liters = match unit {
            VolumeUnit::Liters => volume,
            VolumeUnit::FlOz => fl_oz_to_liters(volume),
        };
        WaterSpec {
            volume_liters,
            display_unit: unit,
        }
    }

    /// Stored volume converted to the display unit.
    pub fn display_volume(&self) -> f64 {
        match self.display_unit {
            VolumeUnit::Liters => {
                if self.volume_liters > 0.0 {
                    self.volume_liters
                } else {
                    0.0
                }
            }
            VolumeUnit::FlOz => liters_to_fl_oz(self.volume_liters),
        }
    }

    /// Mass of the carried water in grams.
    pub fn weight_grams(&self) -> f64 {
        water_weight_grams(self.volume_liters)
    }
}
