//! Display formatting for canonical gram values.
//!
//! The summary-card format is fixed: pounds, dropping to ounces for very
//! light values. The unit-aware [`format_weight`] is kept for callers that
//! still honor a stored display preference; new surfaces should use
//! [`format_weight_for_display`].

use crate::models::WaterSpec;
use crate::units::{from_grams, WeightUnit, GRAMS_PER_LB};

/// The caller-supplied display preference for [`format_weight`].
///
/// The product stores this per user; it is passed in explicitly rather than
/// read from ambient state. The stored-preference fallback is pounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitPreference {
    Auto,
    Unit(WeightUnit),
}

impl Default for UnitPreference {
    fn default() -> Self {
        UnitPreference::Unit(WeightUnit::Lb)
    }
}

impl UnitPreference {
    /// Lenient mapping from a stored preference label. Missing labels fall
    /// back to pounds, `"auto"` selects automatic unit choice, and anything
    /// else resolves like a weight-unit label.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_lowercase()) {
            None => UnitPreference::default(),
            Some(l) if l == "auto" => UnitPreference::Auto,
            Some(l) => UnitPreference::Unit(WeightUnit::from_label(Some(l.as_str()))),
        }
    }
}

/// Canonical summary format, independent of any user preference.
///
/// Zero (or dirty) input renders as `"0 lb"`; weights under 0.1 lb render in
/// ounces to one decimal; everything else in pounds to one decimal.
pub fn format_weight_for_display(grams: f64) -> String {
    if grams == 0.0 || !grams.is_finite() {
        return "0 lb".to_string();
    }

    let lbs = grams / GRAMS_PER_LB;
    if lbs < 0.1 {
        format!("{:.1} oz", from_grams(grams, WeightUnit::Oz))
    } else {
        format!("{lbs:.1} lb")
    }
}

/// Unit-aware formatter honoring a caller-supplied preference.
///
/// `Auto` shows ounces under one pound and pounds otherwise. Fixed units
/// format to one decimal, except grams (rounded to an integer) and
/// kilograms (two decimals).
pub fn format_weight(grams: f64, preference: UnitPreference) -> String {
    if grams == 0.0 || !grams.is_finite() {
        return "0 oz".to_string();
    }

    let unit = match preference {
        UnitPreference::Auto => {
            let lbs = grams / GRAMS_PER_LB;
            if lbs < 1.0 {
                WeightUnit::Oz
            } else {
                WeightUnit::Lb
            }
        }
        UnitPreference::Unit(unit) => unit,
    };

    let value = from_grams(grams, unit);
    match unit {
        WeightUnit::Oz => format!("{value:.1} oz"),
        WeightUnit::Lb => format!("{value:.1} lb"),
        WeightUnit::G => format!("{} g", value.round() as i64),
        WeightUnit::Kg => format!("{value:.2} kg"),
    }
}

/// Carried-water volume in its display unit, e.g. `"2.0L"` or `"67.6fl oz"`.
/// No stored volume renders as `"0L"`.
pub fn format_water_volume(water: &WaterSpec) -> String {
    if water.volume_liters <= 0.0 || !water.volume_liters.is_finite() {
        return "0L".to_string();
    }
    format!("{:.1}{}", water.display_volume(), water.display_unit.label())
}
