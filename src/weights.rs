//! Trip weight aggregation.
//!
//! This module provides pure functions to compute weight breakdowns from trip
//! pack lists. All inputs are plain data structures - no database or storage
//! dependencies - and all outputs are canonical gram values. Every call
//! recomputes from scratch; pack lists are bounded by a user's personal gear
//! inventory, so there is nothing worth caching.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::colors::{UNCATEGORIZED_COLOR, WATER_CATEGORY_COLOR};
use crate::models::{Category, CategoryId, TripItemEntry};
use crate::units::water_weight_grams;

/// Per-trip weight decomposition, all values in grams.
///
/// `total = base + worn + consumable` and `consumable = consumable_items +
/// water` hold by construction, the empty pack list included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WeightBreakdown {
    pub total_g: f64,
    pub base_g: f64,
    pub worn_g: f64,
    pub consumable_g: f64,
    pub consumable_items_g: f64,
    pub water_g: f64,
}

impl WeightBreakdown {
    /// Compute the breakdown for a pack list plus carried water.
    ///
    /// Entries with a missing item or an empty/zero weight are skipped
    /// entirely. The worn and consumable flags are independent: an entry
    /// flagged both lands in both subtotals while counting once toward
    /// total, which can pull base negative. That matches the product's
    /// live behavior (see DESIGN.md) and is reproduced deliberately.
    pub fn compute(entries: &[TripItemEntry], water_volume_liters: f64) -> Self {
        let water_g = water_weight_grams(water_volume_liters);

        if entries.is_empty() {
            return WeightBreakdown {
                total_g: water_g,
                base_g: 0.0,
                worn_g: 0.0,
                consumable_g: water_g,
                consumable_items_g: 0.0,
                water_g,
            };
        }

        let mut total_g = 0.0;
        let mut worn_g = 0.0;
        let mut consumable_items_g = 0.0;

        for entry in entries {
            let Some(grams) = entry.item.as_ref().and_then(|item| item.weight_grams()) else {
                continue;
            };
            let item_total = grams * entry.effective_quantity();

            total_g += item_total;

            if entry.is_worn {
                worn_g += item_total;
            }
            if entry.is_consumable {
                consumable_items_g += item_total;
            }
        }

        total_g += water_g;
        let consumable_g = consumable_items_g + water_g;
        let base_g = total_g - worn_g - consumable_g;

        WeightBreakdown {
            total_g,
            base_g,
            worn_g,
            consumable_g,
            consumable_items_g,
            water_g,
        }
    }
}

/// Key identifying a bucket in the per-category breakdown.
///
/// Carried water is a reserved synthetic bucket. Real category ids come from
/// an external id space, so `CarriedWater` can never collide with a user
/// category - including one literally named "Water".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Category(CategoryId),
    Uncategorized,
    CarriedWater,
}

impl BucketKey {
    /// Stable string key for chart and list consumers.
    pub fn slug(&self) -> &str {
        match self {
            BucketKey::Category(id) => id.0.as_str(),
            BucketKey::Uncategorized => "uncategorized",
            BucketKey::CarriedWater => "carried-water",
        }
    }
}

impl Serialize for BucketKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

/// One slice of the per-category weight distribution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub key: BucketKey,
    /// Resolved category name, or "Uncategorized" when the lookup fails.
    pub label: String,
    /// Display hex color for the bucket.
    pub color: String,
    pub weight_g: f64,
    /// Share of the trip's total weight, 0-100.
    pub percentage: f64,
}

/// Aggregate a pack list into per-category weights with percentages.
///
/// Returns an empty vec when the total weight (water included) is zero.
/// Buckets are sorted heaviest first; that ordering is a display contract
/// relied on by list views and chart legends, and equal weights keep their
/// first-seen order.
pub fn weight_by_category(
    entries: &[TripItemEntry],
    categories: &HashMap<CategoryId, Category>,
    water_volume_liters: f64,
) -> Vec<CategoryBucket> {
    // Accumulate in first-seen order so the stable sort below preserves
    // iteration order between equal-weight buckets.
    let mut buckets: Vec<(BucketKey, f64)> = Vec::new();
    let mut total_g = 0.0;

    for entry in entries {
        let Some(item) = entry.item.as_ref() else {
            continue;
        };
        let Some(grams) = item.weight_grams() else {
            continue;
        };
        let item_total = grams * entry.effective_quantity();

        total_g += item_total;

        let key = match &item.category_id {
            Some(id) => BucketKey::Category(id.clone()),
            None => BucketKey::Uncategorized,
        };
        if let Some(bucket) = buckets.iter_mut().find(|(k, _)| *k == key) {
            bucket.1 += item_total;
        } else {
            buckets.push((key, item_total));
        }
    }

    let water_g = water_weight_grams(water_volume_liters);
    if water_g > 0.0 {
        total_g += water_g;
        buckets.push((BucketKey::CarriedWater, water_g));
    }

    if total_g == 0.0 {
        return Vec::new();
    }

    let mut out: Vec<CategoryBucket> = buckets
        .into_iter()
        .map(|(key, weight_g)| {
            let (label, color) = match &key {
                BucketKey::CarriedWater => (
                    "Carried Water".to_string(),
                    WATER_CATEGORY_COLOR.to_string(),
                ),
                BucketKey::Uncategorized => (
                    "Uncategorized".to_string(),
                    UNCATEGORIZED_COLOR.to_string(),
                ),
                BucketKey::Category(id) => match categories.get(id) {
                    Some(category) => (category.name.clone(), category.color.clone()),
                    None => (
                        "Uncategorized".to_string(),
                        UNCATEGORIZED_COLOR.to_string(),
                    ),
                },
            };
            CategoryBucket {
                key,
                label,
                color,
                weight_g,
                percentage: weight_g / total_g * 100.0,
            }
        })
        .collect();

    out.sort_by(|a, b| {
        b.weight_g
            .partial_cmp(&a.weight_g)
            .unwrap_or(Ordering::Equal)
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GearItem;
    use crate::units::WeightUnit;

    fn entry(
        weight: Option<f64>,
        unit: WeightUnit,
        quantity: f64,
        is_worn: bool,
        is_consumable: bool,
        category: Option<&str>,
    ) -> TripItemEntry {
        TripItemEntry {
            item: Some(GearItem {
                weight,
                weight_unit: unit,
                category_id: category.map(|c| CategoryId(c.to_string())),
            }),
            quantity: Some(quantity),
            is_worn,
            is_consumable,
        }
    }

    fn category(id: &str, name: &str, color: &str) -> (CategoryId, Category) {
        (
            CategoryId(id.to_string()),
            Category {
                id: CategoryId(id.to_string()),
                name: name.to_string(),
                color: color.to_string(),
            },
        )
    }

    fn assert_decomposition(b: &WeightBreakdown) {
        assert!(
            (b.total_g - (b.base_g + b.worn_g + b.consumable_g)).abs() < 1e-9,
            "decomposition broken: {b:?}"
        );
        assert!((b.consumable_g - (b.consumable_items_g + b.water_g)).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_three_items_with_water() {
        // 2 lb tent, 8 oz worn jacket, 3x 4 oz consumable snack bars, 2 L water
        let entries = vec![
            entry(Some(2.0), WeightUnit::Lb, 1.0, false, false, Some("shelter")),
            entry(Some(8.0), WeightUnit::Oz, 1.0, true, false, Some("clothing")),
            entry(Some(4.0), WeightUnit::Oz, 3.0, false, true, Some("food")),
        ];

        let b = WeightBreakdown::compute(&entries, 2.0);

        let tent = 2.0 * 453.592;
        let jacket = 8.0 * 28.3495;
        let snacks = 4.0 * 28.3495 * 3.0;

        assert!((b.total_g - (tent + jacket + snacks + 2000.0)).abs() < 1e-6);
        assert!((b.worn_g - jacket).abs() < 1e-6);
        assert!((b.consumable_items_g - snacks).abs() < 1e-6);
        assert!((b.water_g - 2000.0).abs() < 1e-9);
        assert!((b.consumable_g - (snacks + 2000.0)).abs() < 1e-6);
        assert!((b.base_g - tent).abs() < 1e-6);
        assert_decomposition(&b);
    }

    #[test]
    fn test_breakdown_empty_list() {
        let b = WeightBreakdown::compute(&[], 0.0);
        assert_eq!(b, WeightBreakdown::default());
        assert_decomposition(&b);
    }

    #[test]
    fn test_breakdown_empty_list_with_water() {
        let b = WeightBreakdown::compute(&[], 1.5);
        assert!((b.total_g - 1500.0).abs() < 1e-9);
        assert_eq!(b.base_g, 0.0);
        assert_eq!(b.worn_g, 0.0);
        assert!((b.consumable_g - 1500.0).abs() < 1e-9);
        assert_eq!(b.consumable_items_g, 0.0);
        assert_decomposition(&b);
    }

    #[test]
    fn test_breakdown_skips_incomplete_entries() {
        let entries = vec![
            TripItemEntry {
                item: None,
                quantity: Some(5.0),
                is_worn: false,
                is_consumable: false,
            },
            entry(None, WeightUnit::Oz, 1.0, false, false, None),
            entry(Some(0.0), WeightUnit::Kg, 2.0, true, true, None),
            entry(Some(100.0), WeightUnit::G, 1.0, false, false, None),
        ];

        let b = WeightBreakdown::compute(&entries, 0.0);
        assert!((b.total_g - 100.0).abs() < 1e-9);
        assert_eq!(b.worn_g, 0.0);
        assert_eq!(b.consumable_items_g, 0.0);
        assert!(b.total_g.is_finite() && b.base_g.is_finite());
        assert_decomposition(&b);
    }

    #[test]
    fn test_breakdown_nan_weight_contributes_nothing() {
        let entries = vec![entry(Some(f64::NAN), WeightUnit::Oz, 2.0, true, true, None)];
        let b = WeightBreakdown::compute(&entries, 0.0);
        assert_eq!(b, WeightBreakdown::default());
    }

    #[test]
    fn test_breakdown_worn_and_consumable_both_flagged() {
        // Flagged both ways, the item lands in both subtotals while counting
        // once toward total, so base goes negative by its weight.
        let entries = vec![entry(Some(500.0), WeightUnit::G, 1.0, true, true, None)];
        let b = WeightBreakdown::compute(&entries, 0.0);

        assert!((b.total_g - 500.0).abs() < 1e-9);
        assert!((b.worn_g - 500.0).abs() < 1e-9);
        assert!((b.consumable_g - 500.0).abs() < 1e-9);
        assert!((b.base_g - (-500.0)).abs() < 1e-9);
        assert_decomposition(&b);
    }

    #[test]
    fn test_breakdown_quantity_multiplies() {
        let entries = vec![entry(Some(1.0), WeightUnit::Kg, 4.0, false, false, None)];
        let b = WeightBreakdown::compute(&entries, 0.0);
        assert!((b.total_g - 4000.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_breakdown_basic() {
        let categories: HashMap<_, _> = [
            category("shelter", "Shelter", "#FF0000"),
            category("food", "Food", "#FFD300"),
        ]
        .into_iter()
        .collect();

        let entries = vec![
            entry(Some(100.0), WeightUnit::G, 1.0, false, false, Some("food")),
            entry(Some(1.0), WeightUnit::Kg, 1.0, false, false, Some("shelter")),
            entry(Some(300.0), WeightUnit::G, 1.0, false, false, None),
            entry(Some(200.0), WeightUnit::G, 1.0, false, true, Some("food")),
        ];

        let buckets = weight_by_category(&entries, &categories, 0.0);
        assert_eq!(buckets.len(), 3);

        // heaviest first; the 300 g tie keeps first-seen order (food before
        // uncategorized)
        assert_eq!(buckets[0].label, "Shelter");
        assert!((buckets[0].weight_g - 1000.0).abs() < 1e-9);
        assert_eq!(buckets[1].label, "Food");
        assert!((buckets[1].weight_g - 300.0).abs() < 1e-9);
        assert_eq!(buckets[2].label, "Uncategorized");
        assert_eq!(buckets[2].color, UNCATEGORIZED_COLOR);

        let pct_sum: f64 = buckets.iter().map(|b| b.percentage).sum();
        assert!((pct_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_category_breakdown_water_is_isolated() {
        // A user category literally named "Water" must stay separate from
        // the synthetic carried-water bucket.
        let categories: HashMap<_, _> =
            [category("cat-water", "Water", "#00CED1")].into_iter().collect();

        let entries = vec![entry(
            Some(500.0),
            WeightUnit::G,
            1.0,
            false,
            false,
            Some("cat-water"),
        )];

        let buckets = weight_by_category(&entries, &categories, 1.0);
        assert_eq!(buckets.len(), 2);

        let carried = buckets
            .iter()
            .find(|b| b.key == BucketKey::CarriedWater)
            .unwrap();
        assert_eq!(carried.key.slug(), "carried-water");
        assert_eq!(carried.label, "Carried Water");
        assert_eq!(carried.color, WATER_CATEGORY_COLOR);
        assert!((carried.weight_g - 1000.0).abs() < 1e-9);

        let gear = buckets
            .iter()
            .find(|b| b.key == BucketKey::Category(CategoryId("cat-water".to_string())))
            .unwrap();
        assert_eq!(gear.label, "Water");
        assert_eq!(gear.color, "#00CED1");
    }

    #[test]
    fn test_category_breakdown_zero_total_is_empty() {
        assert!(weight_by_category(&[], &HashMap::new(), 0.0).is_empty());

        let entries = vec![entry(None, WeightUnit::Oz, 1.0, false, false, Some("x"))];
        assert!(weight_by_category(&entries, &HashMap::new(), 0.0).is_empty());
    }

    #[test]
    fn test_category_breakdown_water_only() {
        let buckets = weight_by_category(&[], &HashMap::new(), 0.75);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].key, BucketKey::CarriedWater);
        assert!((buckets[0].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_breakdown_unknown_id_falls_back() {
        let entries = vec![entry(
            Some(50.0),
            WeightUnit::G,
            1.0,
            false,
            false,
            Some("deleted-category"),
        )];
        let buckets = weight_by_category(&entries, &HashMap::new(), 0.0);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, "Uncategorized");
        assert_eq!(buckets[0].color, UNCATEGORIZED_COLOR);
        // the original id is preserved as the bucket key
        assert_eq!(buckets[0].key.slug(), "deleted-category");
    }

    #[test]
    fn test_category_breakdown_ties_keep_first_seen_order() {
        let categories: HashMap<_, _> = [
            category("a", "Alpha", "#FF0000"),
            category("b", "Beta", "#FFD300"),
        ]
        .into_iter()
        .collect();

        let entries = vec![
            entry(Some(250.0), WeightUnit::G, 1.0, false, false, Some("a")),
            entry(Some(250.0), WeightUnit::G, 1.0, false, false, Some("b")),
        ];

        let buckets = weight_by_category(&entries, &categories, 0.0);
        assert_eq!(buckets[0].label, "Alpha");
        assert_eq!(buckets[1].label, "Beta");
    }
}
