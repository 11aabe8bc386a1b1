//! Stateless compute core for trip pack weight aggregation.
//!
//! Converts heterogeneous gear records (quantities, unit systems, worn and
//! consumable flags) plus carried water into a canonical gram-based weight
//! model, with per-category breakdowns and display formatting. All inputs
//! are plain data structures - no database or storage dependencies - and
//! every function is pure and total: identical inputs give identical
//! outputs, and dirty records degrade to zero contributions rather than
//! erroring.
//!
//! # Example
//!
//! ```
//! use packlist_compute::{GearItem, TripItemEntry, WeightBreakdown, WeightUnit};
//!
//! let entries = vec![TripItemEntry {
//!     item: Some(GearItem {
//!         weight: Some(2.0),
//!         weight_unit: WeightUnit::Lb,
//!         category_id: None,
//!     }),
//!     quantity: Some(1.0),
//!     is_worn: false,
//!     is_consumable: false,
//! }];
//!
//! // one 2 lb item plus a liter of carried water
//! let breakdown = WeightBreakdown::compute(&entries, 1.0);
//! assert!((breakdown.total_g - (907.184 + 1000.0)).abs() < 1e-6);
//! assert!((breakdown.base_g - 907.184).abs() < 1e-6);
//! ```

pub mod colors;
pub mod display;
pub mod error;
pub mod models;
pub mod units;
pub mod weights;

pub use display::{
    format_water_volume, format_weight, format_weight_for_display, UnitPreference,
};
pub use error::UnitError;
pub use models::{Category, CategoryId, GearItem, TripItemEntry, WaterSpec};
pub use units::{
    fl_oz_to_liters, from_grams, liters_to_fl_oz, to_grams, water_weight_grams, VolumeUnit,
    WeightUnit,
};
pub use weights::{weight_by_category, BucketKey, CategoryBucket, WeightBreakdown};
