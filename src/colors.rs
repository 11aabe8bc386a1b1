//! Category color palette and assignment order.

/// Fixed color given to the synthetic carried-water bucket, distinct from any
/// user-defined category color.
pub const WATER_CATEGORY_COLOR: &str = "#147DF5"; // Azure Blue

/// Neutral gray used when a category lookup fails.
pub const UNCATEGORIZED_COLOR: &str = "#6b7280";

pub const CATEGORY_COLORS: [&str; 18] = [
    "#FF0000", // Red
    "#FF8700", // Orange
    "#FFD300", // Gold
    "#DEFF0A", // Lime Yellow
    "#A1FF0A", // Slime Lime
    "#0AFF99", // Spring Green
    "#0AEFFF", // Electric Aqua
    "#147DF5", // Azure Blue
    "#580AFF", // Electric Indigo
    "#BE0AFF", // Hyper Magenta
    "#FF1493", // Deep Pink
    "#FF4500", // Orange Red
    "#32CD32", // Lime Green
    "#00CED1", // Dark Turquoise
    "#4169E1", // Royal Blue
    "#9932CC", // Dark Orchid
    "#DC143C", // Crimson
    "#20B2AA", // Light Sea Green
];

/// Assignment order tuned so consecutively created categories get visually
/// distant colors: the first picks spread across the color wheel, later ones
/// fill in the gaps.
pub const COLOR_ASSIGNMENT_ORDER: [usize; 18] = [
    0,  // Red - warm primary
    8,  // Electric Indigo - cool, opposite spectrum
    5,  // Spring Green - bright green
    10, // Deep Pink - warm pink
    13, // Dark Turquoise - cool teal
    2,  // Gold - warm yellow
    15, // Dark Orchid - cool purple
    12, // Lime Green - bright green variant
    1,  // Orange - warm
    14, // Royal Blue - cool blue
    9,  // Hyper Magenta - cool pink-purple
    6,  // Electric Aqua - cool cyan
    16, // Crimson - dark warm red
    4,  // Slime Lime - bright yellow-green
    7,  // Azure Blue - medium blue
    17, // Light Sea Green - teal variant
    3,  // Lime Yellow - bright yellow
    11, // Orange Red - warm red-orange
];

/// Color for the nth created category (0-indexed), wrapping around once the
/// palette is exhausted.
pub fn category_color(category_count: usize) -> &'static str {
    let order_index = category_count % COLOR_ASSIGNMENT_ORDER.len();
    CATEGORY_COLORS[COLOR_ASSIGNMENT_ORDER[order_index]]
}
