//! The API endpoint URIs.

/// The route that lists sale records for a month.
pub const SALES: &str = "/sales";
/// The route for the monthly sales totals.
pub const STATISTICS: &str = "/statistics";
/// The route for the monthly price-range histogram.
pub const ITEMS: &str = "/items";
/// The route for the monthly per-category item counts.
pub const CATEGORIES: &str = "/categories";
/// The route for the combined monthly statistics.
pub const ALL_STATISTICS: &str = "/all-statistics";
