/// Storage format for expense dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
