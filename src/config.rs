//! Application-level configuration constants.

use rust_decimal::Decimal;

// Sampling loop
pub const TICK_MS: u32 = 50;
pub const PROGRESS_HORIZON_MS: u64 = 60 * 60 * 1000;

// Default values for input fields
pub const DEFAULT_AMOUNT_TEXT: &str = "";
pub const DEFAULT_WORKING_HOURS_TEXT: &str = "8";
pub const DEFAULT_PERIOD: &str = "yearly";
pub const DEFAULT_CURRENCY: &str = "CNY";
pub const DEFAULT_HOLIDAY_POLICY: &str = "standard";

// Min/Max limits for input fields
/// 0.01 h. Floors a period total at 180 s (5 standard days), which bounds the
/// per-second rate at `MAX_AMOUNT / 180`.
pub const MIN_WORKING_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
pub const MAX_WORKING_HOURS: u32 = 24;
/// Upper bound on the declared amount. Together with `MIN_WORKING_HOURS` this
/// keeps the per-second rate finite; cumulative earnings still saturate at
/// `Decimal::MAX` for absurdly long sessions.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

// Display precision
pub const DISPLAY_DP: u32 = 2;
pub const SMALL_VALUE_DP: u32 = 8;

// Quick-fill amounts shown under the amount field
pub const PRESET_AMOUNTS: [u64; 4] = [120_000, 300_000, 1_000_000, 100_000_000];
