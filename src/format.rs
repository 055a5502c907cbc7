//! Display formatting for money, elapsed time and progress.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{DISPLAY_DP, SMALL_VALUE_DP};
use crate::currency::Currency;

/// Round half away from zero and pad to exactly `dp` fractional digits.
fn to_fixed(amount: Decimal, dp: u32) -> String {
    let mut fixed = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(dp);
    fixed.to_string()
}

/// Format `amount` prefixed with the currency symbol.
///
/// Amounts strictly between 0 and 0.01 get 8 decimal places so that a slow
/// counter still visibly moves; everything else gets 2.
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_counter::{currency::Currency, format::format_currency};
/// assert_eq!(format_currency(Decimal::new(5, 3), Currency::Usd), "$0.00500000");
/// assert_eq!(format_currency(Decimal::new(12345, 1), Currency::Usd), "$1234.50");
/// ```
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    let dp = if amount > Decimal::ZERO && amount < Decimal::new(1, 2) {
        SMALL_VALUE_DP
    } else {
        DISPLAY_DP
    };
    format!("{}{}", currency.symbol(), to_fixed(amount, dp))
}

/// Format a millisecond duration as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let seconds = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Percentage of `horizon_ms` covered by `elapsed_ms`, capped at 100.
pub fn progress_percent(elapsed_ms: u64, horizon_ms: u64) -> f64 {
    if horizon_ms == 0 {
        return 100.0;
    }
    (elapsed_ms as f64 / horizon_ms as f64 * 100.0).min(100.0)
}

/// Render an amount with `,` thousands grouping, e.g. `100000000` -> `100,000,000`.
/// Trailing fractional zeros are dropped.
pub fn group_thousands(amount: Decimal) -> String {
    let plain = amount.normalize().to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
