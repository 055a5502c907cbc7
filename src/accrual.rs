//! Accrual model: converts a periodic salary into a per-second rate and
//! integrates it over elapsed time.
//!
//! All arithmetic is done in [`Decimal`] so that very large declared amounts
//! (hundreds of millions per year) and very small per-second rates (fractions
//! of a cent) keep their digits through to the display.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::config::{MAX_AMOUNT, MAX_WORKING_HOURS, MIN_WORKING_HOURS};
use crate::currency::Currency;
use crate::error::{ValidationError, ValidationResult};

pub const SECONDS_PER_HOUR: u32 = 3600;

/// The unit over which a salary figure is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Yearly,
    Monthly,
    Weekly,
    Hourly,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Yearly,
        Period::Monthly,
        Period::Weekly,
        Period::Hourly,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Period::Yearly => "yearly",
            Period::Monthly => "monthly",
            Period::Weekly => "weekly",
            Period::Hourly => "hourly",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Period::Yearly => "Yearly salary",
            Period::Monthly => "Monthly salary",
            Period::Weekly => "Weekly salary",
            Period::Hourly => "Hourly wage",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Period::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownPeriod(trimmed.to_string()))
    }
}

/// How many days of a period count as paid working time.
///
/// - `CalendarDays`: every day counts (365 / 30 / 7).
/// - `StandardWorkingDays`: a standard working calendar (250 / 21 / 5).
///
/// The day count is multiplied by the declared working hours per day. Hourly
/// declarations ignore the policy entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayPolicy {
    CalendarDays,
    StandardWorkingDays,
}

impl HolidayPolicy {
    pub const ALL: [HolidayPolicy; 2] = [
        HolidayPolicy::StandardWorkingDays,
        HolidayPolicy::CalendarDays,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            HolidayPolicy::CalendarDays => "calendar",
            HolidayPolicy::StandardWorkingDays => "standard",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HolidayPolicy::CalendarDays => "Calendar days (365 / 30 / 7)",
            HolidayPolicy::StandardWorkingDays => "Standard working days (250 / 21 / 5)",
        }
    }

    /// Day count for one period, or `None` for `Hourly`.
    pub const fn days_in(self, period: Period) -> Option<u32> {
        match (self, period) {
            (_, Period::Hourly) => None,
            (HolidayPolicy::CalendarDays, Period::Yearly) => Some(365),
            (HolidayPolicy::CalendarDays, Period::Monthly) => Some(30),
            (HolidayPolicy::CalendarDays, Period::Weekly) => Some(7),
            (HolidayPolicy::StandardWorkingDays, Period::Yearly) => Some(250),
            (HolidayPolicy::StandardWorkingDays, Period::Monthly) => Some(21),
            (HolidayPolicy::StandardWorkingDays, Period::Weekly) => Some(5),
        }
    }
}

impl FromStr for HolidayPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        HolidayPolicy::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownHolidayPolicy(trimmed.to_string()))
    }
}

/// Seconds of work that correspond to one full declared period.
///
/// Strictly positive whenever `working_hours_per_day > 0`.
pub fn period_to_seconds(
    period: Period,
    working_hours_per_day: Decimal,
    policy: HolidayPolicy,
) -> Decimal {
    let hour = Decimal::from(SECONDS_PER_HOUR);
    match policy.days_in(period) {
        None => hour,
        Some(days) => Decimal::from(days) * working_hours_per_day * hour,
    }
}

/// A validated salary declaration. Construct via [`SalaryDeclaration::new`]
/// (or `validation::validate_form`); the fields are private so that every
/// instance satisfies the accrual model's preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryDeclaration {
    amount: Decimal,
    period: Period,
    currency: Currency,
    working_hours_per_day: Decimal,
    holiday_policy: HolidayPolicy,
}

impl SalaryDeclaration {
    pub fn new(
        amount: Decimal,
        period: Period,
        currency: Currency,
        working_hours_per_day: Decimal,
        holiday_policy: HolidayPolicy,
    ) -> ValidationResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NotPositive { field: "Amount" });
        }
        if amount > Decimal::from(MAX_AMOUNT) {
            return Err(ValidationError::AmountTooLarge { max: MAX_AMOUNT });
        }
        if working_hours_per_day < MIN_WORKING_HOURS
            || working_hours_per_day > Decimal::from(MAX_WORKING_HOURS)
        {
            return Err(ValidationError::WorkingHoursOutOfRange {
                value: working_hours_per_day.to_string(),
            });
        }

        let total = period_to_seconds(period, working_hours_per_day, holiday_policy);
        if amount.checked_div(total).is_none() {
            return Err(ValidationError::AmountTooLarge { max: MAX_AMOUNT });
        }

        Ok(Self {
            amount,
            period,
            currency,
            working_hours_per_day,
            holiday_policy,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn working_hours_per_day(&self) -> Decimal {
        self.working_hours_per_day
    }

    pub fn holiday_policy(&self) -> HolidayPolicy {
        self.holiday_policy
    }

    pub fn total_seconds(&self) -> Decimal {
        period_to_seconds(self.period, self.working_hours_per_day, self.holiday_policy)
    }

    pub fn per_second_rate(&self) -> Decimal {
        per_second_rate(self)
    }

    pub fn earnings_at_elapsed_ms(&self, elapsed_ms: u64) -> Decimal {
        earnings_at_elapsed(self, Decimal::from(elapsed_ms) / Decimal::ONE_THOUSAND)
    }
}

/// # Panics
/// Panics if the declaration's period total is not positive. Validation rules
/// this out; reaching it means an unchecked declaration slipped through.
fn checked_total_seconds(declaration: &SalaryDeclaration) -> Decimal {
    let total = declaration.total_seconds();
    assert!(
        total > Decimal::ZERO,
        "period total must be positive, got {} for {:?}",
        total,
        declaration
    );
    total
}

/// Earnings per second: `amount / period_to_seconds(..)`.
pub fn per_second_rate(declaration: &SalaryDeclaration) -> Decimal {
    declaration.amount / checked_total_seconds(declaration)
}

/// Cumulative earnings after `elapsed_seconds` of accrual.
///
/// Evaluated as `amount * (elapsed / total)` rather than `rate * elapsed`, so
/// one full period returns the declared amount exactly. Zero at zero and
/// non-decreasing in `elapsed_seconds`. Negative input is treated as zero;
/// results beyond `Decimal` range saturate at `Decimal::MAX`.
pub fn earnings_at_elapsed(declaration: &SalaryDeclaration, elapsed_seconds: Decimal) -> Decimal {
    if elapsed_seconds <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    elapsed_seconds
        .checked_div(checked_total_seconds(declaration))
        .and_then(|fraction| declaration.amount.checked_mul(fraction))
        .unwrap_or(Decimal::MAX)
}
