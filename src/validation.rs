//! Input validation: raw form text in, [`SalaryDeclaration`] out.

use std::str::FromStr;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::accrual::{HolidayPolicy, Period, SalaryDeclaration};
use crate::config::{MAX_AMOUNT, MAX_WORKING_HOURS, MIN_WORKING_HOURS};
use crate::currency::Currency;
use crate::error::{ValidationError, ValidationResult};

// Canonical form after separator normalisation
static PLAIN_DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").expect("static regex is valid"));
// "12,345" style: a comma followed by exactly three digits reads as grouping
static GROUPED_TAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\d{3}$").expect("static regex is valid"));
// Integer part with well-formed comma grouping: "1,234", "120,000,000"
static GROUPED_INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d{1,3}(,\d{3})+$").expect("static regex is valid"));

/// Raw text of the salary form, exactly as typed or selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryFormInput {
    pub amount: String,
    pub period: String,
    pub currency: String,
    pub working_hours: String,
    pub holiday_policy: String,
}

/// Rewrite locale-style separators into a plain `1234.5` string, or `None`
/// when the separators are ambiguous or malformed.
///
/// - `_`, spaces and non-breaking spaces are always grouping.
/// - With a `.` present, commas may only appear before it, in 3-digit groups
///   (`1,234.5`). `1.234,56` and `1,2.5` are rejected.
/// - Without a `.`, a single `,` not followed by exactly three digits is the
///   decimal separator (`12,5`); otherwise the commas must form 3-digit
///   groups (`120,000`). `1,2,3` is rejected.
fn normalize_separators(input: &str) -> Option<String> {
    let compact: String = input
        .chars()
        .filter(|c| !matches!(c, '_' | ' ' | '\u{a0}'))
        .collect();

    let normalized = match compact.split_once('.') {
        Some((int_part, frac_part)) => {
            if frac_part.contains(',') {
                return None;
            }
            format!("{}.{}", ungroup(int_part)?, frac_part)
        }
        None if compact.matches(',').count() == 1 && !GROUPED_TAIL_REGEX.is_match(&compact) => {
            compact.replace(',', ".")
        }
        None => ungroup(&compact)?,
    };

    match normalized.strip_prefix('.') {
        Some(rest) => Some(format!("0.{rest}")),
        None => Some(normalized),
    }
}

/// Strip comma grouping from an integer part, requiring 3-digit groups.
fn ungroup(int_part: &str) -> Option<String> {
    if !int_part.contains(',') {
        return Some(int_part.to_string());
    }
    GROUPED_INTEGER_REGEX
        .is_match(int_part)
        .then(|| int_part.replace(',', ""))
}

/// Parse a decimal field, rejecting empty and malformed input.
pub fn parse_decimal_field(input: &str, field: &'static str) -> ValidationResult<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }

    let normalized = match normalize_separators(trimmed) {
        Some(n) if PLAIN_DECIMAL_REGEX.is_match(&n) => n,
        _ => {
            return Err(ValidationError::NotANumber {
                field,
                input: trimmed.to_string(),
            })
        }
    };

    Decimal::from_str(&normalized).map_err(|_| ValidationError::NotANumber {
        field,
        input: trimmed.to_string(),
    })
}

/// Parse the declared salary amount: positive and at most `MAX_AMOUNT`.
pub fn parse_amount(input: &str) -> ValidationResult<Decimal> {
    let amount = parse_decimal_field(input, "Amount")?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field: "Amount" });
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(ValidationError::AmountTooLarge { max: MAX_AMOUNT });
    }
    Ok(amount)
}

/// Parse working hours per day, which must lie in `[MIN_WORKING_HOURS, 24]`.
pub fn parse_working_hours(input: &str) -> ValidationResult<Decimal> {
    let hours = parse_decimal_field(input, "Working hours per day")?;
    if hours < MIN_WORKING_HOURS || hours > Decimal::from(MAX_WORKING_HOURS) {
        return Err(ValidationError::WorkingHoursOutOfRange {
            value: hours.to_string(),
        });
    }
    Ok(hours)
}

fn build_declaration(form: &SalaryFormInput) -> ValidationResult<SalaryDeclaration> {
    let currency = Currency::from_str(&form.currency)?;
    let amount = parse_amount(&form.amount)?;
    let period = Period::from_str(&form.period)?;
    let working_hours = parse_working_hours(&form.working_hours)?;
    let holiday_policy = HolidayPolicy::from_str(&form.holiday_policy)?;

    SalaryDeclaration::new(amount, period, currency, working_hours, holiday_policy)
}

/// Validate the whole form. Fields are checked in display order and the
/// first failure is returned.
pub fn validate_form(form: &SalaryFormInput) -> ValidationResult<SalaryDeclaration> {
    match build_declaration(form) {
        Ok(declaration) => {
            debug!("Form accepted: {:?}", declaration);
            Ok(declaration)
        }
        Err(e) => {
            warn!("Form rejected: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn form(amount: &str, hours: &str) -> SalaryFormInput {
        SalaryFormInput {
            amount: amount.to_string(),
            period: "yearly".to_string(),
            currency: "CNY".to_string(),
            working_hours: hours.to_string(),
            holiday_policy: "standard".to_string(),
        }
    }

    #[test]
    fn plain_amounts() {
        assert_eq!(parse_amount("120000"), Ok(dec("120000")));
        assert_eq!(parse_amount("  42.75 "), Ok(dec("42.75")));
        assert_eq!(parse_amount(".5"), Ok(dec("0.5")));
    }

    #[test]
    fn grouped_amounts() {
        assert_eq!(parse_amount("120,000"), Ok(dec("120000")));
        assert_eq!(parse_amount("1,000,000"), Ok(dec("1000000")));
        assert_eq!(parse_amount("100_000_000"), Ok(dec("100000000")));
        assert_eq!(parse_amount("1 234.50"), Ok(dec("1234.5")));
        assert_eq!(parse_amount("1,234.50"), Ok(dec("1234.5")));
    }

    #[test]
    fn comma_as_decimal_separator() {
        assert_eq!(parse_amount("12,5"), Ok(dec("12.5")));
        assert_eq!(parse_amount("3500,75"), Ok(dec("3500.75")));
    }

    #[test]
    fn rejects_ambiguous_separators() {
        for input in ["1.234,56", "120.000,50", "1,2,3", "1,2.5", "12,34,567", "1,234,5678"] {
            assert_eq!(
                parse_amount(input),
                Err(ValidationError::NotANumber {
                    field: "Amount",
                    input: input.to_string()
                }),
                "{input} should be rejected"
            );
        }
        assert_eq!(parse_amount("12,345,678.9"), Ok(dec("12345678.9")));
        assert_eq!(parse_amount("-1,000"), Err(ValidationError::NotPositive { field: "Amount" }));
    }

    #[test]
    fn rejects_bad_amounts() {
        assert_eq!(
            parse_amount(""),
            Err(ValidationError::EmptyField { field: "Amount" })
        );
        assert_eq!(
            parse_amount("abc"),
            Err(ValidationError::NotANumber {
                field: "Amount",
                input: "abc".to_string()
            })
        );
        assert!(matches!(parse_amount("1.2.3"), Err(ValidationError::NotANumber { .. })));
        assert!(matches!(parse_amount("NaN"), Err(ValidationError::NotANumber { .. })));
        assert!(matches!(parse_amount("1e5"), Err(ValidationError::NotANumber { .. })));
        assert_eq!(
            parse_amount("0"),
            Err(ValidationError::NotPositive { field: "Amount" })
        );
        assert_eq!(
            parse_amount("-300"),
            Err(ValidationError::NotPositive { field: "Amount" })
        );
        assert_eq!(
            parse_amount("2000000000000000"),
            Err(ValidationError::AmountTooLarge { max: MAX_AMOUNT })
        );
    }

    #[test]
    fn working_hours_bounds() {
        assert_eq!(parse_working_hours("8"), Ok(dec("8")));
        assert_eq!(parse_working_hours("24"), Ok(dec("24")));
        assert_eq!(parse_working_hours("7,5"), Ok(dec("7.5")));
        assert!(matches!(
            parse_working_hours("0"),
            Err(ValidationError::WorkingHoursOutOfRange { .. })
        ));
        assert_eq!(parse_working_hours("0.01"), Ok(dec("0.01")));
        assert!(matches!(
            parse_working_hours("0.009"),
            Err(ValidationError::WorkingHoursOutOfRange { .. })
        ));
        assert!(matches!(
            parse_working_hours("0.00000000000000000001"),
            Err(ValidationError::WorkingHoursOutOfRange { .. })
        ));
        assert!(matches!(
            parse_working_hours("24.5"),
            Err(ValidationError::WorkingHoursOutOfRange { .. })
        ));
        assert!(matches!(
            parse_working_hours(""),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn validates_full_form() {
        let d = validate_form(&form("120000", "8")).unwrap();
        assert_eq!(d.amount(), dec("120000"));
        assert_eq!(d.period(), Period::Yearly);
        assert_eq!(d.currency(), Currency::Cny);
        assert_eq!(d.holiday_policy(), HolidayPolicy::StandardWorkingDays);
        assert_eq!(d.total_seconds(), dec("7200000"));
    }

    #[test]
    fn reports_first_failing_field() {
        let mut bad = form("", "99");
        assert_eq!(
            validate_form(&bad),
            Err(ValidationError::EmptyField { field: "Amount" })
        );

        bad.currency = "XYZ".to_string();
        assert_eq!(
            validate_form(&bad),
            Err(ValidationError::UnknownCurrency("XYZ".to_string()))
        );

        let mut bad_policy = form("1000", "8");
        bad_policy.holiday_policy = "some".to_string();
        assert_eq!(
            validate_form(&bad_policy),
            Err(ValidationError::UnknownHolidayPolicy("some".to_string()))
        );
    }
}
