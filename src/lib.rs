//! Core of the real-time salary counter.
//!
//! The library is target-independent: it turns form input into a validated
//! [`SalaryDeclaration`], converts it into a per-second accrual rate, and
//! samples cumulative earnings from a fixed session start. The Yew front end
//! in `main.rs` drives it from a repeating browser timer.

pub mod accrual;
pub mod config;
pub mod currency;
pub mod error;
pub mod format;
pub mod session;
pub mod validation;

pub use accrual::{
    earnings_at_elapsed, per_second_rate, period_to_seconds, HolidayPolicy, Period,
    SalaryDeclaration,
};
pub use currency::Currency;
pub use error::{ValidationError, ValidationResult};
pub use format::{format_currency, format_elapsed, group_thousands, progress_percent};
pub use session::{AccrualSession, LiveCounter, Sample};
pub use validation::{validate_form, SalaryFormInput};
