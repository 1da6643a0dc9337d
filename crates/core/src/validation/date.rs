//! Date validation.

use chrono::{Months, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::limits::{MAX_FUTURE_YEARS, MAX_PAST_YEARS};
use super::result::{FieldError, Validation};

const DATE: &str = "Date";

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validates a `YYYY-MM-DD` date against today's date (UTC).
pub fn validate_date(input: &str) -> Validation<NaiveDate> {
    validate_date_on(input, Utc::now().date_naive())
}

/// Validates a `YYYY-MM-DD` date relative to `today`.
///
/// The date must be a real calendar date no more than 10 years after and no
/// more than 100 years before `today`. Both bounds are inclusive.
pub fn validate_date_on(input: &str, today: NaiveDate) -> Validation<NaiveDate> {
    if input.is_empty() {
        return Validation::invalid(FieldError::Required { field: DATE });
    }
    if !ISO_DATE.is_match(input) {
        return Validation::invalid(FieldError::InvalidFormat {
            field: DATE,
            expected: "YYYY-MM-DD",
        });
    }
    let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") else {
        return Validation::invalid(FieldError::InvalidDate { field: DATE });
    };

    if today
        .checked_add_months(Months::new(MAX_FUTURE_YEARS * 12))
        .is_some_and(|latest| date > latest)
    {
        return Validation::invalid(FieldError::TooFarInFuture {
            field: DATE,
            years: MAX_FUTURE_YEARS,
        });
    }
    if today
        .checked_sub_months(Months::new(MAX_PAST_YEARS * 12))
        .is_some_and(|earliest| date < earliest)
    {
        return Validation::invalid(FieldError::TooFarInPast {
            field: DATE,
            years: MAX_PAST_YEARS,
        });
    }

    Validation::Valid(date)
}
