//! Field validation shared by the `add` and `edit` forms.
//!
//! A rejected field aborts the command with a blocking error before the
//! store is touched, so a failed form never saves a partial entry.

use crate::core::money::Money;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub(crate) fn parse_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "payee/supplier name must not be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

pub(crate) fn parse_amount(raw: &str) -> AppResult<Money> {
    let amount: Money = raw.parse()?;
    if !amount.is_positive() {
        return Err(AppError::Validation(format!(
            "amount must be greater than zero: {}",
            raw.trim()
        )));
    }
    Ok(amount)
}

pub(crate) fn parse_entry_date(raw: &str) -> AppResult<String> {
    match date::parse_date(raw) {
        Some(_) => Ok(raw.to_string()),
        None => Err(AppError::InvalidDate(format!("{raw} (expected YYYY-MM-DD)"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_must_not_be_blank() {
        assert_eq!(parse_name("  KPLC  ").unwrap(), "KPLC");
        assert!(parse_name("   ").is_err());
        assert!(parse_name("").is_err());
    }

    #[test]
    fn amount_must_be_strictly_positive() {
        assert_eq!(parse_amount("12.345").unwrap().cents(), 1235);
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("0.00").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("water").is_err());
    }

    #[test]
    fn date_must_be_a_real_calendar_date() {
        assert!(parse_entry_date("2025-11-11").is_ok());
        assert!(parse_entry_date("2025-02-30").is_err());
        assert!(parse_entry_date("11/11/2025").is_err());
    }
}
