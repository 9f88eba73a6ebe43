use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Gregorian month length, `None` for a month outside 1..12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// Calendar date for a sheet day, `None` when the day does not exist.
pub fn sheet_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Encode (year, month) as `YYYYMM`.
pub fn to_ym(year: i32, month: u32) -> i64 {
    year as i64 * 100 + month as i64
}

/// Split a `YYYYMM` value, rejecting a month part outside 1..12.
pub fn split_ym(ym: i64) -> AppResult<(i32, u32)> {
    if ym < 0 {
        return Err(AppError::InvalidYearMonth(ym));
    }
    let year = ym / 100;
    let month = ym % 100;
    if !(1..=12).contains(&month) || year > i32::MAX as i64 {
        return Err(AppError::InvalidYearMonth(ym));
    }
    Ok((year as i32, month as u32))
}

/// Validate a `from_ym..=to_ym` request before it reaches the store.
pub fn validate_ym_range(from_ym: i64, to_ym: i64) -> AppResult<()> {
    split_ym(from_ym)?;
    split_ym(to_ym)?;
    if from_ym > to_ym {
        return Err(AppError::InvalidRange {
            from: from_ym,
            to: to_ym,
        });
    }
    Ok(())
}

pub fn validate_month(month: u32) -> AppResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(AppError::InvalidMonth(month))
    }
}
