//! Easter Sunday in the Gregorian calendar.
//!
//! Uses the Anonymous Gregorian (Meeus/Jones/Butcher) algorithm: the 19-year
//! Metonic cycle locates the paschal full moon, century terms apply the
//! solar and lunar corrections, and the result is the following Sunday.

use hr_core::errors::Result;
use hr_core::Year;

use crate::date::Date;
use crate::month::Month;

/// Month and day of Easter Sunday in `year`.
///
/// Total over all non-negative years; the month is always March or April.
pub fn easter_month_day(year: Year) -> (Month, u8) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = if n / 31 == 3 { Month::March } else { Month::April };
    (month, (n % 31 + 1) as u8)
}

/// Date of Easter Sunday in `year`.
///
/// Fails only when `year` is outside the supported [`Date`] range.
///
/// # Example
/// ```
/// use hr_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(1999).unwrap(), Date::from_ymd(1999, 4, 4).unwrap());
/// ```
pub fn easter_sunday(year: Year) -> Result<Date> {
    let (month, day) = easter_month_day(year);
    Date::from_parts(year, month, day)
}
