//! Card number and expiry date validators.

use jiff::{
    civil::{Date, DateTime},
    Zoned,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Fewest digits a card number may have.
pub const MIN_CARD_DIGITS: usize = 12;

/// Most digits a card number may have.
pub const MAX_CARD_DIGITS: usize = 19;

static EXPIRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2}|[0-9]{4})$").expect("expiry pattern is valid")
});

/// Luhn checksum over the ASCII digits of `raw`.
///
/// Every non-digit character is ignored, so `"4242 4242 4242 4242"` and
/// `"4242-4242-4242-4242"` check the same digits. Fewer than
/// [`MIN_CARD_DIGITS`] digits always fails.
///
/// # Examples
///
/// ```rust
/// use planpick_core::validation::luhn_check;
///
/// assert!(luhn_check("4242424242424242"));
/// assert!(!luhn_check("4242424242424241"));
/// assert!(!luhn_check(""));
/// ```
pub fn luhn_check(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() < MIN_CARD_DIGITS {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Whether `exp` is a well-formed expiry that has not passed at `now`.
///
/// Accepts exactly `MM/YY` or `MM/YYYY`. A two-digit year is read as
/// `2000 + YY`. The card stays valid through the final instant of the last day
/// of its expiry month.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use planpick_core::validation::is_valid_expiry;
///
/// let now = date(2025, 1, 15).at(0, 0, 0, 0);
/// assert!(is_valid_expiry("01/25", now));
/// assert!(!is_valid_expiry("12/24", now));
/// assert!(!is_valid_expiry("1/25", now));
/// ```
pub fn is_valid_expiry(exp: &str, now: DateTime) -> bool {
    expiry_end(exp).is_some_and(|end| end >= now)
}

/// [`is_valid_expiry`] against the current wall-clock time in the system
/// time zone.
pub fn is_valid_expiry_now(exp: &str) -> bool {
    is_valid_expiry(exp, Zoned::now().datetime())
}

/// Last representable instant of the expiry month, or `None` if `exp` is
/// malformed or names an impossible month.
fn expiry_end(exp: &str) -> Option<DateTime> {
    let caps = EXPIRY_PATTERN.captures(exp)?;
    let month: i8 = caps[1].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }

    let year_digits = &caps[2];
    let mut year: i16 = year_digits.parse().ok()?;
    if year_digits.len() == 2 {
        year += 2000;
    }

    let first = Date::new(year, month, 1).ok()?;
    Some(first.last_of_month().at(23, 59, 59, 999_999_999))
}
