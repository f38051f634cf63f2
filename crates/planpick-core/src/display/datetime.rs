//! Calendar date formatting.

use std::fmt;

use jiff::civil::Date;

/// Month and day, e.g. `Feb 15`.
pub struct ShortDate<'a>(pub &'a Date);

impl<'a> fmt::Display for ShortDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %-d"))
    }
}

/// Full calendar date, e.g. `January 15, 2025`.
pub struct LongDate<'a>(pub &'a Date);

impl<'a> fmt::Display for LongDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %-d, %Y"))
    }
}
