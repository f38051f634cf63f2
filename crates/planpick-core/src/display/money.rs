//! Currency formatting.

use std::fmt;

use rust_decimal::Decimal;

use crate::billing::round_cents;

/// A currency amount shown as dollars and cents, e.g. `$21.59`.
///
/// The amount is rounded half away from zero to two decimals for display
/// only; calculations keep full precision.
///
/// # Examples
///
/// ```rust
/// use std::str::FromStr;
///
/// use planpick_core::display::Money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Money(Decimal::from_str("21.5892").unwrap()).to_string(), "$21.59");
/// assert_eq!(Money(Decimal::from(49)).to_string(), "$49.00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", round_cents(self.0))
    }
}

/// Rate shown as a whole percentage, e.g. `8%`.
pub struct Percent(pub Decimal);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::catalog::TAX_RATE;

    #[test]
    fn test_money_rounds_for_display() {
        assert_eq!(Money(Decimal::from_str("5.0328").unwrap()).to_string(), "$5.03");
        assert_eq!(Money(Decimal::from_str("1.5992").unwrap()).to_string(), "$1.60");
        assert_eq!(Money(Decimal::from_str("0.005").unwrap()).to_string(), "$0.01");
        assert_eq!(Money(Decimal::ZERO).to_string(), "$0.00");
    }

    #[test]
    fn test_tax_rate_percent() {
        assert_eq!(Percent(TAX_RATE).to_string(), "8%");
    }
}
