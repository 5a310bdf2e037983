//! Money type for displaying laptop prices.
//!
//! The Catalog API sends prices as plain decimals with no currency. They are
//! converted to integer cents once, at normalization time, so that sorting
//! and formatting never see floating-point noise.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Locale;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    EUR,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the cent.
    ///
    /// ```
    /// use rock_catalog::money::{Currency, Money};
    /// let price = Money::from_decimal(1299.99, Currency::EUR);
    /// assert_eq!(price.amount_cents, 129999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = if amount.is_finite() {
            (amount * 100.0).round() as i64
        } else {
            0
        };
        Self::new(amount_cents, currency)
    }

    /// Format with symbol prefix and locale grouping, e.g. `€1.299,99`.
    ///
    /// Whole amounts drop the fractional part (`€899`).
    pub fn display(&self, locale: Locale) -> String {
        let (group, decimal) = match locale {
            Locale::Es => ('.', ','),
            Locale::En => (',', '.'),
        };
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let whole = group_thousands(abs / 100, group);
        let cents = abs % 100;

        if cents == 0 {
            format!("{}{}{}", sign, self.currency.symbol(), whole)
        } else {
            format!("{}{}{}{}{:02}", sign, self.currency.symbol(), whole, decimal, cents)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(Locale::default()))
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
