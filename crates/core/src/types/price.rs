//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as exact decimals. Rounding to cents happens only when a
//! price is formatted for display, so sums of many lines never drift.

use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Create a USD price from whole cents.
    #[must_use]
    pub fn usd_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2), CurrencyCode::USD)
    }

    /// Amount rounded half away from zero to two decimal places.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.rounded())
    }

    /// Format whole amounts without cents (e.g., "$1,000"), for goals.
    #[must_use]
    pub fn display_whole(&self) -> String {
        let whole = self
            .amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_string();
        let digits: Vec<char> = whole.trim_start_matches('-').chars().collect();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(*c);
        }
        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}{grouped}", self.currency_code.symbol())
    }
}

impl Add for Price {
    type Output = Self;

    /// Adds two prices. Both operands are expected to share a currency; the
    /// left-hand currency is kept.
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self::Output {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(CurrencyCode::default()), Add::add)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}
