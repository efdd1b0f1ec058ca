//! Outcome of quoting a trade against the curve.

use core::fmt;

use serde::Serialize;

use super::{DecimalPlaces, Price, TradeSide};
use crate::error::{CurveError, Result};

/// A non-binding projection of what a trade would yield.
///
/// # Invariants
///
/// - `amount_in`, `amount_out`, and `consumed` are finite and `>= 0`.
/// - `consumed <= amount_in`: a buy never spends more than its budget.
///
/// # Amounts
///
/// | Side | `amount_in` | `amount_out` | `consumed` |
/// |------|-------------|--------------|------------|
/// | Buy  | currency offered | tokens (2 dp) | currency spent on whole units |
/// | Sell | tokens offered | currency (6 dp) | equal to `amount_in` |
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeEstimate {
    side: TradeSide,
    amount_in: f64,
    amount_out: f64,
    consumed: f64,
    ceiling_reached: bool,
}

impl TradeEstimate {
    /// Creates a validated estimate.
    ///
    /// # Errors
    ///
    /// - [`CurveError::Overflow`] if any amount is not finite.
    /// - [`CurveError::InvalidAmount`] if any amount is negative or
    ///   `consumed > amount_in`.
    pub(crate) fn new(
        side: TradeSide,
        amount_in: f64,
        amount_out: f64,
        consumed: f64,
        ceiling_reached: bool,
    ) -> Result<Self> {
        for value in [amount_in, amount_out, consumed] {
            if !value.is_finite() {
                return Err(CurveError::Overflow("estimate amount is not finite"));
            }
            if value < 0.0 {
                return Err(CurveError::InvalidAmount(
                    "estimate amounts must be non-negative",
                ));
            }
        }
        if consumed > amount_in {
            return Err(CurveError::InvalidAmount(
                "consumed amount exceeds the input",
            ));
        }
        Ok(Self {
            side,
            amount_in,
            amount_out,
            consumed,
            ceiling_reached,
        })
    }

    /// An estimate for a zero-sized request.
    pub(crate) const fn zero(side: TradeSide) -> Self {
        Self {
            side,
            amount_in: 0.0,
            amount_out: 0.0,
            consumed: 0.0,
            ceiling_reached: false,
        }
    }

    /// Returns the trade direction.
    #[must_use]
    pub const fn side(&self) -> TradeSide {
        self.side
    }

    /// Returns the amount the caller offered.
    #[must_use]
    pub const fn amount_in(&self) -> f64 {
        self.amount_in
    }

    /// Returns the counter-amount the caller would receive.
    #[must_use]
    pub const fn amount_out(&self) -> f64 {
        self.amount_out
    }

    /// Returns the part of `amount_in` the walk actually used.
    #[must_use]
    pub const fn consumed(&self) -> f64 {
        self.consumed
    }

    /// Returns the part of `amount_in` left over (`amount_in - consumed`).
    #[must_use]
    pub fn unspent(&self) -> f64 {
        self.amount_in - self.consumed
    }

    /// Returns `true` if the buy walk stopped at the per-call unit ceiling
    /// rather than running out of budget.
    #[must_use]
    pub const fn ceiling_reached(&self) -> bool {
        self.ceiling_reached
    }

    /// Returns `true` if nothing changes hands.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount_out == 0.0
    }

    /// Implied rate `amount_out / amount_in`.
    ///
    /// Tokens per currency unit for a buy, currency per token for a sell.
    /// [`None`] when the input is zero.
    #[must_use]
    pub fn rate(&self) -> Option<Price> {
        Price::ratio(self.amount_out, self.amount_in)
    }

    /// Average currency paid (buy) or received (sell) per token.
    ///
    /// For a buy this divides the currency actually spent by the tokens
    /// obtained, so an unspent remainder does not inflate it.  [`None`]
    /// when no tokens change hands.
    #[must_use]
    pub fn average_unit_price(&self) -> Option<Price> {
        match self.side {
            TradeSide::Buy => Price::ratio(self.consumed, self.amount_out),
            TradeSide::Sell => Price::ratio(self.amount_out, self.amount_in),
        }
    }
}

impl fmt::Display for TradeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {} {}",
            self.side,
            self.amount_in,
            self.side.input_asset(),
            self.amount_out,
            self.side.output_asset()
        )?;
        if let Some(rate) = self.rate() {
            let (places, unit) = match self.side {
                TradeSide::Buy => (DecimalPlaces::BUY_RATE, "tokens/currency"),
                TradeSide::Sell => (DecimalPlaces::SELL_RATE, "currency/token"),
            };
            write!(f, " (~{:.*} {unit})", usize::from(places.get()), rate)?;
        }
        Ok(())
    }
}
