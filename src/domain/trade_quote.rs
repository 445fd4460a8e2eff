//! Outcomes of simulated buy and sell trades.

use super::{Price, Quantity};

/// Result of simulating a buy of `quantity` shares from the pool.
///
/// `cost` is the exact integral of the price curve between the current and
/// the post-trade point; `resulting_price` is the capped spot price of the
/// post-trade pool.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BuyQuote {
    quantity: Quantity,
    cost: f64,
    resulting_price: Price,
}

impl BuyQuote {
    pub(crate) const fn new(quantity: Quantity, cost: f64, resulting_price: Price) -> Self {
        Self {
            quantity,
            cost,
            resulting_price,
        }
    }

    /// Shares bought.
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Quote currency the buyer pays into the pool.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Capped spot price after the trade.
    pub const fn resulting_price(&self) -> Price {
        self.resulting_price
    }

    /// Average price paid per share, `None` for a zero-size trade.
    #[must_use]
    pub fn average_price(&self) -> Option<f64> {
        average(self.cost, self.quantity)
    }

    /// Relative premium of the average price over `spot`.
    ///
    /// `(average − spot) / spot`.  `None` for a zero-size trade or a zero
    /// spot price.
    #[must_use]
    pub fn slippage(&self, spot: Price) -> Option<f64> {
        let avg = self.average_price()?;
        relative(avg - spot.get(), spot)
    }
}

/// Result of simulating a sell of `quantity` shares into the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SellQuote {
    quantity: Quantity,
    payout: f64,
    resulting_price: Price,
}

impl SellQuote {
    pub(crate) const fn new(quantity: Quantity, payout: f64, resulting_price: Price) -> Self {
        Self {
            quantity,
            payout,
            resulting_price,
        }
    }

    /// Shares sold.
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Quote currency the pool pays out to the seller.
    #[must_use]
    pub const fn payout(&self) -> f64 {
        self.payout
    }

    /// Capped spot price after the trade.
    pub const fn resulting_price(&self) -> Price {
        self.resulting_price
    }

    /// Average price received per share, `None` for a zero-size trade.
    #[must_use]
    pub fn average_price(&self) -> Option<f64> {
        average(self.payout, self.quantity)
    }

    /// Relative discount of the average price below `spot`.
    ///
    /// `(spot − average) / spot`.
    #[must_use]
    pub fn slippage(&self, spot: Price) -> Option<f64> {
        let avg = self.average_price()?;
        relative(spot.get() - avg, spot)
    }
}

fn average(total: f64, quantity: Quantity) -> Option<f64> {
    if quantity.is_zero() {
        None
    } else {
        Some(total / quantity.get())
    }
}

fn relative(delta: f64, spot: Price) -> Option<f64> {
    if spot.is_zero() {
        None
    } else {
        Some(delta / spot.get())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn qty(v: f64) -> Quantity {
        let Ok(q) = Quantity::new(v) else {
            panic!("valid quantity");
        };
        q
    }

    fn price(v: f64) -> Price {
        let Ok(p) = Price::new(v) else {
            panic!("valid price");
        };
        p
    }

    #[test]
    fn buy_average_price() {
        let quote = BuyQuote::new(qty(10.0), 105.0, price(11.0));
        assert_eq!(quote.average_price(), Some(10.5));
    }

    #[test]
    fn buy_slippage_is_premium_over_spot() {
        let quote = BuyQuote::new(qty(10.0), 105.0, price(11.0));
        let Some(s) = quote.slippage(price(10.0)) else {
            panic!("expected slippage");
        };
        assert!((s - 0.05).abs() < 1e-12);
    }

    #[test]
    fn sell_slippage_is_discount_under_spot() {
        let quote = SellQuote::new(qty(10.0), 95.0, price(9.0));
        let Some(s) = quote.slippage(price(10.0)) else {
            panic!("expected slippage");
        };
        assert!((s - 0.05).abs() < 1e-12);
    }

    #[test]
    fn zero_trade_has_no_average() {
        let buy = BuyQuote::new(Quantity::ZERO, 0.0, price(10.0));
        let sell = SellQuote::new(Quantity::ZERO, 0.0, price(10.0));
        assert_eq!(buy.average_price(), None);
        assert_eq!(sell.slippage(price(10.0)), None);
    }

    #[test]
    fn zero_spot_has_no_slippage() {
        let buy = BuyQuote::new(qty(1.0), 1.0, price(1.0));
        assert_eq!(buy.slippage(Price::ZERO), None);
    }
}
