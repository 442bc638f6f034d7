use rust_decimal::Decimal;
use serde::Serialize;

/// Price breakdown for a quantity of one ticket tier.
///
/// Amounts keep full precision; call [`PricingQuote::rounded`] when
/// presenting them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuote {
    pub tier: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub sold_out: bool,
}

impl PricingQuote {
    /// Monetary amounts rounded half away from zero to cents.
    pub fn rounded(&self) -> Self {
        let cents = |amount: Decimal| {
            amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            tier: self.tier.clone(),
            unit_price: cents(self.unit_price),
            quantity: self.quantity,
            subtotal: cents(self.subtotal),
            service_fee: cents(self.service_fee),
            discount: cents(self.discount),
            total: cents(self.total),
            sold_out: self.sold_out,
        }
    }
}
