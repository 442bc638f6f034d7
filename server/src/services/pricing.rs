//! Ticket price quotes.
//!
//! Fee and discount rates are configuration. Two checkout flows exist side
//! by side: the standard flow charges a service fee only, the group flow
//! charges a higher fee and discounts larger orders.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{PricingQuote, TicketTier};
use crate::utils::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDiscount {
    pub rate: Decimal,
    pub threshold: u32,
}

impl GroupDiscount {
    pub fn applies_to(&self, quantity: u32) -> bool {
        quantity >= self.threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub service_fee_rate: Decimal,
    pub group_discount: Option<GroupDiscount>,
}

impl PricingPolicy {
    /// 10% service fee, no discount.
    pub fn standard() -> Self {
        Self {
            service_fee_rate: Decimal::new(10, 2),
            group_discount: None,
        }
    }

    /// 15% service fee, 10% off orders of four or more.
    pub fn group() -> Self {
        Self {
            service_fee_rate: Decimal::new(15, 2),
            group_discount: Some(GroupDiscount {
                rate: Decimal::new(10, 2),
                threshold: 4,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutFlow {
    Standard,
    Group,
}

impl FromStr for CheckoutFlow {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "standard" => Ok(Self::Standard),
            "group" => Ok(Self::Group),
            other => Err(AppError::InvalidArgument(format!(
                "Unknown checkout flow '{other}'"
            ))),
        }
    }
}

/// The policy used by each checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    pub standard: PricingPolicy,
    pub group: PricingPolicy,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            standard: PricingPolicy::standard(),
            group: PricingPolicy::group(),
        }
    }
}

impl PricingConfig {
    pub fn policy(&self, flow: CheckoutFlow) -> &PricingPolicy {
        match flow {
            CheckoutFlow::Standard => &self.standard,
            CheckoutFlow::Group => &self.group,
        }
    }
}

/// Clamps a requested quantity to `[1, available]`. Without an availability
/// bound only the lower limit applies; a sold-out tier still yields 1.
pub fn clamp_quantity(tier: &TicketTier, requested: i64) -> u32 {
    let upper = tier.available_quantity.map_or(i64::from(u32::MAX), i64::from);
    let clamped = requested.min(upper).max(1);
    u32::try_from(clamped).unwrap_or(u32::MAX)
}

pub fn quote(tier: &TicketTier, requested_quantity: i64, policy: &PricingPolicy) -> PricingQuote {
    let quantity = clamp_quantity(tier, requested_quantity);

    let subtotal = tier.price * Decimal::from(quantity);
    let service_fee = subtotal * policy.service_fee_rate;
    let discount = match policy.group_discount {
        Some(group) if group.applies_to(quantity) => subtotal * group.rate,
        _ => Decimal::ZERO,
    };

    PricingQuote {
        tier: tier.name.clone(),
        unit_price: tier.price,
        quantity,
        subtotal,
        service_fee,
        discount,
        total: subtotal + service_fee - discount,
        sold_out: tier.is_sold_out(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn tier(price: &str, available: Option<u32>) -> TicketTier {
        TicketTier {
            name: "General Admission".to_string(),
            price: dec(price),
            available_quantity: available,
        }
    }

    #[test]
    fn test_standard_quote_keeps_full_precision() {
        let q = quote(&tier("49.99", Some(1800)), 3, &PricingPolicy::standard());

        assert_eq!(q.quantity, 3);
        assert_eq!(q.subtotal, dec("149.97"));
        assert_eq!(q.service_fee, dec("14.997"));
        assert_eq!(q.discount, Decimal::ZERO);
        assert_eq!(q.total, dec("164.967"));
    }

    #[test]
    fn test_group_discount_at_threshold() {
        let q = quote(&tier("349.99", Some(300)), 4, &PricingPolicy::group());

        assert_eq!(q.subtotal, dec("1399.96"));
        assert_eq!(q.service_fee, dec("209.994"));
        assert_eq!(q.discount, dec("139.996"));
        assert_eq!(q.total, dec("1469.958"));
    }

    #[test]
    fn test_group_discount_below_threshold() {
        let q = quote(&tier("349.99", Some(300)), 3, &PricingPolicy::group());
        assert_eq!(q.discount, Decimal::ZERO);
        assert_eq!(q.total, q.subtotal + q.service_fee);
    }

    #[test]
    fn test_quantity_is_clamped_to_availability() {
        let t = tier("10", Some(5));
        assert_eq!(clamp_quantity(&t, 0), 1);
        assert_eq!(clamp_quantity(&t, -7), 1);
        assert_eq!(clamp_quantity(&t, 3), 3);
        assert_eq!(clamp_quantity(&t, 99), 5);

        let q = quote(&t, 99, &PricingPolicy::standard());
        assert_eq!(q.subtotal, dec("50"));
    }

    #[test]
    fn test_unbounded_tier_only_clamps_below() {
        let t = tier("10", None);
        assert_eq!(clamp_quantity(&t, 0), 1);
        assert_eq!(clamp_quantity(&t, 10_000), 10_000);
        assert_eq!(clamp_quantity(&t, i64::MAX), u32::MAX);
    }

    #[test]
    fn test_sold_out_tier_quotes_one_and_flags_it() {
        let q = quote(&tier("25", Some(0)), 2, &PricingPolicy::standard());
        assert_eq!(q.quantity, 1);
        assert!(q.sold_out);
    }

    #[test]
    fn test_rounding_happens_only_on_presentation() {
        let q = quote(&tier("49.99", None), 3, &PricingPolicy::standard());
        let shown = q.rounded();

        assert_eq!(shown.service_fee, dec("15.00"));
        assert_eq!(shown.total, dec("164.97"));
        assert_eq!(q.total, dec("164.967"));
    }

    #[test]
    fn test_rounded_total_is_not_sum_of_rounded_parts() {
        let q = quote(&tier("349.99", None), 4, &PricingPolicy::group());
        let shown = q.rounded();

        assert_eq!(shown.total, dec("1469.96"));
        assert_eq!(shown.service_fee, dec("209.99"));
        assert_eq!(shown.discount, dec("140.00"));
    }

    #[test]
    fn test_checkout_flow_parsing() {
        assert_eq!("group".parse::<CheckoutFlow>().unwrap(), CheckoutFlow::Group);
        assert!(matches!(
            "vip".parse::<CheckoutFlow>().unwrap_err(),
            AppError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_config_selects_policy_per_flow() {
        let config = PricingConfig::default();
        assert_eq!(config.policy(CheckoutFlow::Standard).service_fee_rate, dec("0.10"));
        assert_eq!(config.policy(CheckoutFlow::Group).service_fee_rate, dec("0.15"));
    }
}
