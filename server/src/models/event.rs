use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ticket::TicketTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub currency: String,
    pub base_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub tiers: Vec<TicketTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Location,
    pub organizer: Organizer,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: String,
    pub pricing: Pricing,
    pub capacity: u32,
    #[serde(default)]
    pub tickets_sold: u32,
    pub status: EventStatus,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn tier(&self, name: &str) -> Option<&TicketTier> {
        self.pricing.tiers.iter().find(|tier| tier.name == name)
    }

    /// Checks the record-level invariants a catalog entry must hold.
    ///
    /// Over-allocated tiers (sum of available quantities above capacity) are
    /// reported by [`Event::tier_overallocation`] instead, since existing
    /// catalogs are known to contain them.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must not be empty".to_string());
        }
        if self.end_time < self.start_time {
            return Err("endTime precedes startTime".to_string());
        }
        if self.updated_at < self.created_at {
            return Err("updatedAt precedes createdAt".to_string());
        }
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(format!("latitude {} out of range", self.location.latitude));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(format!(
                "longitude {} out of range",
                self.location.longitude
            ));
        }
        if self.capacity == 0 {
            return Err("capacity must be positive".to_string());
        }
        if self.tickets_sold > self.capacity {
            return Err(format!(
                "ticketsSold {} exceeds capacity {}",
                self.tickets_sold, self.capacity
            ));
        }
        if self.pricing.base_price.is_sign_negative() {
            return Err("basePrice must not be negative".to_string());
        }

        let mut seen = HashSet::new();
        for tier in &self.pricing.tiers {
            if tier.price.is_sign_negative() {
                return Err(format!("tier '{}' has a negative price", tier.name));
            }
            if !seen.insert(tier.name.as_str()) {
                return Err(format!("duplicate tier name '{}'", tier.name));
            }
        }

        Ok(())
    }

    /// Returns the summed tier quantity when every tier declares one and the
    /// sum exceeds capacity.
    pub fn tier_overallocation(&self) -> Option<u64> {
        let total = self
            .pricing
            .tiers
            .iter()
            .map(|tier| tier.available_quantity.map(u64::from))
            .sum::<Option<u64>>()?;

        (total > u64::from(self.capacity)).then_some(total)
    }
}
