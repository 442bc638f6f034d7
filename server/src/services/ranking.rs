//! Recommendation orderings.
//!
//! Every strategy takes a borrowed slice and returns a new ordering of the
//! same references; nothing is removed and the input is never reordered in
//! place. Deterministic strategies use stable sorts so ties keep catalog
//! order.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Event;
use crate::utils::error::AppError;

/// Strategy selector as it appears in the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Personalized,
    Trending,
    Nearby,
    Discovery,
}

impl FromStr for RecommendationKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "personalized" => Ok(Self::Personalized),
            "trending" => Ok(Self::Trending),
            "nearby" => Ok(Self::Nearby),
            "discovery" => Ok(Self::Discovery),
            _ => Err(AppError::InvalidArgument(
                "Invalid recommendation type".to_string(),
            )),
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Personalized => "personalized",
            Self::Trending => "trending",
            Self::Nearby => "nearby",
            Self::Discovery => "discovery",
        };
        f.write_str(name)
    }
}

/// A strategy together with the context it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// Unweighted shuffle until a scoring model is wired in.
    Personalized { user_id: String },
    /// Most tickets sold first.
    Trending,
    /// Closest first, by planar distance over raw degrees.
    Nearby { latitude: f64, longitude: f64 },
    /// Unweighted shuffle; meant to surface categories the user rarely picks.
    Discovery { user_id: String },
}

impl Ranking {
    pub fn kind(&self) -> RecommendationKind {
        match self {
            Self::Personalized { .. } => RecommendationKind::Personalized,
            Self::Trending => RecommendationKind::Trending,
            Self::Nearby { .. } => RecommendationKind::Nearby,
            Self::Discovery { .. } => RecommendationKind::Discovery,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Personalized { user_id } | Self::Discovery { user_id } => Some(user_id),
            Self::Trending | Self::Nearby { .. } => None,
        }
    }

    pub fn rank<'a, R: Rng + ?Sized>(&self, events: &[&'a Event], rng: &mut R) -> Vec<&'a Event> {
        match self {
            Self::Personalized { .. } | Self::Discovery { .. } => shuffled(events, rng),
            Self::Trending => by_tickets_sold(events),
            Self::Nearby {
                latitude,
                longitude,
            } => by_distance(events, *latitude, *longitude),
        }
    }
}

fn shuffled<'a, R: Rng + ?Sized>(events: &[&'a Event], rng: &mut R) -> Vec<&'a Event> {
    let mut ranked = events.to_vec();
    ranked.shuffle(rng);
    ranked
}

fn by_tickets_sold<'a>(events: &[&'a Event]) -> Vec<&'a Event> {
    let mut ranked = events.to_vec();
    ranked.sort_by_key(|event| Reverse(event.tickets_sold));
    ranked
}

fn by_distance<'a>(events: &[&'a Event], latitude: f64, longitude: f64) -> Vec<&'a Event> {
    let mut ranked = events.to_vec();
    ranked.sort_by(|a, b| {
        planar_distance(a, latitude, longitude).total_cmp(&planar_distance(b, latitude, longitude))
    });
    ranked
}

pub fn planar_distance(event: &Event, latitude: f64, longitude: f64) -> f64 {
    let d_lat = event.location.latitude - latitude;
    let d_lng = event.location.longitude - longitude;
    (d_lat * d_lat + d_lng * d_lng).sqrt()
}
