use std::sync::Arc;

use crate::services::{CatalogStore, PricingConfig, RecommenderClient};

/// Shared by every handler; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub recommender: RecommenderClient,
    pub pricing: PricingConfig,
}

impl AppState {
    pub fn new(catalog: CatalogStore, recommender: RecommenderClient, pricing: PricingConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommender,
            pricing,
        }
    }
}
