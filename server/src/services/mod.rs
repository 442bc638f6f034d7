pub mod catalog;
pub mod filter;
pub mod pagination;
pub mod pricing;
pub mod ranking;
pub mod recommender;

pub use catalog::{CatalogError, CatalogStore};
pub use filter::EventFilter;
pub use pagination::{paginate, Page, PageRequest, Pagination};
pub use pricing::{quote, CheckoutFlow, PricingConfig, PricingPolicy};
pub use ranking::{Ranking, RecommendationKind};
pub use recommender::RecommenderClient;
