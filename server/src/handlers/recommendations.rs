use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::models::Event;
use crate::services::pagination::DEFAULT_LIMIT;
use crate::services::{Ranking, RecommendationKind};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::params;

const DEFAULT_USER_ID: &str = "current-user";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub user_id: Option<String>,
    pub limit: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl RecommendationsQuery {
    fn ranking(&self) -> Result<Ranking, AppError> {
        let kind = match params::optional_text(self.kind.as_deref()) {
            Some(kind) => kind.parse()?,
            None => RecommendationKind::Personalized,
        };
        let user_id = params::optional_text(self.user_id.as_deref())
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        Ok(match kind {
            RecommendationKind::Personalized => Ranking::Personalized { user_id },
            RecommendationKind::Trending => Ranking::Trending,
            RecommendationKind::Nearby => Ranking::Nearby {
                latitude: params::finite_f64("latitude", self.latitude.as_deref(), 0.0)?,
                longitude: params::finite_f64("longitude", self.longitude.as_deref(), 0.0)?,
            },
            RecommendationKind::Discovery => Ranking::Discovery { user_id },
        })
    }
}

#[derive(Serialize)]
struct RecommendationsResponse<'a> {
    recommendations: Vec<&'a Event>,
}

pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Response, AppError> {
    let ranking = query.ranking()?;
    let limit = params::positive_u32("limit", query.limit.as_deref(), DEFAULT_LIMIT)?;

    let candidates: Vec<&Event> = state.catalog.events().iter().collect();
    let mut ranked = ranking.rank(&candidates, &mut rand::thread_rng());
    ranked.truncate(limit as usize);

    info!(
        kind = %ranking.kind(),
        user_id = ranking.user_id(),
        limit,
        returned = ranked.len(),
        "Served recommendations"
    );

    Ok(Json(RecommendationsResponse {
        recommendations: ranked,
    })
    .into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct TrendingQuery {
    pub limit: Option<String>,
    pub category: Option<String>,
}

/// Relays the ML service's trending feed.
pub async fn trending_events(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<Value>, AppError> {
    let limit = params::positive_u32("limit", query.limit.as_deref(), DEFAULT_LIMIT)?;
    let category = params::optional_text(query.category.as_deref());

    let body = state
        .recommender
        .trending(limit, category.as_deref())
        .await?;

    Ok(Json(body))
}
