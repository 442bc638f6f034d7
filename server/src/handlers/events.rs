use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Event, PricingQuote};
use crate::services::filter::parse_date_bound;
use crate::services::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::services::{paginate, pricing, CheckoutFlow, EventFilter, PageRequest, Pagination};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::params;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl ListEventsQuery {
    fn filter(&self) -> EventFilter {
        EventFilter {
            category: params::optional_text(self.category.as_deref()),
            location: params::optional_text(self.location.as_deref()),
            date_from: parse_date_bound(self.date_from.as_deref()),
            date_to: parse_date_bound(self.date_to.as_deref()),
        }
    }

    fn page_request(&self) -> Result<PageRequest, AppError> {
        Ok(PageRequest {
            page: params::positive_u32("page", self.page.as_deref(), DEFAULT_PAGE)?,
            limit: params::positive_u32("limit", self.limit.as_deref(), DEFAULT_LIMIT)?,
        })
    }
}

#[derive(Serialize)]
struct EventsResponse<'a> {
    events: Vec<&'a Event>,
    pagination: Pagination,
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Response, AppError> {
    let request = query.page_request()?;
    let filter = query.filter();

    let matched = filter.apply(state.catalog.events());
    let page = paginate(matched, request);

    debug!(
        category = filter.category.as_deref(),
        total = page.pagination.total,
        page = request.page,
        returned = page.items.len(),
        "Listed events"
    );

    Ok(Json(EventsResponse {
        events: page.items,
        pagination: page.pagination,
    })
    .into_response())
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Response, AppError> {
    let event = find_event(&state, &event_id)?;
    Ok(Json(event).into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    pub tier: Option<String>,
    pub quantity: Option<String>,
    pub flow: Option<String>,
}

/// Prices `quantity` tickets of one tier. The tier defaults to the first one
/// listed and the flow to `standard`.
pub async fn quote_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<PricingQuote>, AppError> {
    let event = find_event(&state, &event_id)?;

    let flow = match params::optional_text(query.flow.as_deref()) {
        Some(flow) => flow.parse::<CheckoutFlow>()?,
        None => CheckoutFlow::Standard,
    };
    let quantity = params::integer("quantity", query.quantity.as_deref(), 1)?;

    let tier = match params::optional_text(query.tier.as_deref()) {
        Some(name) => event.tier(&name).ok_or_else(|| {
            AppError::NotFound(format!(
                "Ticket tier '{}' was not found for event '{}'",
                name, event.id
            ))
        })?,
        None => event.pricing.tiers.first().ok_or_else(|| {
            AppError::NotFound(format!("Event '{}' has no ticket tiers", event.id))
        })?,
    };

    let quote = pricing::quote(tier, quantity, state.pricing.policy(flow));
    debug!(
        event_id = %event.id,
        tier = %quote.tier,
        requested = quantity,
        quantity = quote.quantity,
        ?flow,
        "Quoted tickets"
    );

    Ok(Json(quote.rounded()))
}

fn find_event<'a>(state: &'a AppState, event_id: &str) -> Result<&'a Event, AppError> {
    state
        .catalog
        .get(event_id)
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", event_id)))
}
