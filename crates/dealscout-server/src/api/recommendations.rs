use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;

use dealscout_core::SearchPreferences;
use dealscout_recommend::{no_match_message, recommend, PageResult, RecommendError, RecommendRequest};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RecommendationBody {
    search_query: Option<String>,
    preferences: Option<PreferencesBody>,
    page: Option<u64>,
    page_size: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PreferencesBody {
    budget: Option<Vec<f64>>,
    #[serde(default)]
    features: Vec<String>,
}

/// Validates the raw body, rejecting anything the pipeline cannot act on.
fn validate(body: RecommendationBody) -> Result<(String, SearchPreferences), ApiError> {
    let query = body
        .search_query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(ApiError::invalid_request)?;

    let preferences = body.preferences.ok_or_else(ApiError::invalid_request)?;
    let budget = preferences.budget.ok_or_else(ApiError::invalid_request)?;

    let [min, max] = <[f64; 2]>::try_from(budget).map_err(|_| ApiError::invalid_request())?;
    if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 || min > max {
        return Err(ApiError::invalid_request());
    }

    Ok((
        query,
        SearchPreferences {
            budget: [min, max],
            features: preferences.features,
        },
    ))
}

pub(super) async fn product_recommendations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<RecommendationBody>, JsonRejection>,
) -> Result<Json<PageResult>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::invalid_request())?;
    let page = body.page.unwrap_or(1).max(1) as usize;
    let page_size = body
        .page_size
        .map_or(state.config.default_page_size, |size| size as usize)
        .clamp(1, state.config.max_page_size);
    let (query, preferences) = validate(body)?;

    let request = RecommendRequest {
        query,
        preferences,
        page,
        page_size,
    };

    let result = recommend(
        &state.search,
        &state.analyzer,
        &request,
        state.config.search_num_results,
        state.config.search_max_position,
    )
    .await
    .map_err(|e| match e {
        RecommendError::NoMatches => ApiError::not_found(no_match_message(&request.query)),
        RecommendError::Search(source) => {
            tracing::error!(request_id = %req_id.0, error = %source, "product search failed");
            ApiError::not_found(no_match_message(&request.query))
        }
    })?;

    Ok(Json(result))
}
