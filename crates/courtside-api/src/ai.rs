//! AI helpers: call an endpoint and read what the designer understands
//! from the answer.

use courtside_core::ApiError;
use courtside_designer::{
    parse_color_scheme, parse_placement, parse_suggestions, AiDesignRequest, PlacementSuggestion,
};

use crate::client::DesignApi;

pub async fn fetch_placement(
    api: &dyn DesignApi,
    request: &AiDesignRequest,
) -> Result<Vec<PlacementSuggestion>, ApiError> {
    let response = api.optimize_placement(request).await?;
    let placement = parse_placement(&response);
    tracing::debug!("Placement response covered {} elements", placement.len());
    Ok(placement)
}

pub async fn fetch_color_scheme(
    api: &dyn DesignApi,
    request: &AiDesignRequest,
) -> Result<Vec<String>, ApiError> {
    let response = api.color_scheme(request).await?;
    Ok(parse_color_scheme(&response))
}

pub async fn fetch_suggestions(
    api: &dyn DesignApi,
    request: &AiDesignRequest,
) -> Result<Vec<String>, ApiError> {
    let response = api.suggestions(request).await?;
    Ok(parse_suggestions(&response))
}
