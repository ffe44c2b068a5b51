use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::dimensions::{Dimension, FilterOptions};

#[derive(Debug, Serialize)]
pub struct DimensionResponse {
    pub dimension: Dimension,
    pub values: Vec<String>,
}

/// Sorted distinct values of one dimension.
pub async fn dimension_values(
    State(state): State<AppState>,
    Path(dimension): Path<String>,
) -> Result<Json<DimensionResponse>, ApiError> {
    let dimension: Dimension = dimension.parse().map_err(ApiError::NotFound)?;

    let values = FilterOptions::from_matches(&state.matches)
        .values(dimension)
        .to_vec();

    Ok(Json(DimensionResponse { dimension, values }))
}
