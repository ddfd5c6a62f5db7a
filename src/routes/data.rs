use crate::{
    AppState,
    errors::ApiError,
    store::{Dataset, record_count},
};
use axum::{Json, extract::State};
use serde_json::Value;
use tracing::info;

/// GET /routes/clients
/// Response: contents of clients.json, unmodified
pub async fn get_clients(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    info!("GET /routes/clients received");
    load(&state, Dataset::Clients).await
}

/// GET /routes/vehicles
/// Response: contents of vehicles.json, unmodified
pub async fn get_vehicles(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    info!("GET /routes/vehicles received");
    load(&state, Dataset::Vehicles).await
}

async fn load(state: &AppState, dataset: Dataset) -> Result<Json<Value>, ApiError> {
    let data = state
        .store
        .load(dataset)
        .await
        .map_err(|source| ApiError::DataLoad { dataset, source })?;

    info!("Loaded {} {} records", record_count(&data), dataset);

    Ok(Json(data))
}
