use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::TrackingService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TrackingService>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateResponse {
    pub status: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SatelliteInfo {
    pub id: Uuid,
    pub name: String,
    pub norad_id: u32,
}

#[utoipa::path(
    get,
    path = "/update",
    tag = "tracking",
    responses(
        (status = 200, description = "Live state refreshed for all satellites", body = UpdateResponse)
    )
)]
pub async fn update_all(State(state): State<AppState>) -> Json<UpdateResponse> {
    state.service.update_all().await;
    Json(UpdateResponse {
        status: "updated".to_string(),
        time: Utc::now(),
    })
}

#[utoipa::path(
    get,
    path = "/satellites",
    tag = "tracking",
    responses(
        (status = 200, description = "Tracked satellites", body = [SatelliteInfo])
    )
)]
pub async fn list_satellites(State(state): State<AppState>) -> Json<Vec<SatelliteInfo>> {
    let satellites = state
        .service
        .satellites()
        .iter()
        .map(|s| SatelliteInfo {
            id: s.id,
            name: s.name.clone(),
            norad_id: s.norad_id,
        })
        .collect();
    Json(satellites)
}
