use utoipa::OpenApi;

use super::handlers::{SatelliteInfo, UpdateResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::update_all, super::handlers::list_satellites),
    components(schemas(UpdateResponse, SatelliteInfo)),
    info(
        title = "Sat-Watch API",
        description = "Satellite tracking and pass prediction",
        version = "0.1.0"
    ),
    tags(
        (name = "tracking", description = "Live tracking and satellite registry")
    )
)]
pub struct ApiDoc;
