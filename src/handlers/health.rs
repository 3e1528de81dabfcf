use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    timestamp: String,
}

pub async fn health_check() -> impl Responder {
    // Liveness only - deliberately independent of the upstream provider
    let response = HealthResponse {
        status: "OK".to_string(),
        service: "OneClickToKnow API".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
