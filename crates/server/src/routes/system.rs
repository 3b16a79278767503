use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness probe; does not call the model
#[get("/health")]
pub async fn health(state: web::Data<std::sync::Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        model: state.summarizer.model_name().to_string(),
    }))
}
