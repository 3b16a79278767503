use actix_web::http::header::ContentType;
use actix_web::{post, web, HttpResponse};
use textbrief_llm::{OutputFormat, SummaryRequest};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::SummarizeForm;

/// Summarize submitted text, answering in plain text
#[post("/summarize")]
pub async fn summarize(
    form: web::Form<SummarizeForm>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let format = form
        .format
        .as_deref()
        .map(OutputFormat::parse_lenient)
        .unwrap_or_default();
    let request = SummaryRequest::new(&form.text, format)?;

    info!(
        "Summarize request - {} chars, format: {}",
        request.text.chars().count(),
        request.format
    );

    let summary = state.summarizer.summarize_request(&request).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(summary))
}
