use actix_files::NamedFile;
use actix_web::{get, web};
use textbrief_common::BriefError;
use tracing::error;

use crate::error::ApiError;
use crate::state::AppState;

/// Serve the HTML form
#[get("/")]
pub async fn index(state: web::Data<std::sync::Arc<AppState>>) -> Result<NamedFile, ApiError> {
    let path = &state.config.template_path;

    NamedFile::open_async(path).await.map_err(|e| {
        error!("Failed to open template {}: {}", path.display(), e);
        ApiError(BriefError::internal(format!("Template unavailable: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use std::path::PathBuf;
    use textbrief_common::AppConfig;

    use crate::routes::{configure, form_config};
    use crate::routes::test_support::{state_with, StubModel};

    fn config_with_template(path: PathBuf) -> AppConfig {
        AppConfig {
            template_path: path,
            ..AppConfig::default()
        }
    }

    #[actix_web::test]
    async fn test_index_serves_template() {
        let template = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates/index.html");
        let state = state_with(StubModel::replying("x"), config_with_template(template));
        let limit = state.config.max_form_bytes;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(form_config(limit))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("/summarize"));
    }

    #[actix_web::test]
    async fn test_index_missing_template() {
        let state = state_with(
            StubModel::replying("x"),
            config_with_template(PathBuf::from("/nonexistent/index.html")),
        );
        let limit = state.config.max_form_bytes;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(form_config(limit))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
