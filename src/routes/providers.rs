use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    CategoriesResponse, Category, ErrorResponse, HealthResponse, RankProvidersRequest,
    RankProvidersResponse,
};
use crate::services::ProviderCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProviderCatalog>,
    pub matcher: Matcher,
}

/// Configure all provider-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categories", web::get().to(list_categories))
        .route("/providers/rank", web::post().to(rank_providers));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_providers: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Category keys understood by a dedicated scorer
async fn list_categories() -> impl Responder {
    HttpResponse::Ok().json(CategoriesResponse {
        categories: Category::ALL.iter().map(|c| c.key().to_string()).collect(),
    })
}

/// Rank providers endpoint
///
/// POST /api/v1/providers/rank
///
/// Request body:
/// ```json
/// {
///   "category": "restaurants-cafes",
///   "answers": { "cuisine": "mexican" },
///   "providersByCategory": { "restaurants-cafes": [ ... ] }
/// }
/// ```
async fn rank_providers(
    state: web::Data<AppState>,
    req: web::Json<RankProvidersRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let providers_by_category = req
        .providers_by_category
        .as_ref()
        .unwrap_or_else(|| state.catalog.providers());

    tracing::info!(
        "Ranking category {} with {} answers",
        req.category,
        req.answers.selected().count()
    );

    let providers = state
        .matcher
        .score_providers(&req.category, &req.answers, providers_by_category);

    let response = RankProvidersResponse {
        total_results: providers.len(),
        category: req.category,
        providers,
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Provider, ProvidersByCategory};
    use actix_web::{test, App};

    fn state() -> AppState {
        let mut providers = ProvidersByCategory::new();
        providers.insert(
            "real-estate".to_string(),
            vec![
                Provider::new("agent", "Agent", "real-estate").with_tags(["buy"]),
                Provider::new("stager", "Stager", "real-estate").with_tags(["stager"]),
            ],
        );

        AppState {
            catalog: Arc::new(ProviderCatalog::new(providers)),
            matcher: Matcher::with_default_weights(),
        }
    }

    #[actix_web::test]
    async fn test_rank_uses_server_catalog() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/providers/rank")
            .set_json(serde_json::json!({ "category": "real-estate", "answers": { "need": "buy" } }))
            .to_request();
        let resp: RankProvidersResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_results, 1);
        assert_eq!(resp.providers[0].id, "agent");
    }

    #[actix_web::test]
    async fn test_rank_rejects_empty_category() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/providers/rank")
            .set_json(serde_json::json!({ "category": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_reports_catalog_size() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.catalog_providers, 2);
    }
}
