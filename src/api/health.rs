use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::repositories::UserRepository;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub storage: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service status; `degraded` when storage is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(repo: web::Data<dyn UserRepository>) -> impl Responder {
    let status = match repo.ping().await {
        Ok(()) => "healthy",
        Err(e) => {
            log::warn!("⚠️  Storage ping failed: {}", e);
            "degraded"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: repo.backend().to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserRepository;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_health_with_memory_storage() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "user-crud-service");
        assert_eq!(body.storage, "memory");
        assert!(body.timestamp > 0);
    }
}
