pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::{error::InternalError, http::header::ContentType, web, HttpResponse};

/// Plain-text 400 for extractor failures (bad `{id}`, missing query/form fields)
fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(format!("Bad request: {}", err));
    InternalError::from_response(err, response).into()
}

/// Registers every route. `/{id}` goes last so fixed paths win.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::FormConfig::default().error_handler(|err, _req| bad_request(err)))
        // Swagger UI + OpenAPI document
        .service(swagger::service())
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // Users
        .route("/", web::get().to(users::greet))
        .route("/all", web::get().to(users::get_all_users))
        // Resources (not bare routes) so a GET here answers 405 instead of reaching `/{id}`
        .service(web::resource("/add").route(web::post().to(users::add_user)))
        .service(web::resource("/delete/{id}").route(web::post().to(users::delete_user)))
        .route("/{id}", web::get().to(users::find_user_by_id)); // DEVE FICAR POR ÚLTIMO (catch-all)
}
