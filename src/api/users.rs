use actix_web::{http::header::ContentType, web, Either, HttpResponse};
use crate::models::NewUser;
use crate::repositories::UserRepository;
use crate::services::user_service;
use crate::utils::{error::AppError, html};

pub const GREETING: &str = "Hola";
pub const USER_SAVED: &str = "Se grabó el nuevo user.";
pub const USER_DELETED: &str = "Deleted";

fn plain_text(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}

fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn internal_error(context: &str, e: AppError) -> HttpResponse {
    log::error!("❌ {}: {}", context, e);
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body(format!("{}: {}", context, e))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Users",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn greet() -> HttpResponse {
    plain_text(GREETING)
}

/// GET /all - tabela HTML com todos os usuários
#[utoipa::path(
    get,
    path = "/all",
    tag = "Users",
    responses(
        (status = 200, description = "HTML table with every user, ordered by id", body = String, content_type = "text/html"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn get_all_users(repo: web::Data<dyn UserRepository>) -> HttpResponse {
    log::info!("📋 GET /all");

    match user_service::list_users(repo.get_ref()).await {
        Ok(users) => html_page(html::render_users_table(&users)),
        Err(e) => internal_error("Error listing users", e),
    }
}

/// GET /{id} - tabela com uma linha; `-` em todas as células se não existir
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "HTML table with the user, or a placeholder row when absent", body = String, content_type = "text/html"),
        (status = 400, description = "Id is not a number"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn find_user_by_id(
    repo: web::Data<dyn UserRepository>,
    id: web::Path<i64>,
) -> HttpResponse {
    let id = id.into_inner();
    log::info!("🔍 GET /{}", id);

    match user_service::find_user(repo.get_ref(), id).await {
        Ok(user) => html_page(html::render_user_lookup(user.as_ref())),
        Err(e) => internal_error("Error fetching user", e),
    }
}

/// POST /add?name=&email= - aceita também corpo form-urlencoded
#[utoipa::path(
    post,
    path = "/add",
    tag = "Users",
    params(NewUser),
    responses(
        (status = 200, description = "User saved", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing name or email"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn add_user(
    repo: web::Data<dyn UserRepository>,
    params: Either<web::Query<NewUser>, web::Form<NewUser>>,
) -> HttpResponse {
    let request = match params {
        Either::Left(query) => query.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    log::info!("📝 POST /add - {}", request.name);

    match user_service::add_user(repo.get_ref(), request).await {
        Ok(_) => plain_text(USER_SAVED),
        Err(e) => internal_error("Error saving user", e),
    }
}

#[utoipa::path(
    post,
    path = "/delete/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted (also when it did not exist)", body = String, content_type = "text/plain"),
        (status = 400, description = "Id is not a number"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn delete_user(
    repo: web::Data<dyn UserRepository>,
    id: web::Path<i64>,
) -> HttpResponse {
    let id = id.into_inner();
    log::info!("🗑️  POST /delete/{}", id);

    match user_service::delete_user(repo.get_ref(), id).await {
        Ok(()) => plain_text(USER_DELETED),
        Err(e) => internal_error("Error deleting user", e),
    }
}
