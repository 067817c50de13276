// ==================== USER SERVICE ====================
// Regras (poucas) entre os handlers HTTP e o repositório

use crate::{
    models::{NewUser, User},
    repositories::UserRepository,
    utils::error::AppError,
};

pub async fn add_user(repo: &dyn UserRepository, request: NewUser) -> Result<User, AppError> {
    log::info!("📝 Saving new user '{}'", request.name);

    let user = repo.save(request).await?;

    log::info!("✅ User saved with id {}", user.id);
    Ok(user)
}

/// Delete is idempotent: an absent id is not an error.
pub async fn delete_user(repo: &dyn UserRepository, id: i64) -> Result<(), AppError> {
    if repo.delete_by_id(id).await? {
        log::info!("🗑️  User {} deleted", id);
    } else {
        log::debug!("ℹ️  User {} not found, nothing to delete", id);
    }
    Ok(())
}

pub async fn find_user(repo: &dyn UserRepository, id: i64) -> Result<Option<User>, AppError> {
    let user = repo.find_by_id(id).await?;
    if user.is_none() {
        log::debug!("ℹ️  User {} not found", id);
    }
    Ok(user)
}

pub async fn list_users(repo: &dyn UserRepository) -> Result<Vec<User>, AppError> {
    let users = repo.find_all().await?;
    log::info!("📋 Retrieved {} users", users.len());
    Ok(users)
}
