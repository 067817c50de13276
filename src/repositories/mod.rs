// ==================== USER PERSISTENCE ====================
// Seam between the service layer and the store. Handlers receive a
// `web::Data<dyn UserRepository>`, so the backend is picked once in main.

pub mod memory_user_repository;
pub mod mongo_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
pub use mongo_user_repository::MongoUserRepository;

use crate::models::{NewUser, User};
use crate::utils::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user and returns it with its freshly assigned id.
    async fn save(&self, user: NewUser) -> Result<User, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// All users in ascending id order.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Returns whether a row was actually removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap round-trip used by the health check.
    async fn ping(&self) -> Result<(), AppError>;

    /// Backend label reported by `/health`.
    fn backend(&self) -> &'static str;
}
