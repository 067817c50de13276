use super::UserRepository;
use crate::models::{NewUser, User};
use crate::utils::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Process-local store. Ids start at 1 and are never handed out twice.
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = user.with_id(id);
        self.users.write().await.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.users.write().await.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
