// Usuários no MongoDB: coleção `users` com `_id` numérico.
// Ids saem da coleção `counters` ({ _id: "users", seq }) via $inc atômico.

use super::UserRepository;
use crate::database::MongoDB;
use crate::models::{NewUser, User};
use crate::utils::error::AppError;
use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use serde::Deserialize;

const USERS: &str = "users";
const COUNTERS: &str = "counters";

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

pub struct MongoUserRepository {
    db: MongoDB,
}

impl MongoUserRepository {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    /// Reserva o próximo id da sequência (cria o contador no primeiro uso)
    async fn next_id(&self) -> Result<i64, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .db
            .collection::<Counter>(COUNTERS)
            .find_one_and_update(doc! { "_id": USERS }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("User id counter not returned".to_string()))?;

        Ok(counter.seq)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn save(&self, user: NewUser) -> Result<User, AppError> {
        let id = self.next_id().await?;
        let user = user.with_id(id);

        self.db
            .collection::<User>(USERS)
            .insert_one(&user)
            .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = self
            .db
            .collection::<User>(USERS)
            .find_one(doc! { "_id": id })
            .await?;

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let mut cursor = self
            .db
            .collection::<User>(USERS)
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?;

        let mut users = Vec::new();
        while let Some(result) = cursor.next().await {
            users.push(result?);
        }

        Ok(users)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = self
            .db
            .collection::<Document>(USERS)
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn connect() -> MongoUserRepository {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/users_db_test".to_string());
        let db = MongoDB::new(&uri).await.expect("MongoDB must be running");
        MongoUserRepository::new(db)
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_save_find_delete_roundtrip() {
        let repo = connect().await;

        let first = repo
            .save(NewUser { name: "Ana".to_string(), email: "ana@mail.com".to_string() })
            .await
            .unwrap();
        let second = repo
            .save(NewUser { name: "Beto".to_string(), email: "beto@mail.com".to_string() })
            .await
            .unwrap();
        assert!(second.id > first.id);

        assert_eq!(repo.find_by_id(first.id).await.unwrap(), Some(first.clone()));

        let all = repo.find_all().await.unwrap();
        let pos_first = all.iter().position(|u| u.id == first.id).unwrap();
        let pos_second = all.iter().position(|u| u.id == second.id).unwrap();
        assert!(pos_first < pos_second);

        assert!(repo.delete_by_id(first.id).await.unwrap());
        assert!(!repo.delete_by_id(first.id).await.unwrap());
        assert!(repo.delete_by_id(second.id).await.unwrap());
        assert!(repo.ping().await.is_ok());
    }
}
