use mongodb::{Client, Collection, Database};
use std::error::Error;

/// Nome padrão caso a URI não traga o banco no path
const DEFAULT_DB_NAME: &str = "users_db";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);  // Max 20 conexões simultâneas
        client_options.min_pool_size = Some(5);   // Mantém 5 conexões sempre vivas
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));  // 5min idle

        // Timeouts
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        let db = client.database(database_name(uri));

        // Test connection
        db.list_collection_names().await?;

        Ok(Self { db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Extrai o nome do banco do último segmento da URI (antes de `?`)
pub fn database_name(uri: &str) -> &str {
    let without_scheme = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);

    without_scheme
        .split_once('/')
        .map(|(_, path)| path)
        .and_then(|path| path.split('?').next())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DB_NAME)
}
