use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use super::errors::StorageError;
use super::storage::KeyValueStorage;

/// Redis-backed storage; every key maps to a plain string value.
#[derive(Clone)]
pub struct RedisStorage {
    connection: MultiplexedConnection,
}

impl RedisStorage {
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(url)?;
        let connection = client.get_multiplexed_async_connection().await?;

        tracing::info!(url = %url, "Connected to Redis storage");

        Ok(Self { connection })
    }
}

#[async_trait]
impl KeyValueStorage for RedisStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut connection = self.connection.clone();
        let value: Option<String> = connection.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut connection = self.connection.clone();
        connection.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
