//! Redis implementation of the `ProductRepository` trait.
//!
//! Storage model: products are appended as JSON entries to a list under a
//! fixed key, and a separate counter key is `INCR`ed to produce each id.
//! The counter lives in Redis, so ids stay monotonic across process
//! restarts.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

use prodcat_core::{NewProduct, Product, ProductRepository, RepositoryError};

use crate::binding::StoreCredentials;

/// List key holding one JSON entry per product, in insertion order.
const PRODUCTS_KEY: &str = "products";

/// Counter key incremented atomically to produce each new id.
const ID_COUNTER_KEY: &str = "productid";

/// Redis-backed product store.
///
/// The connection is established once at startup and held for the process
/// lifetime. `ConnectionManager` multiplexes and is cheap to clone, so
/// each operation works on its own handle.
pub struct RedisProductRepository {
    conn: ConnectionManager,
}

impl RedisProductRepository {
    /// Connect to the store described by the binding credentials.
    ///
    /// Issues a `PING` so a wrong host or password fails here, at
    /// startup, rather than on the first request.
    pub async fn connect(credentials: &StoreCredentials) -> Result<Self, RepositoryError> {
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(credentials.host.clone(), credentials.port),
            redis: RedisConnectionInfo {
                password: Some(credentials.password.clone()),
                ..RedisConnectionInfo::default()
            },
        };

        let client = redis::Client::open(info)
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        tracing::info!(
            host = %credentials.host,
            port = credentials.port,
            "Connected to Redis product store"
        );

        Ok(Self { conn })
    }
}

#[async_trait]
impl ProductRepository for RedisProductRepository {
    async fn add(&self, product: NewProduct) -> Result<i64, RepositoryError> {
        let mut conn = self.conn.clone();

        let id: i64 = conn
            .incr(ID_COUNTER_KEY, 1)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let entry = serde_json::to_string(&product.into_product(id))
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let _: i64 = conn
            .rpush(PRODUCTS_KEY, entry)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.conn.clone();

        let entries: Vec<String> = conn
            .lrange(PRODUCTS_KEY, 0, -1)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        entries
            .iter()
            .map(|entry| {
                serde_json::from_str(entry)
                    .map_err(|e| RepositoryError::Serialization(e.to_string()))
            })
            .collect()
    }
}
