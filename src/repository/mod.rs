use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Item, ItemRecord},
};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryItemRepository;
pub use postgres::PgItemRepository;

/// Storage contract for items.
///
/// Lookups by an unknown identifier are not errors at this layer: `get`
/// returns `None` and `update`/`delete` return `false`, and the HTTP layer
/// turns those into 404 responses.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn init(&self) -> AppResult<()>;
    async fn create(&self, item: Item) -> AppResult<i64>;
    async fn list(&self) -> AppResult<Vec<ItemRecord>>;
    async fn get(&self, id: i64) -> AppResult<Option<ItemRecord>>;
    async fn update(&self, id: i64, item: Item) -> AppResult<bool>;
    async fn delete(&self, id: i64) -> AppResult<bool>;

    async fn close(&self) {}
}
