use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    error::AppResult,
    models::{Item, ItemRecord},
    repository::ItemRepository,
};

/// Process-local item store addressed by position.
///
/// Deleting an item shifts every later item down by one, so identifiers
/// handed out earlier may point at a different item afterwards.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Store preloaded with the two demo records served at `/items/0` and `/items/1`.
    pub fn seeded() -> Self {
        Self::with_items(vec![Item::new("Item One", 0.0), Item::new("Item Two", 0.0)])
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

fn position(id: i64, len: usize) -> Option<usize> {
    usize::try_from(id).ok().filter(|index| *index < len)
}

fn as_id(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn init(&self) -> AppResult<()> {
        Ok(())
    }

    async fn create(&self, item: Item) -> AppResult<i64> {
        let mut items = self.items.write().await;
        items.push(item);
        let id = as_id(items.len() - 1);
        debug!(id, "item appended");
        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<ItemRecord>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, item)| item.clone().into_record(as_id(index)))
            .collect())
    }

    async fn get(&self, id: i64) -> AppResult<Option<ItemRecord>> {
        let items = self.items.read().await;
        Ok(position(id, items.len()).map(|index| items[index].clone().into_record(id)))
    }

    async fn update(&self, id: i64, item: Item) -> AppResult<bool> {
        let mut items = self.items.write().await;
        let Some(index) = position(id, items.len()) else {
            return Ok(false);
        };

        items[index] = item;
        debug!(id, "item replaced");
        Ok(true)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut items = self.items.write().await;
        let Some(index) = position(id, items.len()) else {
            return Ok(false);
        };

        items.remove(index);
        debug!(id, remaining = items.len(), "item removed");
        Ok(true)
    }
}
