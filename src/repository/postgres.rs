use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    error::AppResult,
    models::{Item, ItemRecord},
    repository::ItemRepository,
};

const CREATE_ITEMS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    price DOUBLE PRECISION NOT NULL,
    tax DOUBLE PRECISION
)
"#;

/// Item store backed by the `items` table.
///
/// Each operation checks one connection out of the pool and runs a single
/// statement on it. The `PoolConnection` guard hands the connection back
/// when it drops, on the error path as well as the success path.
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn init(&self) -> AppResult<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_ITEMS_TABLE_SQL)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn create(&self, item: Item) -> AppResult<i64> {
        let mut conn = self.pool.acquire().await?;
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO items (name, description, price, tax)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(item.name)
        .bind(item.description)
        .bind(item.price)
        .bind(item.tax)
        .fetch_one(&mut *conn)
        .await?;

        debug!(id, "item inserted");
        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<ItemRecord>> {
        let mut conn = self.pool.acquire().await?;
        let items = sqlx::query_as::<_, ItemRecord>(
            r#"
            SELECT id, name, description, price, tax
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(items)
    }

    async fn get(&self, id: i64) -> AppResult<Option<ItemRecord>> {
        let mut conn = self.pool.acquire().await?;
        let item = sqlx::query_as::<_, ItemRecord>(
            r#"
            SELECT id, name, description, price, tax
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(item)
    }

    async fn update(&self, id: i64, item: Item) -> AppResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $1, description = $2, price = $3, tax = $4
            WHERE id = $5
            "#,
        )
        .bind(item.name)
        .bind(item.description)
        .bind(item.price)
        .bind(item.tax)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        info!("closing database pool");
        self.pool.close().await;
    }
}
