use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

use super::StoreError;

// ============================================================================
// Schema - versioned migrations embedded from ./migrations
// ============================================================================

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply every pending migration; already applied versions are skipped
pub async fn migrate(pool: &SqlitePool) -> Result<(), StoreError> {
    MIGRATOR.run(pool).await?;

    tracing::info!(migrations = MIGRATOR.iter().count(), "Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn test_migrate_creates_tables_and_index() {
        let pool = db::connect_in_memory().await.unwrap();
        migrate(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('orders', 'order_items') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["order_items".to_string(), "orders".to_string()]);

        let index: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND name = 'idx_order_items_order_id'",
        )
        .fetch_optional(&pool)
        .await
        .unwrap();
        assert!(index.is_some());
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let pool = db::connect_in_memory().await.unwrap();
        migrate(&pool).await.unwrap();
        migrate(&pool).await.unwrap();

        let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(applied, 1);
    }

    #[tokio::test]
    async fn test_stale_orders_table_fails_migration() {
        let pool = db::connect_in_memory().await.unwrap();
        sqlx::query("CREATE TABLE orders (id TEXT PRIMARY KEY, status TEXT)")
            .execute(&pool)
            .await
            .unwrap();

        let err = migrate(&pool).await.unwrap_err();
        assert!(matches!(err, StoreError::Migration(_)));
    }

    #[tokio::test]
    async fn test_orphan_item_is_rejected() {
        let pool = db::connect_in_memory().await.unwrap();
        migrate(&pool).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO order_items (id, order_id, size, pizza) VALUES ('i1', 'missing', 'Small', 'Veggie')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}
