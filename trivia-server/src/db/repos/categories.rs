//! Category repository
//!
//! Categories are read-only through the API; the only write is seeding.

use sqlx::PgPool;

use super::DbError;
use crate::models::Category;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories in id order.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(categories)
    }

    /// Get a single category by id.
    pub async fn get(&self, id: i32) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("category", id))
    }

    /// Insert categories that are not present yet, keeping existing rows.
    ///
    /// Runs in one transaction and moves the id sequence past the highest
    /// id so later inserts without an explicit id do not collide.
    /// Returns how many rows were inserted.
    pub async fn seed(&self, categories: &[Category]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for category in categories {
            inserted += sqlx::query(
                "INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
            )
            .bind(category.id)
            .bind(&category.kind)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('categories', 'id'),
                GREATEST((SELECT MAX(id) FROM categories), 1)
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use crate::models::default_categories;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seed_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let repo = CategoryRepo::new(&pool);
        repo.seed(&default_categories()).await.expect("seed failed");
        let again = repo.seed(&default_categories()).await.expect("reseed failed");
        assert_eq!(again, 0);

        let science = repo.get(1).await.expect("category 1 missing");
        assert_eq!(science.kind, "Science");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_category_is_not_found() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let err = CategoryRepo::new(&pool).get(-1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "category", .. }));
    }
}
