//! Schema migrations for the trivia tables

use sqlx::PgPool;

use super::repos::DbError;

/// Create the `categories` and `questions` tables if they are missing.
///
/// `questions.category` is a plain integer with no foreign key: questions
/// may name a category that does not exist.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT,
            answer TEXT,
            category INTEGER,
            difficulty INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}
