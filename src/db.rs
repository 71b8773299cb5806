use anyhow::Context;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

/// Open the process-wide connection pool.
///
/// Connects eagerly so a misconfigured or unreachable database fails the
/// process at startup instead of on the first request.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Create the tables the service needs if they do not exist yet.
/// Safe to run on every startup.
pub async fn ensure_schema(db: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;
    Ok(())
}
