use sqlx::MySqlPool;

use crate::users::repo_types::User;

impl User {
    /// Insert a new user and read the stored row back.
    ///
    /// The insert runs inside a transaction; if the commit fails or the
    /// request is dropped mid-flight, the transaction rolls back and no
    /// row survives. After commit the row is selected again by its
    /// generated id so the caller gets exactly what was persisted.
    ///
    /// There is no unique index on email: submitting the same payload
    /// twice creates two rows.
    pub async fn create(db: &MySqlPool, name: &str, email: &str) -> Result<User, sqlx::Error> {
        let mut tx = db.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (name, email)
            VALUES (?, ?)
            "#,
        )
        .bind(name)
        .bind(email)
        .execute(&mut *tx)
        .await?;
        let id = inserted.last_insert_id() as i64;

        tx.commit().await?;

        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(db)
        .await
    }

    /// Fetch every user. No ORDER BY: callers must not rely on row order.
    pub async fn list_all(db: &MySqlPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            "#,
        )
        .fetch_all(db)
        .await
    }
}
