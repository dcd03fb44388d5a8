use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::models::Tournament;

/// Open a pool against `database_url`, creating the SQLite file if needed
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// AUTOINCREMENT keeps ids from being reused after `delete_all_tournaments`
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS tournaments (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               title TEXT NOT NULL,
               game_name TEXT NOT NULL,
               date TEXT NOT NULL,
               prize_pool REAL NOT NULL,
               status TEXT NOT NULL,
               description TEXT NOT NULL
           )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

// Tournament queries
pub async fn insert_tournament(pool: &SqlitePool, tournament: &Tournament) -> Result<Tournament, sqlx::Error> {
    sqlx::query_as::<_, Tournament>(
        r#"INSERT INTO tournaments (title, game_name, date, prize_pool, status, description)
           VALUES (?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(&tournament.title)
    .bind(&tournament.game_name)
    .bind(&tournament.date)
    .bind(tournament.prize_pool)
    .bind(&tournament.status)
    .bind(&tournament.description)
    .fetch_one(pool)
    .await
}

pub async fn get_all_tournaments(pool: &SqlitePool) -> Result<Vec<Tournament>, sqlx::Error> {
    sqlx::query_as::<_, Tournament>(
        r#"SELECT * FROM tournaments ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_tournament_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Tournament>, sqlx::Error> {
    sqlx::query_as::<_, Tournament>(
        r#"SELECT * FROM tournaments WHERE id = ?"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Remove every tournament. Only the startup seeder calls this.
pub async fn delete_all_tournaments(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM tournaments"#)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// In-memory database shared by the unit tests. A single connection that
/// never expires keeps the database alive for the life of the pool.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    init_schema(&pool).await.expect("Failed to create schema");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_id_and_round_trips() {
        let pool = test_pool().await;
        let draft = Tournament::new("Night Cup", "Dota 2", "2025-08-01", 1200.5, "Upcoming", "5v5");

        let stored = insert_tournament(&pool, &draft).await.unwrap();
        let id = stored.id.expect("stored tournament has an id");
        assert_eq!(Tournament { id: None, ..stored.clone() }, draft);

        let fetched = get_tournament_by_id(&pool, id).await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_missing_id_is_none() {
        let pool = test_pool().await;
        assert_eq!(get_tournament_by_id(&pool, 999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_all_is_ordered_by_id() {
        let pool = test_pool().await;
        assert!(get_all_tournaments(&pool).await.unwrap().is_empty());

        let first = insert_tournament(&pool, &Tournament::fallback()).await.unwrap();
        let second = insert_tournament(&pool, &Tournament::fallback()).await.unwrap();
        assert!(second.id > first.id);

        let all = get_all_tournaments(&pool).await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_delete_all_does_not_reuse_ids() {
        let pool = test_pool().await;
        let before = insert_tournament(&pool, &Tournament::fallback()).await.unwrap();

        assert_eq!(delete_all_tournaments(&pool).await.unwrap(), 1);
        assert!(get_all_tournaments(&pool).await.unwrap().is_empty());

        let after = insert_tournament(&pool, &Tournament::fallback()).await.unwrap();
        assert!(after.id > before.id);
    }
}
