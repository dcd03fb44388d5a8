use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::models::Tournament;

/// Demonstration tournaments loaded at startup
pub fn seed_tournaments() -> Vec<Tournament> {
    vec![
        Tournament::new("Winter Clash 2025", "Valorant", "2025-03-10", 5000.0, "Upcoming", "5v5, Best of 3, Open to all"),
        Tournament::new("Apex Legends Showdown", "Apex Legends", "2025-02-20", 3000.0, "Completed", "Trios, $1000 per player"),
        Tournament::new("CS:GO Pro League", "CS:GO", "2025-04-01", 10000.0, "Upcoming", "5v5, Bracket Style"),
        Tournament::new("Summer Brawl", "Fortnite", "2025-06-15", 7500.0, "Upcoming", "Solo, Battle Royale"),
        Tournament::new("Fall Finals", "Overwatch", "2024-11-30", 4000.0, "Completed", "6v6, Best of 5"),
    ]
}

/// Wipe the table and insert the demonstration set.
///
/// Runs on every boot, so anything created through the API is lost on
/// restart. A failure midway leaves whatever rows were already written.
pub async fn run(pool: &SqlitePool) -> Result<Vec<Tournament>, sqlx::Error> {
    let removed = db::delete_all_tournaments(pool).await?;
    tracing::debug!("Cleared {} existing tournaments", removed);

    let mut inserted = Vec::new();
    for tournament in seed_tournaments() {
        inserted.push(db::insert_tournament(pool, &tournament).await?);
    }

    tracing::info!("Seeded {} tournaments", inserted.len());
    Ok(inserted)
}
