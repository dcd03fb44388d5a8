use serde::{Deserialize, Serialize};

/// A tournament row as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: Option<i64>,
    pub title: String,
    pub game_name: String,
    pub date: String,
    pub prize_pool: f64,
    pub status: String,
    pub description: String,
}

impl Tournament {
    /// Build an unsaved tournament; the id is assigned on insert
    pub fn new(
        title: &str,
        game_name: &str,
        date: &str,
        prize_pool: f64,
        status: &str,
        description: &str,
    ) -> Self {
        Tournament {
            id: None,
            title: title.to_string(),
            game_name: game_name.to_string(),
            date: date.to_string(),
            prize_pool,
            status: status.to_string(),
            description: description.to_string(),
        }
    }

    /// Record substituted for a create request that carries no title
    pub fn fallback() -> Self {
        Tournament::new(
            "Spring Showdown 2025",
            "Rocket League",
            "2025-05-01",
            2500.0,
            "Upcoming",
            "3v3, Double Elimination",
        )
    }
}

/// Request body for POST /api/tournaments
///
/// Every field may be missing or `null` on the wire. A client-supplied `id`
/// is not part of this type and is dropped during deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentPayload {
    pub title: Option<String>,
    pub game_name: Option<String>,
    pub date: Option<String>,
    pub prize_pool: Option<f64>,
    pub status: Option<String>,
    pub description: Option<String>,
}

impl TournamentPayload {
    /// Resolve the record to insert. A missing or empty title discards the
    /// whole payload in favour of [`Tournament::fallback`].
    pub fn into_tournament(self) -> Tournament {
        match self.title {
            Some(title) if !title.is_empty() => Tournament {
                id: None,
                title,
                game_name: self.game_name.unwrap_or_default(),
                date: self.date.unwrap_or_default(),
                prize_pool: self.prize_pool.unwrap_or_default(),
                status: self.status.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
            },
            _ => Tournament::fallback(),
        }
    }
}
