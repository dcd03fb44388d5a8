use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Tournament, TournamentPayload};

// GET /api/tournaments - List all tournaments
pub async fn get_tournaments(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Tournament>>, ApiError> {
    let tournaments = db::get_all_tournaments(&pool).await?;

    Ok(Json(tournaments))
}

// GET /api/tournaments/{id} - Get tournament by ID
pub async fn get_tournament_by_id(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Tournament>, ApiError> {
    let tournament = db::get_tournament_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(tournament))
}

// POST /api/tournaments - Create a tournament
//
// A body without a title is replaced by the fallback tournament rather than rejected.
pub async fn create_tournament(
    State(pool): State<SqlitePool>,
    Json(payload): Json<TournamentPayload>,
) -> Result<Json<Tournament>, ApiError> {
    let tournament = payload.into_tournament();
    let created = db::insert_tournament(&pool, &tournament).await?;

    tracing::info!("Created tournament {:?}: {}", created.id, created.title);
    Ok(Json(created))
}
