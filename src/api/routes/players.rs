use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::parse_list;
use crate::api::state::AppState;
use crate::filter::MatchFilter;
use crate::views::PlayersView;

#[derive(Debug, Deserialize)]
pub struct PlayersParams {
    pub players: Option<String>,
    pub tournaments: Option<String>,
}

/// Player win rates, plus matchups when exactly one player is selected.
pub async fn players(
    State(state): State<AppState>,
    Query(params): Query<PlayersParams>,
) -> Json<PlayersView> {
    let filter = MatchFilter::new()
        .with_players(parse_list(params.players.as_deref()))
        .with_tournaments(parse_list(params.tournaments.as_deref()));

    Json(PlayersView::build(&state.matches, &filter))
}
