use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::parse_list;
use crate::api::state::AppState;
use crate::filter::MatchFilter;
use crate::views::TournamentsView;

#[derive(Debug, Deserialize)]
pub struct TournamentsParams {
    pub tournaments: Option<String>,
    pub players: Option<String>,
    pub races: Option<String>,
}

impl TournamentsParams {
    pub fn to_filter(&self) -> MatchFilter {
        MatchFilter::new()
            .with_tournaments(parse_list(self.tournaments.as_deref()))
            .with_players(parse_list(self.players.as_deref()))
            .with_races(parse_list(self.races.as_deref()))
    }
}

/// Race and matchup distributions for the selected tournaments, players and races.
pub async fn tournaments(
    State(state): State<AppState>,
    Query(params): Query<TournamentsParams>,
) -> Json<TournamentsView> {
    Json(TournamentsView::build(&state.matches, &params.to_filter()))
}
