use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::views::OverviewView;

/// Medal table and recent results over the full dataset.
pub async fn overview(State(state): State<AppState>) -> Json<OverviewView> {
    Json(OverviewView::build(&state.matches, &state.dashboard))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::test_support::{empty_state, get_json, setup_test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_overview() {
        let app = build_router(setup_test_state());
        let (status, json) = get_json(app, "/api/overview").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_matches"], 6);

        let table = json["medal_table"].as_array().unwrap();
        assert_eq!(table[0]["player"], "Alice");
        assert_eq!(table[0]["rank"], 1);
        assert_eq!(table[0]["gold"], 1);
        assert_eq!(table[0]["race"], "z");
        assert_eq!(table[1]["player"], "Carol");
        assert_eq!(table[1]["silver"], 1);
        assert_eq!(table[2]["player"], "Bob");
        assert_eq!(table[2]["bronze"], 1);

        let recent = json["recent_results"].as_array().unwrap();
        assert_eq!(recent.len(), 5);
        // "3rd Place Match" > "2" > "10" > "1" as text
        assert_eq!(recent[0]["match_number"], "3rd Place Match");
        assert_eq!(recent[1]["match_number"], "2");
        assert_eq!(recent[2]["match_number"], "10");
    }

    #[tokio::test]
    async fn test_overview_empty() {
        let app = build_router(empty_state());
        let (status, json) = get_json(app, "/api/overview").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_matches"], 0);
        assert!(json["medal_table"].as_array().unwrap().is_empty());
        assert!(json["recent_results"].as_array().unwrap().is_empty());
    }
}
