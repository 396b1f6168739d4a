use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::state::app_state::AppState;
use taxi_charts::{render_dashboard, render_page, Selection};

/// Raw control values from the page. Validation happens in `Selection::parse`
/// so that bad values come back as a JSON error instead of a query rejection.
#[derive(Deserialize, Debug, Default)]
pub struct ChartQuery {
    pub day: Option<String>,
    pub pas_pay: Option<String>,
    pub km: Option<String>,
    pub week: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

/// =======================
/// ROUTER
/// =======================

pub fn dashboard_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/layout", get(layout))
        .route("/api/charts", get(charts))
        .with_state(state)
}

/// =======================
/// HANDLERS
/// =======================

async fn index_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.layout))
}

async fn layout(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.layout.as_ref().clone())
}

async fn charts(State(state): State<AppState>, Query(query): Query<ChartQuery>) -> Response {
    debug!(
        "Chart update: day={:?}, pas_pay={:?}, km={:?}, week={:?}",
        query.day, query.pas_pay, query.km, query.week
    );

    let selection = match Selection::parse(
        query.day.as_deref(),
        query.pas_pay.as_deref(),
        query.km.as_deref(),
        query.week.as_deref(),
    ) {
        Ok(s) => s,
        Err(e) => {
            warn!("Rejected selection: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    Json(render_dashboard(&state.dataset, &selection)).into_response()
}
