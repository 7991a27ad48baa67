use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};

use super::{AppState, RunRequest};

/// GET /health — liveness only
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET / — empty form
pub(super) async fn handle_index(State(state): State<AppState>) -> Response {
    render_page(&state, "", "")
}

/// POST / — form submit, re-renders the page with the result
pub(super) async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<RunRequest>,
) -> Response {
    let output = state.runner.run(&form.command).await;
    render_page(&state, &form.command, &output)
}

/// POST /api/run — JSON in, JSON out
pub(super) async fn handle_run(
    State(state): State<AppState>,
    body: Result<Json<RunRequest>, axum::extract::rejection::JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(e) => {
            let err = serde_json::json!({
                "error": format!("Invalid JSON: {e}. Expected: {{\"command\": \"...\"}}")
            });
            return (StatusCode::BAD_REQUEST, Json(err)).into_response();
        }
    };

    let output = state.runner.run(&request.command).await;
    Json(serde_json::json!({ "output": output })).into_response()
}

fn render_page(state: &AppState, command: &str, output: &str) -> Response {
    match state.page.render(command, output) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "gateway: failed to render form page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
