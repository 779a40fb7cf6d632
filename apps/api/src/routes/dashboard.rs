use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Serves the job description form.
pub async fn dashboard_handler() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
