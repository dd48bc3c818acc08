//! Web shell for the status-bot.
//!
//! A single-form front end: `GET /` serves an embedded HTML page, and
//! `POST /query` accepts `{"query": ...}` and returns `{"response": ...}`
//! with the formatter text relayed verbatim.

use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{base::types::Void, interaction::query, runtime::Runtime};

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><title>status-bot</title></head>
<body>
<h1>status-bot</h1>
<p>Ask about a Jira ticket's status, a PR's reviewers or comments, open PRs, or blocked tickets.</p>
<form id="query-form">
  <input id="query" size="60" placeholder="e.g. status of PROJ-123" autofocus>
  <button>Ask</button>
</form>
<pre id="response"></pre>
<script>
document.getElementById('query-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const result = await fetch('/query', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ query: document.getElementById('query').value }),
  });
  document.getElementById('response').textContent = (await result.json()).response;
});
</script>
</body>
</html>
"#;

/// Inbound query payload.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

/// Outbound response payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Build the axum application for the web shell.
pub fn app(runtime: Runtime) -> Router {
    Router::new().route("/", get(index)).route("/query", post(handle_query)).with_state(runtime)
}

/// Bind and serve the web shell until the process is stopped.
pub async fn serve(runtime: Runtime) -> Void {
    let address = format!("{}:{}", runtime.config.server_host, runtime.config.server_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("Serving on http://{address}");

    axum::serve(listener, app(runtime)).await?;

    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[instrument(skip_all)]
async fn handle_query(State(runtime): State<Runtime>, Json(request): Json<QueryRequest>) -> Json<QueryResponse> {
    let response = query::handle_query(&runtime, &request.query).await;

    Json(QueryResponse { response })
}
