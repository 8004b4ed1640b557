//! Fake SPARQL endpoint for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1 and serves `GET /repositories/education`. Responses are popped
//! from a queue; once it is empty every request gets an empty result set.

use axum::{
    extract::{Query, State},
    http::{header::ACCEPT, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const EMPTY_RESULTS: &str = r#"{"head":{"vars":[]},"results":{"bindings":[]}}"#;

/// A canned reply
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(StatusCode, String),
    /// Wait before answering with an empty result set
    Delay(Duration),
}

/// What the endpoint saw for one request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub query: Option<String>,
    pub accept: Option<String>,
}

#[derive(Default)]
struct EndpointState {
    replies: VecDeque<Reply>,
    requests: Vec<RecordedRequest>,
}

/// Handle to the running fake endpoint
pub struct FakeSparqlEndpoint {
    addr: SocketAddr,
    state: Arc<Mutex<EndpointState>>,
}

impl FakeSparqlEndpoint {
    /// Start the endpoint on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(EndpointState::default()));

        let app = Router::new()
            .route("/repositories/education", get(sparql))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Query endpoint URL
    pub fn endpoint(&self) -> String {
        format!("http://{}/repositories/education", self.addr)
    }

    pub async fn push(&self, reply: Reply) {
        self.state.lock().await.replies.push_back(reply);
    }

    pub async fn push_json(&self, status: StatusCode, body: &str) {
        self.push(Reply::Respond(status, body.to_string())).await;
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }
}

async fn sparql(
    State(state): State<Arc<Mutex<EndpointState>>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let reply = {
        let mut state = state.lock().await;
        state.requests.push(RecordedRequest {
            query: params.get("query").cloned(),
            accept: headers
                .get(ACCEPT)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
        state.replies.pop_front()
    };

    match reply {
        Some(Reply::Respond(status, body)) => (status, body),
        Some(Reply::Delay(delay)) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, EMPTY_RESULTS.to_string())
        }
        None => (StatusCode::OK, EMPTY_RESULTS.to_string()),
    }
}
