use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const EVENT_ID: &str = "0e1aad23-21e0-477b-953a-27fb8a82a19a";

/// How the stand-in API answers every request
#[derive(Clone, Copy, Debug)]
pub enum Behavior {
    Serve,
    Fail,
    Garbage,
}

#[derive(Clone)]
struct ApiState {
    behavior: Behavior,
    attendees: Arc<Vec<serde_json::Value>>,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// In-process attendee API with `count` attendees, pages of 10
pub struct AttendeeApi {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl AttendeeApi {
    pub async fn start(count: usize, behavior: Behavior) -> Self {
        let attendees = (1..=count)
            .map(|i| {
                json!({
                    "id": i.to_string(),
                    "name": if i % 5 == 0 { format!("Alice {i}") } else { format!("Bruno {i}") },
                    "email": format!("attendee{i}@example.com"),
                    "createdAt": "2024-04-01T12:00:00.000Z",
                    "checkedInAt": if i % 2 == 0 { json!("2024-04-02T08:30:00.000Z") } else { json!(null) },
                })
            })
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = ApiState {
            behavior,
            attendees: Arc::new(attendees),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/events/:event_id/attendees", get(list_attendees))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Query parameters of every request received so far
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn list_attendees(
    State(state): State<ApiState>,
    Path(event_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().unwrap().push(params.clone());

    match state.behavior {
        Behavior::Fail => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Behavior::Garbage => return "not json".into_response(),
        Behavior::Serve => {}
    }
    if event_id != EVENT_ID {
        return StatusCode::NOT_FOUND.into_response();
    }

    let query = params.get("query").cloned().unwrap_or_default();
    let matching: Vec<_> = state
        .attendees
        .iter()
        .filter(|a| a["name"].as_str().unwrap_or_default().contains(&query))
        .cloned()
        .collect();
    let page_index: usize = params
        .get("pageIndex")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);

    let page: Vec<_> = matching.iter().skip(page_index * 10).take(10).cloned().collect();
    Json(json!({ "attendees": page, "total": matching.len() })).into_response()
}
