// In-process WebDriver stand-in for runtime integration tests.
//
// Serves the handful of W3C endpoints the runtime uses and records every
// command it receives so tests can assert on the exact sequence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Default)]
pub struct FakeDriverState {
	/// Locator value -> element id.
	pub elements: HashMap<String, String>,
	pub title: String,
	pub log: Vec<String>,
}

pub type SharedState = Arc<Mutex<FakeDriverState>>;

pub struct TestServer {
	url: String,
	state: SharedState,
	handle: JoinHandle<()>,
}

impl TestServer {
	pub async fn start() -> Self {
		let state: SharedState = Arc::new(Mutex::new(FakeDriverState::default()));
		let app = Router::new()
			.route("/status", get(status))
			.route("/session", post(new_session))
			.route("/session/{sid}", delete(delete_session))
			.route("/session/{sid}/url", post(navigate))
			.route("/session/{sid}/title", get(title))
			.route("/session/{sid}/element", post(find_element))
			.route("/session/{sid}/element/{eid}/{action}", post(element_action))
			.with_state(Arc::clone(&state));

		let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind test server");
		let addr = listener.local_addr().expect("Failed to read local addr");
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("test server failed");
		});

		Self {
			url: format!("http://{addr}"),
			state,
			handle,
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub fn add_element(&self, locator_value: &str, id: &str) {
		self.state.lock().unwrap().elements.insert(locator_value.to_string(), id.to_string());
	}

	pub fn set_title(&self, title: &str) {
		self.state.lock().unwrap().title = title.to_string();
	}

	pub fn log(&self) -> Vec<String> {
		self.state.lock().unwrap().log.clone()
	}

	pub fn shutdown(self) {
		self.handle.abort();
	}
}

async fn status() -> Json<Value> {
	Json(json!({ "value": { "ready": true, "message": "fake driver ready" } }))
}

async fn new_session(State(state): State<SharedState>, Json(body): Json<Value>) -> Json<Value> {
	let args = body["capabilities"]["alwaysMatch"]["goog:chromeOptions"]["args"].clone();
	state.lock().unwrap().log.push(format!("new_session {args}"));
	Json(json!({ "value": { "sessionId": "s-1", "capabilities": { "browserName": "chrome" } } }))
}

async fn delete_session(State(state): State<SharedState>, Path(sid): Path<String>) -> Json<Value> {
	state.lock().unwrap().log.push(format!("delete {sid}"));
	Json(json!({ "value": null }))
}

async fn navigate(State(state): State<SharedState>, Path(_sid): Path<String>, Json(body): Json<Value>) -> Json<Value> {
	let url = body["url"].as_str().unwrap_or_default().to_string();
	state.lock().unwrap().log.push(format!("navigate {url}"));
	Json(json!({ "value": null }))
}

async fn title(State(state): State<SharedState>, Path(_sid): Path<String>) -> Json<Value> {
	let title = state.lock().unwrap().title.clone();
	Json(json!({ "value": title }))
}

async fn find_element(State(state): State<SharedState>, Path(_sid): Path<String>, Json(body): Json<Value>) -> Response {
	let value = body["value"].as_str().unwrap_or_default().to_string();
	let found = state.lock().unwrap().elements.get(&value).cloned();
	match found {
		Some(id) => Json(json!({ "value": { "element-6066-11e4-a52e-4f735466cecf": id } })).into_response(),
		None => (
			StatusCode::NOT_FOUND,
			Json(json!({ "value": { "error": "no such element", "message": format!("no element for {value}"), "stacktrace": "" } })),
		)
			.into_response(),
	}
}

async fn element_action(
	State(state): State<SharedState>,
	Path((_sid, eid, action)): Path<(String, String, String)>,
	Json(body): Json<Value>,
) -> Response {
	let mut state = state.lock().unwrap();
	if !state.elements.values().any(|id| id == &eid) {
		return (
			StatusCode::NOT_FOUND,
			Json(json!({ "value": { "error": "stale element reference", "message": "gone", "stacktrace": "" } })),
		)
			.into_response();
	}
	match action.as_str() {
		"value" => state.log.push(format!("value {eid} {}", body["text"].as_str().unwrap_or_default())),
		other => state.log.push(format!("{other} {eid}")),
	}
	Json(json!({ "value": null })).into_response()
}
