#![allow(dead_code)]

use axum::{
    Router,
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;
use weather_api::application::services::WeatherService;
use weather_api::infrastructure::cache::{MemoryCache, WeatherCache};
use weather_api::infrastructure::provider::{RetryPolicy, WeatherApiClient};
use weather_api::routes::app_router;
use weather_api::state::AppState;

pub const TEST_API_KEY: &str = "test-api-key";

/// A scripted provider response.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

struct FakeState {
    calls: AtomicUsize,
    script: Vec<Reply>,
    delay: Duration,
    cities: Mutex<Vec<String>>,
    keys: Mutex<Vec<String>>,
}

/// Local stand-in for the WeatherAPI.com `current.json` endpoint.
///
/// The n-th call receives the n-th scripted reply; the last reply repeats.
pub struct FakeProvider {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeProvider {
    pub async fn start(script: Vec<Reply>) -> Self {
        Self::start_with_delay(script, Duration::ZERO).await
    }

    pub async fn start_with_delay(script: Vec<Reply>, delay: Duration) -> Self {
        let state = Arc::new(FakeState {
            calls: AtomicUsize::new(0),
            script,
            delay,
            cities: Mutex::new(Vec::new()),
            keys: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/current.json", get(current))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/v1/current.json", self.addr)).unwrap()
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn queried_cities(&self) -> Vec<String> {
        self.state.cities.lock().unwrap().clone()
    }

    pub fn received_keys(&self) -> Vec<String> {
        self.state.keys.lock().unwrap().clone()
    }
}

async fn current(State(state): State<Arc<FakeState>>, RawQuery(query): RawQuery) -> Response {
    let n = state.calls.fetch_add(1, Ordering::SeqCst);

    if let Some(query) = query {
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match name.as_ref() {
                "q" => state.cities.lock().unwrap().push(value.into_owned()),
                "key" => state.keys.lock().unwrap().push(value.into_owned()),
                _ => {}
            }
        }
    }

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    match state.script.get(n).or(state.script.last()) {
        Some(reply) => (
            reply.status,
            [(header::CONTENT_TYPE, "application/json")],
            reply.body.clone(),
        )
            .into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// A successful provider payload.
pub fn current_body(temp_c: f64, text: &str, humidity: f64, wind_kph: f64, uv: f64) -> Value {
    json!({
        "location": { "name": "Somewhere", "country": "Nowhere" },
        "current": {
            "temp_c": temp_c,
            "condition": { "text": text, "code": 1000 },
            "humidity": humidity,
            "wind_kph": wind_kph,
            "uv": uv
        }
    })
}

/// A provider error payload.
pub fn error_body(code: i64, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}

/// Client with short back-off so retry tests stay fast.
pub fn test_client(url: Url) -> WeatherApiClient {
    WeatherApiClient::new(
        url,
        TEST_API_KEY.to_string(),
        Duration::from_secs(5),
        RetryPolicy::new(3, Duration::from_millis(10)),
    )
    .unwrap()
}

pub fn create_test_state(provider_url: Url) -> AppState {
    let cache: Arc<dyn WeatherCache> = Arc::new(MemoryCache::default());
    let provider = Arc::new(test_client(provider_url));
    let service = Arc::new(WeatherService::new(
        provider,
        cache,
        Duration::from_secs(600),
    ));

    AppState::new(service)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}
