#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
};
use reqwest::Url;
use serde_json::{Value, json};
use spotmix::{spotify::TokenProvider, types::Track};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn query_pairs(&self) -> HashMap<String, String> {
        let url = format!("http://mock/?{}", self.query.clone().unwrap_or_default());
        Url::parse(&url)
            .map(|u| u.query_pairs().into_owned().collect())
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct MockState {
    recorded: Mutex<Vec<Recorded>>,
    scripted: Mutex<HashMap<String, VecDeque<(u16, Value)>>>,
}

/// In-process stand-in for the Spotify Web API and token endpoint.
///
/// Every path answers with the responses queued for it, in order; an
/// exhausted or unknown path answers 404.
pub struct MockServer {
    pub root: String,
    state: Arc<MockState>,
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    state.recorded.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let next = state
        .scripted
        .lock()
        .unwrap()
        .get_mut(&path)
        .and_then(|queue| queue.pop_front());

    match next {
        Some((status, body)) => (StatusCode::from_u16(status).unwrap(), Json(body)),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "status": 404, "message": "not scripted" } })),
        ),
    }
}

impl MockServer {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockServer {
            root: format!("http://{addr}"),
            state,
        }
    }

    pub fn api_url(&self) -> String {
        format!("{}/v1", self.root)
    }

    pub fn respond(&self, path: &str, status: u16, body: Value) {
        self.state
            .scripted
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back((status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.recorded.lock().unwrap().clone()
    }
}

/// Token provider with a scripted sequence of refresh outcomes.
pub struct FakeTokens {
    current: Mutex<Option<String>>,
    refreshes: Mutex<VecDeque<Option<String>>>,
    refresh_calls: AtomicUsize,
}

impl FakeTokens {
    pub fn new(current: Option<&str>, refreshes: &[Option<&str>]) -> Arc<Self> {
        Arc::new(FakeTokens {
            current: Mutex::new(current.map(str::to_string)),
            refreshes: Mutex::new(refreshes.iter().map(|r| r.map(str::to_string)).collect()),
            refresh_calls: AtomicUsize::new(0),
        })
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for FakeTokens {
    async fn access_token(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }

    async fn refresh_token(&self) -> Option<String> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.refreshes.lock().unwrap().pop_front().flatten();
        if let Some(token) = &next {
            *self.current.lock().unwrap() = Some(token.clone());
        }
        next
    }
}

pub fn track_json(id: &str, release_date: &str, popularity: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Song {id}"),
        "popularity": popularity,
        "duration_ms": 200000,
        "album": { "name": "Album", "release_date": release_date, "release_date_precision": "day" },
        "artists": [{ "id": "artist", "name": "Artist" }],
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{id}") }
    })
}

pub fn track(id: &str, release_date: &str, popularity: u32) -> Track {
    serde_json::from_value(track_json(id, release_date, popularity)).unwrap()
}

pub fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}
