// src/test_support.rs
//! Mock en mémoire du service distant, servi par axum sur 127.0.0.1:0.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use admin_promoter_api::LoginRequest;
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tokio::task::JoinHandle;

use crate::config::Config;

/// Réponse canned d'un endpoint du mock
#[derive(Clone, Debug)]
pub struct MockReply {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl MockReply {
    /// 200 OK avec un corps JSON
    pub fn json(body: serde_json::Value) -> Self {
        Self::status(200, body)
    }

    pub fn status(code: u16, body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap(),
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    /// Corps brut, pour simuler une réponse mal formée
    pub fn raw(code: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap(),
            content_type: "text/html",
            body: body.to_string(),
        }
    }
}

impl IntoResponse for MockReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

#[derive(Default)]
struct Recorded {
    login_calls: AtomicUsize,
    admin_calls: AtomicUsize,
    last_login_body: Mutex<Option<LoginRequest>>,
    last_authorization: Mutex<Option<String>>,
    last_admin_body_len: Mutex<Option<usize>>,
}

#[derive(Clone)]
struct MockState {
    login: MockReply,
    admin: MockReply,
    recorded: Arc<Recorded>,
}

async fn login(State(state): State<MockState>, body: Bytes) -> Response {
    state.recorded.login_calls.fetch_add(1, Ordering::SeqCst);
    *state.recorded.last_login_body.lock().unwrap() = serde_json::from_slice(&body).ok();
    state.login.into_response()
}

async fn make_me_admin(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    state.recorded.admin_calls.fetch_add(1, Ordering::SeqCst);
    *state.recorded.last_authorization.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(ToString::to_string);
    *state.recorded.last_admin_body_len.lock().unwrap() = Some(body.len());
    state.admin.into_response()
}

/// Serveur mock; arrêté au drop
pub struct MockService {
    addr: SocketAddr,
    recorded: Arc<Recorded>,
    task: JoinHandle<()>,
}

impl MockService {
    pub async fn start(login_reply: MockReply, admin_reply: MockReply) -> Self {
        let recorded = Arc::new(Recorded::default());
        let state = MockState {
            login: login_reply,
            admin: admin_reply,
            recorded: recorded.clone(),
        };

        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/admin/make-me-admin", post(make_me_admin))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            recorded,
            task,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self, email: &str, password: &str) -> Config {
        Config::new(self.base_url(), email, password)
    }

    pub fn login_calls(&self) -> usize {
        self.recorded.login_calls.load(Ordering::SeqCst)
    }

    pub fn admin_calls(&self) -> usize {
        self.recorded.admin_calls.load(Ordering::SeqCst)
    }

    pub fn last_login_body(&self) -> Option<LoginRequest> {
        self.recorded.last_login_body.lock().unwrap().clone()
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.recorded.last_authorization.lock().unwrap().clone()
    }

    pub fn last_admin_body_len(&self) -> Option<usize> {
        *self.recorded.last_admin_body_len.lock().unwrap()
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Base URL sur laquelle personne n'écoute (connexion refusée)
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
