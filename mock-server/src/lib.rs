use axum::extract::Json;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Signup payload; `email` is required by the handler, not the schema.
#[derive(Debug, Serialize, Deserialize)]
pub struct Signup {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/users/me", get(current_user))
        .route("/signup", post(signup))
        .route("/sessions/current", delete(end_session))
        .route("/broken", get(broken))
        .route("/echo", post(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ping() -> Json<Value> {
    Json(json!({}))
}

/// Requires `Authorization: Bearer <token>`; any non-empty token passes.
async fn current_user(headers: HeaderMap) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.is_empty());

    if authorized {
        Ok(Json(json!({"id": 1, "name": "Ada"})))
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "unauthorized"})),
        ))
    }
}

async fn signup(Json(input): Json<Signup>) -> (StatusCode, Json<Value>) {
    match input.email {
        Some(email) if !email.is_empty() => (StatusCode::CREATED, Json(json!({"email": email}))),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"errors": {"email": ["required"]}})),
        ),
    }
}

async fn end_session() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// 200 with a body that is deliberately not JSON.
async fn broken() -> &'static str {
    "<html>oops</html>"
}

/// Reflects the incoming request so client tests can assert what actually
/// went over the wire.
async fn echo(headers: HeaderMap, body: String) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    Json(json!({
        "content_type": content_type,
        "authorization": authorization,
        "body": body,
    }))
}
