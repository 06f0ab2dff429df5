//! In-process stand-in for the lesson-booking REST API.
//!
//! Mirrors the behaviour the client depends on: JSON bodies, `{msg}` error
//! payloads, role checks driven by the token's claims, and bookings embedding
//! `{id, title}` of their lesson.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use store::{Identity, Role};

pub const PASSWORD: &str = "secret";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const STUDENT_EMAIL: &str = "student@example.com";
/// Logging in as this user yields a token without a decodable payload.
pub const BROKEN_EMAIL: &str = "broken@example.com";

pub const SEEDED_LESSON_ID: i64 = 42;
pub const FIRST_BOOKING_ID: i64 = 7;

type Shared = Arc<Mutex<Backend>>;
type Reply = (StatusCode, Json<Value>);

pub struct Fixture {
    pub base_url: String,
    pub state: Shared,
}

struct User {
    id: i64,
    email: String,
    password: String,
    role: String,
}

struct BookingRow {
    id: i64,
    lesson_id: i64,
    student_id: String,
    status: String,
}

pub struct Backend {
    users: Vec<User>,
    lessons: Vec<Value>,
    bookings: Vec<BookingRow>,
    next_lesson_id: i64,
    next_booking_id: i64,
}

impl Backend {
    fn seeded() -> Self {
        let user = |id: i64, email: &str, role: &str| User {
            id,
            email: email.to_string(),
            password: PASSWORD.to_string(),
            role: role.to_string(),
        };
        Self {
            users: vec![
                user(1, ADMIN_EMAIL, "admin"),
                user(2, STUDENT_EMAIL, "student"),
            ],
            lessons: vec![json!({
                "id": SEEDED_LESSON_ID,
                "title": "Morning Yoga",
                "description": null,
                "start_time": "2025-05-05T09:00:00",
                "duration": 60,
                "capacity": 10,
                "trainer_id": 1,
            })],
            bookings: Vec::new(),
            next_lesson_id: SEEDED_LESSON_ID + 1,
            next_booking_id: FIRST_BOOKING_ID,
        }
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn booking_status(&self, id: i64) -> Option<String> {
        self.bookings.iter().find(|b| b.id == id).map(|b| b.status.clone())
    }
}

/// An unsigned three-segment token carrying `{sub, role}`.
pub fn mint_token(sub: &str, role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "sub": sub, "role": role }).to_string());
    format!("{header}.{payload}.fixture-signature")
}

fn reply(status: StatusCode, body: Value) -> Reply {
    (status, Json(body))
}

fn msg(status: StatusCode, text: &str) -> Reply {
    reply(status, json!({ "msg": text }))
}

fn caller(headers: &HeaderMap) -> Result<Identity, Reply> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let token = header.strip_prefix("Bearer ").unwrap_or_default().trim();
    if token.is_empty() {
        return Err(msg(StatusCode::UNAUTHORIZED, "Missing Authorization Header"));
    }
    store::decode_identity(token)
        .map_err(|_| msg(StatusCode::UNPROCESSABLE_ENTITY, "Not enough segments"))
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let (Some(email), Some(password)) = (body["email"].as_str(), body["password"].as_str()) else {
        return msg(StatusCode::BAD_REQUEST, "Missing email or password");
    };
    if email == BROKEN_EMAIL {
        return reply(StatusCode::OK, json!({ "access_token": "not-a-token" }));
    }
    let backend = state.lock().unwrap();
    match backend
        .users
        .iter()
        .find(|u| u.email == email && u.password == password)
    {
        Some(user) => reply(
            StatusCode::OK,
            json!({ "access_token": mint_token(&user.id.to_string(), &user.role) }),
        ),
        None => msg(StatusCode::UNAUTHORIZED, "Bad credentials"),
    }
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let (Some(_name), Some(email), Some(password)) = (
        body["name"].as_str(),
        body["email"].as_str(),
        body["password"].as_str(),
    ) else {
        return msg(StatusCode::BAD_REQUEST, "Missing required fields");
    };
    let role = body["role"].as_str().unwrap_or("student").to_string();
    let mut backend = state.lock().unwrap();
    if backend.users.iter().any(|u| u.email == email) {
        return msg(StatusCode::BAD_REQUEST, "Email already registered");
    }
    let id = backend.users.len() as i64 + 1;
    backend.users.push(User {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
    });
    msg(StatusCode::CREATED, "User created")
}

async fn list_lessons(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    if let Err(rejection) = caller(&headers) {
        return rejection;
    }
    let backend = state.lock().unwrap();
    reply(StatusCode::OK, Value::Array(backend.lessons.clone()))
}

async fn create_lesson(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Reply {
    match caller(&headers) {
        Ok(identity) if identity.role == Role::Admin => {}
        Ok(_) => return msg(StatusCode::FORBIDDEN, "Forbidden"),
        Err(rejection) => return rejection,
    }
    let mut backend = state.lock().unwrap();
    let id = backend.next_lesson_id;
    backend.next_lesson_id += 1;
    body["id"] = json!(id);
    backend.lessons.push(body);
    reply(StatusCode::CREATED, json!({ "id": id }))
}

async fn delete_lesson(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    match caller(&headers) {
        Ok(identity) if identity.role == Role::Admin => {}
        Ok(_) => return msg(StatusCode::FORBIDDEN, "Forbidden"),
        Err(rejection) => return rejection,
    }
    let mut backend = state.lock().unwrap();
    let before = backend.lessons.len();
    backend.lessons.retain(|lesson| lesson["id"] != json!(id));
    if backend.lessons.len() == before {
        return msg(StatusCode::NOT_FOUND, "Not found");
    }
    backend.bookings.retain(|booking| booking.lesson_id != id);
    msg(StatusCode::OK, "Deleted")
}

async fn list_bookings(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let identity = match caller(&headers) {
        Ok(identity) => identity,
        Err(rejection) => return rejection,
    };
    let backend = state.lock().unwrap();
    let rows: Vec<Value> = backend
        .bookings
        .iter()
        .filter(|b| identity.role == Role::Admin || b.student_id == identity.id)
        .map(|b| {
            let title = backend
                .lessons
                .iter()
                .find(|lesson| lesson["id"] == json!(b.lesson_id))
                .and_then(|lesson| lesson["title"].as_str())
                .unwrap_or_default();
            json!({
                "id": b.id,
                "status": b.status,
                "created_at": "2025-05-01T12:00:00",
                "lesson": { "id": b.lesson_id, "title": title },
            })
        })
        .collect();
    reply(StatusCode::OK, Value::Array(rows))
}

async fn book_lesson(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let identity = match caller(&headers) {
        Ok(identity) if identity.role == Role::Student => identity,
        Ok(_) => return msg(StatusCode::FORBIDDEN, "Only students can book"),
        Err(rejection) => return rejection,
    };
    let Some(lesson_id) = body["lesson_id"].as_i64() else {
        return msg(StatusCode::BAD_REQUEST, "Missing lesson_id");
    };
    let mut backend = state.lock().unwrap();
    let id = backend.next_booking_id;
    backend.next_booking_id += 1;
    backend.bookings.push(BookingRow {
        id,
        lesson_id,
        student_id: identity.id,
        status: "pending".to_string(),
    });
    reply(StatusCode::CREATED, json!({ "id": id }))
}

async fn cancel_booking(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    let identity = match caller(&headers) {
        Ok(identity) => identity,
        Err(rejection) => return rejection,
    };
    let mut backend = state.lock().unwrap();
    let Some(booking) = backend.bookings.iter_mut().find(|b| b.id == id) else {
        return msg(StatusCode::NOT_FOUND, "Not found");
    };
    if identity.role == Role::Student && booking.student_id != identity.id {
        return msg(StatusCode::FORBIDDEN, "Forbidden");
    }
    booking.status = "cancelled".to_string();
    msg(StatusCode::OK, "Cancelled")
}

/// Serve the fixture on an ephemeral local port.
pub async fn spawn() -> Fixture {
    let state: Shared = Arc::new(Mutex::new(Backend::seeded()));
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/lessons", get(list_lessons).post(create_lesson))
        .route("/api/lessons/{id}", delete(delete_lesson))
        .route("/api/bookings", get(list_bookings).post(book_lesson))
        .route("/api/bookings/{id}/cancel", post(cancel_booking))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Fixture {
        base_url: format!("http://{addr}"),
        state,
    }
}
