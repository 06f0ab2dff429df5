//! # REST gateway
//!
//! [`ApiClient`] talks to the unauthenticated endpoints (login, registration)
//! and hands out [`AuthorizedClient`]s, which decorate every request with an
//! `Authorization` header. That header is the whole authentication story on
//! the client: there is no refresh, no retry and no timeout beyond what the
//! transport applies on its own.
//!
//! | Method | Path | Used by |
//! |--------|------|---------|
//! | POST | `/api/auth/login` | [`ApiClient::login`] |
//! | POST | `/api/auth/register` | [`ApiClient::register`] |
//! | GET | `/api/lessons` | [`AuthorizedClient::list_lessons`] |
//! | POST | `/api/lessons` | [`AuthorizedClient::create_lesson`] |
//! | DELETE | `/api/lessons/{id}` | [`AuthorizedClient::delete_lesson`] |
//! | GET | `/api/bookings` | [`AuthorizedClient::list_bookings`] |
//! | POST | `/api/bookings` | [`AuthorizedClient::book_lesson`] |
//! | POST | `/api/bookings/{id}/cancel` | [`AuthorizedClient::cancel_booking`] |

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use store::{Booking, BookingId, Lesson, LessonId, NewLesson, Role};

use crate::error::{ApiError, ErrorBody};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Registration<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is prefixed to every `/api/...` path; a trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        self.http.request(method, self.url(path))
    }

    /// Exchange credentials for a raw access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let request = self
            .request(Method::POST, "/api/auth/login")
            .json(&Credentials { email, password });
        let response: TokenResponse = send(request).await?.json().await?;
        Ok(response.access_token)
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), ApiError> {
        let request = self.request(Method::POST, "/api/auth/register").json(&Registration {
            name,
            email,
            password,
            role,
        });
        send(request).await?;
        Ok(())
    }

    /// A client that sends `authorization` as the `Authorization` header.
    pub fn authorized(&self, authorization: impl Into<String>) -> AuthorizedClient {
        AuthorizedClient {
            client: self.clone(),
            authorization: authorization.into(),
        }
    }
}

/// An [`ApiClient`] bound to one `Authorization` header value.
#[derive(Clone, Debug)]
pub struct AuthorizedClient {
    client: ApiClient,
    authorization: String,
}

impl AuthorizedClient {
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, path)
            .header(AUTHORIZATION, &self.authorization)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(send(self.request(Method::GET, path)).await?.json().await?)
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        send(self.request(Method::POST, path).json(body)).await?;
        Ok(())
    }

    pub async fn list_lessons(&self) -> Result<Vec<Lesson>, ApiError> {
        self.get("/api/lessons").await
    }

    pub async fn create_lesson(&self, lesson: &NewLesson) -> Result<(), ApiError> {
        self.post("/api/lessons", lesson).await
    }

    pub async fn delete_lesson(&self, id: LessonId) -> Result<(), ApiError> {
        send(self.request(Method::DELETE, &format!("/api/lessons/{id}"))).await?;
        Ok(())
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("/api/bookings").await
    }

    pub async fn book_lesson(&self, lesson_id: LessonId) -> Result<(), ApiError> {
        self.post("/api/bookings", &json!({ "lesson_id": lesson_id })).await
    }

    /// Moves the booking to `cancelled`; the record itself stays.
    pub async fn cancel_booking(&self, booking_id: BookingId) -> Result<(), ApiError> {
        self.post(&format!("/api/bookings/{booking_id}/cancel"), &json!({}))
            .await
    }
}

/// Send and turn any non-success status into [`ApiError::Server`].
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.msg);
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}
