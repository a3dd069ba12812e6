//! API utilities for frontend-backend communication
//!
//! Builds API URLs, attaches the session token, enforces a request timeout
//! and classifies failures so the UI can show distinct messages for
//! network, timeout, client and server errors.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Requests that have not completed within this window are aborted and
/// reported as timed out.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure, nothing reached the server.
    Network(String),
    /// The request was aborted after `FETCH_TIMEOUT_MS`.
    Timeout,
    /// 4xx response.
    Client(u16),
    /// 5xx (or other non-success) response.
    Server(u16),
    /// The body did not match the expected DTO.
    Decode(String),
    /// The request could not be serialized.
    Encode(String),
}

impl ApiError {
    /// User-facing message; each class gets its own wording.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "서버에 연결할 수 없습니다. 네트워크 상태를 확인해 주세요.".to_string()
            }
            ApiError::Timeout => {
                "요청 시간이 초과되었습니다. 잠시 후 다시 시도해 주세요.".to_string()
            }
            ApiError::Client(401) => "로그인이 만료되었습니다. 다시 로그인해 주세요.".to_string(),
            ApiError::Client(404) => "요청한 데이터를 찾을 수 없습니다.".to_string(),
            ApiError::Client(status) => {
                format!("요청을 처리할 수 없습니다. (오류 코드 {})", status)
            }
            ApiError::Server(status) => format!(
                "서버 오류가 발생했습니다. 잠시 후 다시 시도해 주세요. (오류 코드 {})",
                status
            ),
            ApiError::Decode(_) | ApiError::Encode(_) => {
                "서버 응답을 해석하지 못했습니다.".to_string()
            }
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Abort handle armed for one request: fires after `FETCH_TIMEOUT_MS` and
/// remembers whether it fired, so a timeout can be told apart from other
/// transport failures.
struct AbortGuard {
    controller: Option<web_sys::AbortController>,
    fired: Rc<Cell<bool>>,
    timer: Option<gloo_timers::callback::Timeout>,
}

impl AbortGuard {
    fn arm() -> Self {
        let controller = web_sys::AbortController::new().ok();
        let fired = Rc::new(Cell::new(false));
        let timer = controller.as_ref().map(|c| {
            let controller = c.clone();
            let fired = fired.clone();
            gloo_timers::callback::Timeout::new(FETCH_TIMEOUT_MS, move || {
                fired.set(true);
                controller.abort();
            })
        });
        Self {
            controller,
            fired,
            timer,
        }
    }

    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }

    /// Cancel the pending timer; reports whether it already fired.
    fn disarm(self) -> bool {
        if let Some(timer) = self.timer {
            timer.cancel();
        }
        self.fired.get()
    }
}

/// GET a JSON payload; the stored session token is attached when present.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let token = crate::system::auth::storage::get_access_token();
    get_json_with_token(path, token.as_deref()).await
}

/// GET a JSON payload with an explicit bearer token (or none).
pub async fn get_json_with_token<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let guard = AbortGuard::arm();
    let mut builder = Request::get(&api_url(path));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }
    let signal = guard.signal();
    let result = builder.abort_signal(signal.as_ref()).send().await;
    decode(check(result, guard)?).await
}

/// POST a JSON body and decode a JSON reply.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    decode(post_raw(path, body).await?).await
}

/// POST a JSON body; the reply carries no payload worth decoding.
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    post_raw(path, body).await.map(|_| ())
}

async fn post_raw<B: Serialize>(path: &str, body: &B) -> Result<Response, ApiError> {
    let guard = AbortGuard::arm();
    let signal = guard.signal();
    let request = Request::post(&api_url(path))
        .abort_signal(signal.as_ref())
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let result = request.send().await;
    check(result, guard)
}

fn check(
    result: Result<Response, gloo_net::Error>,
    guard: AbortGuard,
) -> Result<Response, ApiError> {
    let timed_out = guard.disarm();
    let response = match result {
        Ok(response) => response,
        Err(_) if timed_out => return Err(ApiError::Timeout),
        Err(e) => return Err(ApiError::Network(e.to_string())),
    };

    let status = response.status();
    if !response.ok() {
        return Err(if (400..500).contains(&status) {
            ApiError::Client(status)
        } else {
            ApiError::Server(status)
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes_have_distinct_messages() {
        let network = ApiError::Network("dns".to_string()).user_message();
        let timeout = ApiError::Timeout.user_message();
        let client = ApiError::Client(400).user_message();
        let server = ApiError::Server(500).user_message();
        assert_ne!(network, timeout);
        assert_ne!(timeout, client);
        assert_ne!(client, server);
        assert_ne!(network, server);
    }

    #[test]
    fn test_session_expiry_message() {
        assert!(ApiError::Client(401).user_message().contains("로그인"));
        assert!(ApiError::Client(404).user_message().contains("찾을 수 없습니다"));
    }
}
