//! HTTP helpers for the auth API with consistent timeouts and error
//! mapping. Every failure surfaces as the closed `ExchangeError` type:
//! transport problems and unstructured responses become the generic
//! network prompt (the raw error is logged, never rendered), structured
//! error bodies become `Validation` or `Auth`.

use super::config::AppConfig;
use auth_session::{ExchangeError, FieldError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Structured error body the auth API returns for 4xx responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    message: Option<String>,
    field_errors: Option<Vec<FieldError>>,
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ExchangeError> {
    let response = send_post(path, body, false).await?;
    handle_json_response(response).await
}

/// Posts JSON with cookies included so the server can set or read the
/// httpOnly refresh cookie. Use this for register/login/refresh only.
pub async fn post_json_with_credentials<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ExchangeError> {
    let response = send_post(path, body, true).await?;
    handle_json_response(response).await
}

/// Fetches JSON with the access token as a bearer credential.
pub async fn get_json_with_auth<T: DeserializeOwned>(
    path: &str,
    access_token: &str,
) -> Result<T, ExchangeError> {
    let url = build_url(path);
    let bearer = format!("Bearer {access_token}");
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .header("Authorization", &bearer)
            .abort_signal(Some(signal))
            .build()
            .map_err(build_error)
    })
    .await?;

    handle_json_response(response).await
}

async fn send_post<B: Serialize>(
    path: &str,
    body: &B,
    with_credentials: bool,
) -> Result<gloo_net::http::Response, ExchangeError> {
    let url = build_url(path);
    let payload = to_string(body).map_err(|err| {
        log::error!("Failed to encode request: {err}");
        ExchangeError::network()
    })?;

    send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        if with_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        builder.body(payload).map_err(build_error)
    })
    .await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn build_error(err: gloo_net::Error) -> ExchangeError {
    log::error!("Failed to build request: {err}");
    ExchangeError::network()
}

/// Maps transport errors into the generic retry prompt; the detail goes
/// to the console for diagnostics.
fn map_request_error(err: gloo_net::Error) -> ExchangeError {
    log::error!("Transport failure: {err}");
    ExchangeError::network()
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, ExchangeError>,
) -> Result<gloo_net::http::Response, ExchangeError> {
    let controller = AbortController::new().map_err(|_| {
        log::error!("Failed to initialize request timeout");
        ExchangeError::network()
    })?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses successful JSON responses and maps failures onto the closed
/// error type.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ExchangeError> {
    if response.ok() {
        response.json::<T>().await.map_err(|err| {
            log::error!("Failed to decode response: {err}");
            ExchangeError::network()
        })
    } else {
        Err(error_from_response(response).await)
    }
}

/// Maps a non-2xx response: a structured body yields `Validation` or
/// `Auth`; anything else is the generic network prompt.
async fn error_from_response(response: gloo_net::http::Response) -> ExchangeError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => {
            if let Some(fields) = parsed.field_errors.filter(|fields| !fields.is_empty()) {
                return ExchangeError::Validation(fields.into());
            }
            let message = parsed
                .message
                .map(sanitize_message)
                .unwrap_or_else(|| "Authentication failed.".to_string());
            ExchangeError::Auth(message)
        }
        Err(_) => {
            log::error!("Request failed ({status}) without a structured body");
            ExchangeError::network()
        }
    }
}

/// Trims and truncates server-supplied messages before rendering.
fn sanitize_message(message: String) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        "Authentication failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
