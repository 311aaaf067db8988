//! Shell handlers: the public SPA entry and the gated protected entry.

use crate::gate::{cookie, AppState};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tracing::debug;

/// Redirect target for unauthenticated navigations: the sign-in entry.
pub const SIGN_IN_PATH: &str = "/";

/// Facts derived from the refresh cookie and surfaced to the page for
/// display only. The value itself never leaves the gate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionHint {
    refresh_token_present: bool,
    refresh_token_length: usize,
}

impl SessionHint {
    fn from_token(token: &str) -> Self {
        Self {
            refresh_token_present: true,
            refresh_token_length: token.chars().count(),
        }
    }
}

/// Serve a protected page. A missing refresh cookie fails the render with
/// a redirect before any body is produced.
pub async fn protected(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(token) = cookie::refresh_token(&headers) else {
        debug!("no refresh cookie on protected route, redirecting");
        return Redirect::to(SIGN_IN_PATH).into_response();
    };

    let hint = SessionHint::from_token(&token);
    Html(render_shell(state.shell(), Some(&hint))).into_response()
}

/// Serve the shell for public routes and as the SPA fallback.
pub async fn public(State(state): State<AppState>) -> Html<String> {
    Html(render_shell(state.shell(), None))
}

/// Inject the session hint into the shell, right before `</head>` when
/// present.
fn render_shell(shell: &str, hint: Option<&SessionHint>) -> String {
    let Some(hint) = hint else {
        return shell.to_string();
    };

    let payload = serde_json::to_string(hint).unwrap_or_else(|_| "null".to_string());
    let script = format!("<script>window.KONTO_SESSION = {payload};</script>");

    match shell.find("</head>") {
        Some(index) => format!("{}{script}{}", &shell[..index], &shell[index..]),
        None => format!("{script}{shell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = "<html><head><title>konto</title></head><body></body></html>";

    #[test]
    fn public_shell_is_untouched() {
        assert_eq!(render_shell(SHELL, None), SHELL);
    }

    #[test]
    fn hint_lands_inside_the_head() {
        let hint = SessionHint::from_token("0123456789");
        let rendered = render_shell(SHELL, Some(&hint));

        let script_at = rendered.find("window.KONTO_SESSION").expect("hint script");
        let head_close_at = rendered.find("</head>").expect("head close");
        assert!(script_at < head_close_at);
        assert!(rendered.contains("\"refreshTokenPresent\":true"));
        assert!(rendered.contains("\"refreshTokenLength\":10"));
    }

    #[test]
    fn hint_is_prepended_when_no_head_exists() {
        let hint = SessionHint::from_token("x");
        let rendered = render_shell("<body></body>", Some(&hint));
        assert!(rendered.starts_with("<script>"));
    }

    #[test]
    fn hint_never_contains_the_token() {
        let hint = SessionHint::from_token("super-secret-value");
        let rendered = render_shell(SHELL, Some(&hint));
        assert!(!rendered.contains("super-secret-value"));
    }
}
