//! Shared frontend utilities for API access, configuration and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! 1. **Restore:** `SessionProvider` resolves the in-memory session from
//!    durable storage once on mount, without contacting the server.
//! 2. **Exchange:** Routes dispatch register/login/refresh/reset/verify
//!    calls through `features::auth::client`; every call validates its
//!    input first and returns the closed `ExchangeError` outcome.
//! 3. **Gate:** Protected pages are served by the gate service, which has
//!    already checked the httpOnly refresh cookie and injected derived
//!    session facts as `window.KONTO_SESSION` for display.
//!
//! Centralizing the HTTP helpers keeps timeout and error mapping
//! consistent; callers never see raw transport errors.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;

pub(crate) use api::{get_json_with_auth, post_json, post_json_with_credentials};
