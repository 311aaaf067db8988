//! Auth feature: the reactive session context, the localStorage-backed
//! credential store, and the credential exchange client. Routes go
//! through this module instead of touching storage or the network
//! directly, so the session invariants hold everywhere. Nothing here may
//! log tokens or passwords.
//!
//! Flow Overview: registration and sign-in return an access token plus a
//! user and let the server set the refresh cookie; the dashboard refreshes
//! the session on mount through the cookie; verify and reset submit
//! single-use tokens from email links.

pub(crate) mod client;
pub(crate) mod session;
pub(crate) mod storage;
pub(crate) mod types;
