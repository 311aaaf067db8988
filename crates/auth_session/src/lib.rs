//! Core authentication session logic shared by the konto front end.
//!
//! This crate owns the in-memory session state machine, the durable
//! credential store abstraction, input validation for credential
//! exchanges, and the closed error type those exchanges return. It is
//! deliberately free of network and browser dependencies so the state
//! transitions can be tested on the host; `konto-web` supplies the
//! localStorage-backed store and the HTTP layer.
//!
//! The refresh token is never represented here. It lives in an httpOnly
//! cookie the client cannot read, which is why the session trusts server
//! responses instead of validating credentials itself.

mod error;
mod session;
mod store;
pub mod validate;

pub use error::{ExchangeError, FieldError, FieldErrors};
pub use session::{Session, User, UserStatus};
pub use store::{CredentialStore, MemoryStore, ACCESS_TOKEN_KEY};
