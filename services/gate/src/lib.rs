//! Session gate for the konto front end.
//!
//! The gate serves the compiled web app and performs the per-navigation
//! refresh-cookie check on protected page routes before any page body is
//! produced. It never reads or mints credentials itself; the httpOnly
//! `refreshToken` cookie is owned by the remote auth API and the gate only
//! derives presence facts from it.

pub mod cli;
pub mod gate;

pub const GIT_COMMIT_HASH: &str = env!("KONTO_GATE_GIT_SHA");
