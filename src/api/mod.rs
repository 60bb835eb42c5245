//! # API Module
//!
//! HTTP endpoints served by the loopback server that receives the Spotify
//! OAuth redirect.
//!
//! - [`callback`] - Receives `code`, `state` and `error` from the redirect,
//!   checks `state` against the value generated for this run and hands the
//!   outcome to the waiting authorization flow. The code-for-token exchange
//!   itself happens in [`crate::spotify::auth`], not here.
//! - [`health`] - Reports status and version, handy to check that the
//!   callback address is reachable.
//!
//! The server only lives while an authorization is in progress.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
