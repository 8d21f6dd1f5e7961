//! Browser client for the Hireflow recruitment portal.
//!
//! The crate is split along one axis: everything that can run on the host
//! (claims decoding, the gate decision, navigation filtering, the session
//! lifecycle, calendar math, API payload types) lives in plain modules with
//! in-file tests, while everything that touches the browser (rendering,
//! network, storage, the meeting SDK) is compiled only for `wasm32`.
//!
//! Role-gating has exactly one implementation: the static navigation table
//! and the route guards both consume the role-set constants declared in
//! [`navigation`], and every access decision flows through
//! [`features::auth::gate`]. Token claims are decoded locally without
//! signature verification; that is a UI convenience, not a security
//! boundary, and the backend remains the authority on every request.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod features;
pub mod navigation;
#[cfg(target_arch = "wasm32")]
pub mod routes;
