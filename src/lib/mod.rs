//! Shared frontend utilities for API access, configuration, errors, time,
//! and build metadata.
//!
//! ## Session model
//!
//! 1. **Login:** `POST /v1/auth/login` returns a bearer token whose payload
//!    carries `username` and `roles`. The token is the only persisted source
//!    of truth; claims are re-decoded from it on every read.
//! 2. **Protected calls:** every authorized helper here attaches
//!    `Authorization: Bearer <token>`. A 401 maps to `AppError::AuthRequired`
//!    and is handled as "signed out", mirroring the route guard.
//! 3. **Registration:** signup leaves a time-boxed pending-OTP marker in
//!    storage; `/verify-otp` is reachable only while the marker is fresh.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must still avoid logging
//! credentials or OTP codes.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod build_info;
pub mod clock;
pub mod config;
pub mod errors;
pub mod theme;

pub use errors::AppError;

#[cfg(target_arch = "wasm32")]
pub use api::{
    delete_authorized, get_json, get_json_authorized, post_empty_authorized, post_json,
    post_json_authorized, post_json_authorized_response, post_json_response, put_json_authorized,
};
