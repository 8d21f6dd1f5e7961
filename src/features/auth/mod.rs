//! Authentication: claims decoding, the access gate, session lifecycle, and
//! the browser-side guard components and API client built on top of them.

pub mod claims;
pub mod gate;
pub mod otp;
pub mod session;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod client;
#[cfg(target_arch = "wasm32")]
pub mod guards;
#[cfg(target_arch = "wasm32")]
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod storage;
