pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod client;
