//! Feature modules: payload types compile everywhere; API clients and the
//! meeting SDK bindings are browser-only.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod calendar;
pub mod interviews;
pub mod jobs;
pub mod meeting;
