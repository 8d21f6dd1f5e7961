//! Shared UI components exported for routes and features.

pub mod layout;
pub mod ui;

pub use layout::AppShell;
pub use ui::{Alert, AlertKind, Button, ErrorBanner, Spinner, TextField};
