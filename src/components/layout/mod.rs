//! Layout components shared across routes.

mod app_shell;
mod sidebar;

pub use app_shell::AppShell;
pub use sidebar::Sidebar;
