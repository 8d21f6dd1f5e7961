mod alert;
mod button;
mod error_banner;
mod field;
mod spinner;

pub use alert::{Alert, AlertKind};
pub use button::Button;
pub use error_banner::ErrorBanner;
pub use field::TextField;
pub use spinner::Spinner;
