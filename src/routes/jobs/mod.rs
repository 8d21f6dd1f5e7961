mod detail;
mod form;
mod list;

pub use detail::JobDetailPage;
pub use form::{JobEditPage, JobNewPage};
pub use list::JobsListPage;
