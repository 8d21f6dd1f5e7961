mod admin;
mod applications;
mod calendar;
mod dashboard;
mod forgot_password;
mod interviews;
mod jobs;
mod login;
mod meeting;
mod not_found;
mod register;
mod reset_password;
mod verify_otp;

pub use admin::{AdminRolesPage, AdminTechnologiesPage, AdminUserRolesPage, AdminUsersPage};
pub use applications::ApplicationsPage;
pub use calendar::CalendarPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use interviews::InterviewsPage;
pub use jobs::{JobDetailPage, JobEditPage, JobNewPage, JobsListPage};
pub use login::LoginPage;
pub use meeting::MeetingRoomPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use verify_otp::VerifyOtpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths, kept next to the table so links and guards stay in sync.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const VERIFY_OTP: &str = "/verify-otp";
    pub const JOBS: &str = "/jobs";
    pub const APPLICATIONS: &str = "/applications";
    pub const INTERVIEWS: &str = "/interviews";
    pub const CALENDAR: &str = "/calendar";

    pub fn job_detail(id: &str) -> String {
        format!("/jobs/{id}")
    }

    pub fn job_edit(id: &str) -> String {
        format!("/jobs/{id}/edit")
    }

    pub fn meeting_room(room: &str) -> String {
        format!("/meeting/{room}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/verify-otp") view=VerifyOtpPage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/reset-password") view=ResetPasswordPage />
            <Route path=path!("/jobs") view=JobsListPage />
            <Route path=path!("/jobs/new") view=JobNewPage />
            <Route path=path!("/jobs/:id") view=JobDetailPage />
            <Route path=path!("/jobs/:id/edit") view=JobEditPage />
            <Route path=path!("/applications") view=ApplicationsPage />
            <Route path=path!("/interviews") view=InterviewsPage />
            <Route path=path!("/calendar") view=CalendarPage />
            <Route path=path!("/meeting/:room") view=MeetingRoomPage />
            <Route path=path!("/admin/roles") view=AdminRolesPage />
            <Route path=path!("/admin/user-roles") view=AdminUserRolesPage />
            <Route path=path!("/admin/technologies") view=AdminTechnologiesPage />
            <Route path=path!("/admin/users") view=AdminUsersPage />
        </Routes>
    }
}
