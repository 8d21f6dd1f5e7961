//! Client helpers for application-tracking endpoints. The backend scopes the
//! list to the caller: candidates get their own applications, staff get all.

use crate::{
    app_lib::{get_json_authorized, put_json_authorized, AppError},
    features::applications::types::{
        ApplicationStatus, JobApplication, OfferLetter, StatusUpdateRequest,
    },
};

/// Fetches the applications visible to the current user.
pub async fn list_applications() -> Result<Vec<JobApplication>, AppError> {
    get_json_authorized("/v1/applications").await
}

/// Fetches applications for one opening (staff view).
pub async fn list_for_job(job_id: &str) -> Result<Vec<JobApplication>, AppError> {
    get_json_authorized(&format!("/v1/jobs/{job_id}/applications")).await
}

/// Advances an application to `status`.
pub async fn update_status(id: &str, status: ApplicationStatus) -> Result<(), AppError> {
    let request = StatusUpdateRequest { status };
    put_json_authorized(&format!("/v1/applications/{id}/status"), &request).await
}

/// Fetches the offer-letter download link for an offered application.
pub async fn offer_letter(id: &str) -> Result<OfferLetter, AppError> {
    get_json_authorized(&format!("/v1/applications/{id}/offer-letter")).await
}
