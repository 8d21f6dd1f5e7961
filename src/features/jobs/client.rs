//! Client helpers for job-opening endpoints. Paths stay centralized here;
//! the backend enforces the actual authorization.

use crate::{
    app_lib::{
        delete_authorized, get_json_authorized, post_empty_authorized,
        post_json_authorized_response, put_json_authorized, AppError,
    },
    features::jobs::types::{JobOpening, JobRequest},
};

/// Fetches all job openings visible to the current user.
pub async fn list_jobs() -> Result<Vec<JobOpening>, AppError> {
    get_json_authorized("/v1/jobs").await
}

/// Fetches one opening by id after basic input validation.
pub async fn get_job(id: &str) -> Result<JobOpening, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Job id is required.".to_string()));
    }

    get_json_authorized(&format!("/v1/jobs/{trimmed}")).await
}

/// Creates an opening and returns the stored record.
pub async fn create_job(request: &JobRequest) -> Result<JobOpening, AppError> {
    post_json_authorized_response("/v1/jobs", request).await
}

/// Updates an existing opening in place.
pub async fn update_job(id: &str, request: &JobRequest) -> Result<(), AppError> {
    put_json_authorized(&format!("/v1/jobs/{id}"), request).await
}

/// Deletes an opening.
pub async fn delete_job(id: &str) -> Result<(), AppError> {
    delete_authorized(&format!("/v1/jobs/{id}")).await
}

/// Submits the current user's application for an opening.
pub async fn apply(id: &str) -> Result<(), AppError> {
    post_empty_authorized(&format!("/v1/jobs/{id}/apply")).await
}
