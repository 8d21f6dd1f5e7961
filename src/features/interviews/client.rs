//! Client helpers for interview endpoints.

use crate::{
    app_lib::{
        delete_authorized, get_json_authorized, post_json_authorized_response,
        put_json_authorized, AppError,
    },
    features::interviews::types::{FeedbackRequest, Interview, ScheduleRequest},
};

/// Fetches interviews visible to the current user.
pub async fn list_interviews() -> Result<Vec<Interview>, AppError> {
    get_json_authorized("/v1/interviews").await
}

/// Fetches interviews for one calendar month.
pub async fn list_for_month(year: i32, month: u32) -> Result<Vec<Interview>, AppError> {
    get_json_authorized(&format!("/v1/interviews?year={year}&month={month}")).await
}

/// Schedules an interview and returns the stored record.
pub async fn schedule(request: &ScheduleRequest) -> Result<Interview, AppError> {
    post_json_authorized_response("/v1/interviews", request).await
}

/// Cancels a scheduled interview.
pub async fn cancel(id: &str) -> Result<(), AppError> {
    delete_authorized(&format!("/v1/interviews/{id}")).await
}

/// Records interviewer feedback after the session.
pub async fn submit_feedback(id: &str, feedback: &str) -> Result<(), AppError> {
    let request = FeedbackRequest {
        feedback: feedback.to_string(),
    };
    put_json_authorized(&format!("/v1/interviews/{id}/feedback"), &request).await
}
