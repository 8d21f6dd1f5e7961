//! Client helper for meeting-room join grants.

use crate::{
    app_lib::{get_json_authorized, AppError},
    features::meeting::types::MeetingGrant,
};

/// Fetches a join grant for `room`. The backend checks that the caller is a
/// participant of the interview behind the room.
pub async fn fetch_grant(room: &str) -> Result<MeetingGrant, AppError> {
    let trimmed = room.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Meeting room is required.".to_string()));
    }

    get_json_authorized(&format!("/v1/meetings/{trimmed}/token")).await
}
