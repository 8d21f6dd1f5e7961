//! Payload types for interview scheduling.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    pub application_id: String,
    pub job_title: String,
    pub candidate_username: String,
    pub interviewer_username: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: u32,
    /// Room id for the video-meeting page.
    pub meeting_room: String,
    pub status: InterviewStatus,
    pub feedback: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub application_id: String,
    pub interviewer_username: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn interview_deserializes_with_utc_timestamp() {
        let json = r#"{
            "id": "iv-1",
            "application_id": "app-9",
            "job_title": "Backend Engineer",
            "candidate_username": "ada",
            "interviewer_username": "grace",
            "scheduled_at": "2026-09-03T14:30:00Z",
            "duration_minutes": 45,
            "meeting_room": "room-iv-1",
            "status": "SCHEDULED",
            "feedback": null
        }"#;

        let interview: Interview = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(interview.status, InterviewStatus::Scheduled);
        assert_eq!(
            interview.scheduled_at,
            Utc.with_ymd_and_hms(2026, 9, 3, 14, 30, 0).unwrap()
        );
        assert_eq!(interview.meeting_room, "room-iv-1");
    }
}
