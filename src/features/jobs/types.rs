//! Payload types for job-opening endpoints.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobOpening {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technology: String,
    pub location: String,
    pub experience_years: u8,
    pub openings: u32,
    pub status: JobStatus,
    pub posted_at: chrono::DateTime<chrono::Utc>,
}

/// Create/update payload; the backend assigns `id`, `status`, `posted_at`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JobRequest {
    pub title: String,
    pub description: String,
    pub technology: String,
    pub location: String,
    pub experience_years: u8,
    pub openings: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_the_backend_vocabulary() {
        assert_eq!(serde_json::to_string(&JobStatus::Open).unwrap(), "\"OPEN\"");
        let parsed: JobStatus = serde_json::from_str("\"CLOSED\"").unwrap();
        assert_eq!(parsed, JobStatus::Closed);
    }

    #[test]
    fn opening_deserializes_from_the_list_shape() {
        let json = r#"{
            "id": "job-7",
            "title": "Backend Engineer",
            "description": "Rust services",
            "technology": "Rust",
            "location": "Remote",
            "experience_years": 3,
            "openings": 2,
            "status": "OPEN",
            "posted_at": "2026-08-01T09:00:00Z"
        }"#;

        let opening: JobOpening = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(opening.id, "job-7");
        assert_eq!(opening.status, JobStatus::Open);
        assert_eq!(opening.openings, 2);
    }
}
