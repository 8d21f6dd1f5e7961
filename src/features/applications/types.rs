//! Payload types for job-application tracking.

use serde::{Deserialize, Serialize};

/// Pipeline states an application moves through. The order here is the
/// order shown in status pickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    InterviewScheduled,
    Offered,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: &'static [Self] = &[
        Self::Applied,
        Self::Shortlisted,
        Self::InterviewScheduled,
        Self::Offered,
        Self::Hired,
        Self::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Shortlisted => "Shortlisted",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::Offered => "Offered",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "APPLIED",
            Self::Shortlisted => "SHORTLISTED",
            Self::InterviewScheduled => "INTERVIEW_SCHEDULED",
            Self::Offered => "OFFERED",
            Self::Hired => "HIRED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == value)
    }

    /// Offer letters exist only once an offer has gone out.
    pub const fn has_offer_letter(self) -> bool {
        matches!(self, Self::Offered | Self::Hired)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub candidate_username: String,
    pub status: ApplicationStatus,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub resume_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OfferLetter {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_round_trip_through_parse() {
        for status in ApplicationStatus::ALL {
            let encoded = serde_json::to_string(status).unwrap();
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(*status));
        }
        assert_eq!(ApplicationStatus::parse("UNKNOWN"), None);
    }

    #[test]
    fn offer_letters_only_after_an_offer() {
        assert!(ApplicationStatus::Offered.has_offer_letter());
        assert!(ApplicationStatus::Hired.has_offer_letter());
        assert!(!ApplicationStatus::Applied.has_offer_letter());
        assert!(!ApplicationStatus::Rejected.has_offer_letter());
    }
}
