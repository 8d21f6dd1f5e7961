//! Request and response types for auth API calls. Passwords and OTP codes
//! pass through these payloads, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// How long the emailed OTP stays valid.
    pub otp_valid_for_secs: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_round_trips() {
        let json = r#"{
            "token": "head.body.sig",
            "user": { "username": "ada", "email": "ada@example.com", "display_name": null }
        }"#;

        let response: LoginResponse = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(response.token, "head.body.sig");
        assert_eq!(response.user.username, "ada");
        assert_eq!(response.user.display_name, None);

        let encoded = serde_json::to_string(&response).expect("Failed to serialize");
        assert!(encoded.contains("ada@example.com"));
    }

    #[test]
    fn register_response_reads_the_otp_window() {
        let response: RegisterResponse =
            serde_json::from_str(r#"{ "otp_valid_for_secs": 300 }"#).expect("Failed to deserialize");
        assert_eq!(response.otp_valid_for_secs, 300);
    }
}
