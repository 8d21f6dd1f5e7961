//! Client wrappers for the auth API endpoints. These helpers centralize
//! endpoint paths and keep credential payloads out of route code.

use crate::{
    app_lib::{post_json, post_json_response, AppError},
    features::auth::types::{
        ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
        ResendOtpRequest, ResetPasswordRequest, VerifyOtpRequest,
    },
};

/// Exchanges credentials for a bearer token and profile.
/// Must never log the password.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json_response("/v1/auth/login", request).await
}

/// Creates an account and triggers the OTP email. The response carries the
/// OTP validity window used for the local pending-verification marker.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
    post_json_response("/v1/auth/register", request).await
}

/// Confirms the emailed OTP code.
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<(), AppError> {
    post_json("/v1/auth/verify-otp", request).await
}

/// Requests a fresh OTP for a pending registration.
pub async fn resend_otp(request: &ResendOtpRequest) -> Result<RegisterResponse, AppError> {
    post_json_response("/v1/auth/resend-otp", request).await
}

/// Starts a password reset; always succeeds from the UI's perspective so
/// account existence is not leaked.
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), AppError> {
    post_json("/v1/auth/forgot-password", request).await
}

/// Completes a password reset with the emailed token.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), AppError> {
    post_json("/v1/auth/reset-password", request).await
}
