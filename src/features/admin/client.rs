//! Client helpers for the admin endpoints. All of them require the ADMIN
//! role server-side; the UI additionally hides them behind the admin guard.

use crate::{
    app_lib::{
        delete_authorized, get_json_authorized, post_json_authorized_response,
        put_json_authorized, AppError,
    },
    features::admin::types::{
        RoleRecord, RoleRequest, TechnologyRecord, TechnologyRequest, UserAccount,
        UserActiveRequest, UserRolesRequest,
    },
};

pub async fn list_roles() -> Result<Vec<RoleRecord>, AppError> {
    get_json_authorized("/v1/roles").await
}

pub async fn create_role(name: &str) -> Result<RoleRecord, AppError> {
    let request = RoleRequest {
        name: name.trim().to_uppercase(),
    };
    post_json_authorized_response("/v1/roles", &request).await
}

pub async fn delete_role(id: &str) -> Result<(), AppError> {
    delete_authorized(&format!("/v1/roles/{id}")).await
}

pub async fn list_technologies() -> Result<Vec<TechnologyRecord>, AppError> {
    get_json_authorized("/v1/technologies").await
}

pub async fn create_technology(name: &str) -> Result<TechnologyRecord, AppError> {
    let request = TechnologyRequest {
        name: name.trim().to_string(),
    };
    post_json_authorized_response("/v1/technologies", &request).await
}

pub async fn delete_technology(id: &str) -> Result<(), AppError> {
    delete_authorized(&format!("/v1/technologies/{id}")).await
}

pub async fn list_users() -> Result<Vec<UserAccount>, AppError> {
    get_json_authorized("/v1/users").await
}

/// Replaces a user's role set.
pub async fn set_user_roles(username: &str, roles: Vec<String>) -> Result<(), AppError> {
    let request = UserRolesRequest { roles };
    put_json_authorized(&format!("/v1/users/{username}/roles"), &request).await
}

/// Activates or deactivates an account.
pub async fn set_user_active(username: &str, active: bool) -> Result<(), AppError> {
    let request = UserActiveRequest { active };
    put_json_authorized(&format!("/v1/users/{username}/active"), &request).await
}
