//! Payload types for the admin management screens.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoleRequest {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TechnologyRecord {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TechnologyRequest {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRolesRequest {
    pub roles: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserActiveRequest {
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_account_deserializes_with_role_names() {
        let json = r#"{
            "id": "u-3",
            "username": "grace",
            "email": "grace@example.com",
            "roles": ["INTERVIEWER", "USER"],
            "active": true
        }"#;

        let account: UserAccount = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(account.roles.len(), 2);
        assert!(account.active);
    }
}
