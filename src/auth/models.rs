//! Authentication models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Site administrator
    Admin,
    /// Professional caregiver looking for work
    Caregiver,
    /// Family looking for a caregiver
    Careseeker,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Caregiver, Role::Careseeker];

    /// Wire name, as used in forms, storage and the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Caregiver => "caregiver",
            Role::Careseeker => "careseeker",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Caregiver => "Caregiver",
            Role::Careseeker => "Careseeker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(Role::Admin),
            "caregiver" => Ok(Role::Caregiver),
            "careseeker" => Ok(Role::Careseeker),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}

/// Public projection of an account; never carries a password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

impl SessionUser {
    /// Initials shown in the profile avatar
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Login form / API body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Username or email
    pub username: String,
    pub password: String,
    #[serde(default = "default_form_role")]
    pub role: String,
}

/// Signup form / API body
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default = "default_form_role")]
    pub role: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub age: Option<String>,
}

fn default_form_role() -> String {
    Role::Careseeker.as_str().to_string()
}

/// Fields a new identity is built from
#[derive(Debug, Clone)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub location: String,
    pub age: Option<String>,
}

impl SignupRequest {
    /// Check the confirmation password and role before any session change
    pub fn validate(self) -> Result<SignupFields> {
        if self.password != self.confirm_password {
            return Err(Error::PasswordMismatch);
        }
        let role = self.role.parse()?;
        Ok(SignupFields {
            name: self.name,
            email: self.email,
            role,
            phone: self.phone,
            location: self.location,
            age: self.age.filter(|age| !age.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_request(password: &str, confirm: &str, role: &str) -> SignupRequest {
        SignupRequest {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 90000 00000".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role: role.to_string(),
            location: "Pune, Maharashtra".to_string(),
            age: Some("".to_string()),
        }
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("nurse".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Careseeker).unwrap();
        assert_eq!(json, "\"careseeker\"");
    }

    #[test]
    fn test_signup_password_mismatch() {
        let result = signup_request("secret1", "secret2", "caregiver").validate();
        assert!(matches!(result, Err(Error::PasswordMismatch)));
    }

    #[test]
    fn test_signup_unknown_role() {
        let result = signup_request("secret", "secret", "nurse").validate();
        assert!(matches!(result, Err(Error::UnknownRole(_))));
    }

    #[test]
    fn test_signup_blank_age_becomes_none() {
        let fields = signup_request("secret", "secret", "caregiver")
            .validate()
            .unwrap();
        assert_eq!(fields.role, Role::Caregiver);
        assert_eq!(fields.age, None);
    }

    #[test]
    fn test_initials() {
        let user = SessionUser {
            id: "1".to_string(),
            name: "mary careseeker".to_string(),
            email: "m@example.com".to_string(),
            role: Role::Careseeker,
            phone: String::new(),
            location: String::new(),
            age: None,
        };
        assert_eq!(user.initials(), "MC");
    }
}
