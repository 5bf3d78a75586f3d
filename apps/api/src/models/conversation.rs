use std::fmt;

use serde::{Deserialize, Serialize};

/// Who is talking to the assistant. Drives prompt tone and apology wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Admin,
    HrStaff,
    Teacher,
    Hod,
    Principal,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::HrStaff => "HR_STAFF",
            UserRole::Teacher => "TEACHER",
            UserRole::Hod => "HOD",
            UserRole::Principal => "PRINCIPAL",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied context for one message. Immutable for the life of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub role: UserRole,
    pub school_id: String,
    pub actor_id: String,
}

impl ConversationContext {
    pub fn new(role: UserRole, school_id: impl Into<String>, actor_id: impl Into<String>) -> Self {
        Self {
            role,
            school_id: school_id.into(),
            actor_id: actor_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        let role: UserRole = serde_json::from_str(r#""HR_STAFF""#).unwrap();
        assert_eq!(role, UserRole::HrStaff);
        assert_eq!(serde_json::to_string(&UserRole::Hod).unwrap(), r#""HOD""#);
    }

    #[test]
    fn test_role_display_matches_wire_name() {
        for role in [
            UserRole::Admin,
            UserRole::HrStaff,
            UserRole::Teacher,
            UserRole::Hod,
            UserRole::Principal,
        ] {
            let wire = serde_json::to_string(&role).unwrap();
            assert_eq!(wire, format!("\"{role}\""));
        }
    }

    #[test]
    fn test_default_role_is_admin() {
        assert_eq!(UserRole::default(), UserRole::Admin);
    }
}
