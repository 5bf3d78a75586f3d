//! Role calibration: how HR Guru speaks to each kind of user.

use crate::models::conversation::UserRole;

/// Guidance handed to the composer for the caller's role.
pub fn tone_guidance(role: UserRole) -> &'static str {
    match role {
        UserRole::Teacher => {
            "Be empathetic and give step-by-step guidance, especially on policies and leave."
        }
        UserRole::HrStaff | UserRole::Admin => {
            "Focus on process efficiency and compliance, and name the next concrete step."
        }
        UserRole::Hod => "Emphasize quick solutions and the needs of the department.",
        UserRole::Principal => {
            "Provide strategic insight and oversight information, summarizing before detail."
        }
    }
}

/// Closing line appended to technical-difficulty replies.
pub fn apology_closing(role: UserRole) -> &'static str {
    match role {
        UserRole::Teacher => "If this is urgent, please reach out to your HR office directly.",
        UserRole::HrStaff | UserRole::Admin => {
            "You can continue the task manually from the HR dashboard in the meantime."
        }
        UserRole::Hod => "For urgent staffing needs, please contact the HR office directly.",
        UserRole::Principal => "The HR team can share the latest status with you in the meantime.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [UserRole; 5] = [
        UserRole::Admin,
        UserRole::HrStaff,
        UserRole::Teacher,
        UserRole::Hod,
        UserRole::Principal,
    ];

    #[test]
    fn test_teacher_tone_is_step_by_step() {
        assert!(tone_guidance(UserRole::Teacher).contains("step-by-step"));
    }

    #[test]
    fn test_admin_and_hr_staff_share_tone() {
        assert_eq!(tone_guidance(UserRole::Admin), tone_guidance(UserRole::HrStaff));
        assert!(tone_guidance(UserRole::Admin).contains("compliance"));
    }

    #[test]
    fn test_principal_tone_is_strategic() {
        assert!(tone_guidance(UserRole::Principal).contains("strategic"));
    }

    #[test]
    fn test_every_role_has_a_closing() {
        for role in ALL_ROLES {
            assert!(!apology_closing(role).is_empty(), "{role}");
        }
    }
}
