use serde::{Deserialize, Serialize};

/// Claims of the signed-in user, as issued by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

/// Returns `true` when `roles` contains at least one of `allowed`.
pub fn check_any_role(allowed: &[&str], roles: &[String]) -> bool {
    roles.iter().any(|role| allowed.contains(&role.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_allowed_role() {
        let roles = vec!["cashier".to_string(), "branch_manager".to_string()];
        assert!(check_any_role(&["admin", "branch_manager"], &roles));
        assert!(!check_any_role(&["admin"], &roles));
        assert!(!check_any_role(&["admin"], &[]));
    }
}
