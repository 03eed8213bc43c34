use crate::SERVICE_ACCESS_ROLES;
use crate::domain::auth::{AuthenticatedUser, check_any_role};
use crate::repository::RepositoryError;

pub mod errors;
pub mod product_types;
pub mod products;

pub use errors::{ServiceError, ServiceResult};

/// Capability check shared by every dashboard page.
fn ensure_access(user: &AuthenticatedUser) -> ServiceResult<()> {
    if check_any_role(SERVICE_ACCESS_ROLES, &user.roles) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Message shown when an insert fails: the database text when it has one,
/// `fallback` otherwise.
fn insert_failure_message(error: &RepositoryError, fallback: &str) -> String {
    error
        .database_message()
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .unwrap_or(fallback)
        .to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_manager_has_access() {
        let user = AuthenticatedUser {
            roles: vec!["branch_manager".into()],
            ..fixtures::sample_user()
        };
        assert_eq!(ensure_access(&user), Ok(()));
        assert_eq!(
            ensure_access(&fixtures::cashier()),
            Err(ServiceError::Unauthorized)
        );
    }

    #[test]
    fn failure_message_prefers_database_text() {
        let error = RepositoryError::Database(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::NotNullViolation,
            Box::new("NOT NULL constraint failed: products.unit".to_string()),
        ));
        assert_eq!(
            insert_failure_message(&error, "fallback"),
            "NOT NULL constraint failed: products.unit"
        );

        let error = RepositoryError::ValidationError("bad row".into());
        assert_eq!(insert_failure_message(&error, "fallback"), "fallback");
    }
}
