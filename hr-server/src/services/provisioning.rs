//! Account provisioning
//!
//! The binder invoked on every successful identity-provider login. Given the
//! provider's identity assertion it guarantees a consistent
//! (account, employee) pair:
//!
//! 1. resolve the account by email;
//! 2. found: advance last-login and overwrite the employee profile with the
//!    asserted values, creating the profile if it is missing;
//! 3. not found: create account and employee together, the employee reusing
//!    the account's generated record key.
//!
//! Each write path is one database transaction. Two concurrent logins for
//! the same new email are not coordinated here: the unique email index makes
//! the losing transaction fail, and that failure is surfaced unchanged.

use chrono::Utc;
use shared::IdentityAssertion;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::UserAccount;
use crate::db::repository::UserAccountRepository;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_email, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct ProvisioningService {
    accounts: UserAccountRepository,
}

impl ProvisioningService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            accounts: UserAccountRepository::new(db),
        }
    }

    /// Provision the account/employee pair for an identity assertion
    ///
    /// Returns the account; the employee profile carries the assertion's
    /// id-number and names after this call.
    pub async fn provision(&self, assertion: &IdentityAssertion) -> AppResult<UserAccount> {
        validate_assertion(assertion)?;

        let now = Utc::now().timestamp_millis();

        match self.accounts.find_by_email(&assertion.email).await? {
            Some(existing) => {
                let key = existing
                    .key()
                    .ok_or_else(|| AppError::internal("Stored account without id".to_string()))?;

                // last_login advances strictly even when the clock has not
                let last_login = now.max(existing.last_login_at + 1);

                let account = self
                    .accounts
                    .refresh_from_assertion(&key, assertion, last_login)
                    .await?;

                tracing::info!(
                    account_id = %key,
                    email = %assertion.email,
                    "Provisioning refreshed existing account"
                );
                Ok(account)
            }
            None => {
                let account = self.accounts.create_with_profile(assertion, now).await?;

                tracing::info!(
                    account_id = ?account.key(),
                    email = %assertion.email,
                    "Provisioning created account and employee"
                );
                Ok(account)
            }
        }
    }
}

/// Reject incomplete assertions before any write happens
fn validate_assertion(assertion: &IdentityAssertion) -> AppResult<()> {
    validate_required_text(&assertion.id_number, "id_number", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&assertion.given_name, "given_name", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&assertion.last_name, "last_name", MAX_SHORT_TEXT_LEN)?;
    validate_email(&assertion.email, "email")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assertion() -> IdentityAssertion {
        IdentityAssertion {
            id_number: "EMP-1".to_string(),
            given_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
        }
    }

    #[test]
    fn test_validate_assertion() {
        assert!(validate_assertion(&assertion()).is_ok());

        let mut blank_name = assertion();
        blank_name.given_name = "  ".to_string();
        assert!(validate_assertion(&blank_name).is_err());

        let mut bad_email = assertion();
        bad_email.email = "not-an-email".to_string();
        assert!(validate_assertion(&bad_email).is_err());
    }
}
