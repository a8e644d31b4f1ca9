//! User Account Repository
//!
//! Persistence gateway for accounts, including the two transactional write
//! paths used by provisioning. Both scripts touch the account and its
//! employee profile inside one BEGIN/COMMIT block, so either both records
//! end consistent or neither is modified.

use shared::{IdentityAssertion, Timestamp};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{UserAccount, UserAccountUpdate};

#[derive(Clone)]
pub struct UserAccountRepository {
    base: BaseRepository,
}

impl UserAccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all accounts ordered by email
    pub async fn find_all(&self) -> RepoResult<Vec<UserAccount>> {
        let accounts: Vec<UserAccount> = self
            .base
            .db()
            .query("SELECT * FROM user_account ORDER BY email")
            .await?
            .take(0)?;
        Ok(accounts)
    }

    /// Find account by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<UserAccount>> {
        let thing = self.base.parse_id(id, "user_account")?;
        let account: Option<UserAccount> = self.base.db().select(thing).await?;
        Ok(account)
    }

    /// Find account by email (the identity resolver)
    ///
    /// No side effects; store failures propagate.
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserAccount>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user_account WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let accounts: Vec<UserAccount> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Create a new account together with its employee profile
    ///
    /// The employee record reuses the account's generated key. A concurrent
    /// create for the same email trips the unique email index and the whole
    /// transaction rolls back with `RepoError::Duplicate`.
    pub async fn create_with_profile(
        &self,
        assertion: &IdentityAssertion,
        now: Timestamp,
    ) -> RepoResult<UserAccount> {
        let mut result = self
            .base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $acc = CREATE ONLY user_account SET
                    email = $email,
                    is_active = true,
                    is_admin = false,
                    created_at = $now,
                    last_login_at = $now;
                CREATE ONLY type::thing('employee', record::id($acc.id)) SET
                    id_number = $id_number,
                    first_name = $first_name,
                    last_name = $last_name;
                SELECT * FROM $acc.id;
                COMMIT TRANSACTION;"#,
            )
            .bind(("email", assertion.email.clone()))
            .bind(("now", now))
            .bind(("id_number", assertion.id_number.clone()))
            .bind(("first_name", assertion.given_name.clone()))
            .bind(("last_name", assertion.last_name.clone()))
            .await?
            .check()?;

        let last = result.num_statements() - 1;
        let created: Option<UserAccount> = result.take(last)?;
        created.ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
    }

    /// Refresh an existing account from a new identity assertion
    ///
    /// Overwrites the employee's mutable fields (creating the profile if it
    /// is missing, reusing the account's key) and advances the account's
    /// last-login timestamp, all in one transaction.
    pub async fn refresh_from_assertion(
        &self,
        key: &str,
        assertion: &IdentityAssertion,
        last_login: Timestamp,
    ) -> RepoResult<UserAccount> {
        let mut result = self
            .base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                UPSERT type::thing('employee', $key) SET
                    id_number = $id_number,
                    first_name = $first_name,
                    last_name = $last_name;
                UPDATE type::thing('user_account', $key) SET
                    last_login_at = $last_login;
                SELECT * FROM type::thing('user_account', $key);
                COMMIT TRANSACTION;"#,
            )
            .bind(("key", key.to_string()))
            .bind(("id_number", assertion.id_number.clone()))
            .bind(("first_name", assertion.given_name.clone()))
            .bind(("last_name", assertion.last_name.clone()))
            .bind(("last_login", last_login))
            .await?
            .check()?;

        let last = result.num_statements() - 1;
        let account: Option<UserAccount> = result.take(last)?;
        account.ok_or_else(|| RepoError::NotFound(format!("Account {} not found", key)))
    }

    /// Update admin-managed flags on an account
    pub async fn update(&self, id: &str, data: UserAccountUpdate) -> RepoResult<UserAccount> {
        let thing = self.base.parse_id(id, "user_account")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Account {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    is_active = IF $has_is_active THEN $is_active ELSE is_active END,
                    is_admin = IF $has_is_admin THEN $is_admin ELSE is_admin END
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("has_is_active", data.is_active.is_some()))
            .bind(("is_active", data.is_active))
            .bind(("has_is_admin", data.is_admin.is_some()))
            .bind(("is_admin", data.is_admin))
            .await?;

        result
            .take::<Option<UserAccount>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Account {} not found", id)))
    }

    /// Hard delete an account and its employee profile
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "user_account")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Account {} not found", id)))?;

        let key = thing.key().to_string();
        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                DELETE type::thing('employee', $key);
                DELETE type::thing('user_account', $key);
                COMMIT TRANSACTION;"#,
            )
            .bind(("key", key))
            .await?
            .check()?;
        Ok(true)
    }
}
