//! Account provisioning integration tests
//!
//! Runs against a real embedded database in a temporary directory. Covers
//! the create path, the refresh path and the concurrent-login race.

use hr_server::db::models::UserAccount;
use hr_server::db::repository::{EmployeeRepository, RepoError, UserAccountRepository};
use hr_server::{AppError, Config, ProvisioningService, ServerState};
use shared::IdentityAssertion;
use tempfile::TempDir;

async fn test_state() -> (ServerState, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await.expect("state");
    (state, dir)
}

fn jane() -> IdentityAssertion {
    IdentityAssertion {
        id_number: "EMP-1".to_string(),
        given_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@x.com".to_string(),
    }
}

async fn all_accounts(state: &ServerState) -> Vec<UserAccount> {
    UserAccountRepository::new(state.get_db())
        .find_all()
        .await
        .expect("find_all")
}

#[tokio::test]
async fn test_first_login_creates_account_and_employee() {
    let (state, _dir) = test_state().await;
    let service = state.provisioning();

    let account = service.provision(&jane()).await.expect("provision");

    assert_eq!(account.email, "jane@x.com");
    assert!(account.is_active);
    assert!(!account.is_admin);
    assert_eq!(account.created_at, account.last_login_at);

    // The employee profile shares the account's record key
    let key = account.key().expect("account key");
    let employee = EmployeeRepository::new(state.get_db())
        .find_by_account_key(&key)
        .await
        .expect("find employee")
        .expect("employee exists");

    assert_eq!(employee.id_number, "EMP-1");
    assert_eq!(employee.first_name, "Jane");
    assert_eq!(employee.last_name, "Doe");

    assert_eq!(all_accounts(&state).await.len(), 1);
}

#[tokio::test]
async fn test_second_login_refreshes_profile_and_advances_last_login() {
    let (state, _dir) = test_state().await;
    let service = state.provisioning();

    let first = service.provision(&jane()).await.expect("first login");

    // Same person, abbreviated last name in the directory now
    let mut changed = jane();
    changed.last_name = "D.".to_string();

    let second = service.provision(&changed).await.expect("second login");

    // Same account, not a new one
    assert_eq!(first.key(), second.key());
    assert_eq!(all_accounts(&state).await.len(), 1);

    // last_login advances strictly, even within the same millisecond
    assert!(second.last_login_at > first.last_login_at);
    assert_eq!(second.created_at, first.created_at);

    // Profile reflects the newest assertion
    let key = second.key().expect("account key");
    let employee = EmployeeRepository::new(state.get_db())
        .find_by_account_key(&key)
        .await
        .expect("find employee")
        .expect("employee exists");
    assert_eq!(employee.last_name, "D.");
    assert_eq!(employee.first_name, "Jane");
}

#[tokio::test]
async fn test_repeated_logins_stay_idempotent() {
    let (state, _dir) = test_state().await;
    let service = state.provisioning();

    let mut previous_login = 0;
    for _ in 0..5 {
        let account = service.provision(&jane()).await.expect("provision");
        assert!(account.last_login_at > previous_login);
        previous_login = account.last_login_at;
    }

    assert_eq!(all_accounts(&state).await.len(), 1);
}

#[tokio::test]
async fn test_incomplete_assertion_rejected_before_any_write() {
    let (state, _dir) = test_state().await;
    let service = state.provisioning();

    let mut missing_name = jane();
    missing_name.given_name = "   ".to_string();
    let err = service.provision(&missing_name).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let mut bad_email = jane();
    bad_email.email = "not-an-email".to_string();
    let err = service.provision(&bad_email).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(all_accounts(&state).await.is_empty());
}

#[tokio::test]
async fn test_different_emails_get_separate_accounts() {
    let (state, _dir) = test_state().await;
    let service = state.provisioning();

    service.provision(&jane()).await.expect("jane");

    let john = IdentityAssertion {
        id_number: "EMP-2".to_string(),
        given_name: "John".to_string(),
        last_name: "Smith".to_string(),
        email: "john@x.com".to_string(),
    };
    service.provision(&john).await.expect("john");

    assert_eq!(all_accounts(&state).await.len(), 2);
}

#[tokio::test]
async fn test_concurrent_first_logins_create_exactly_one_account() {
    let (state, _dir) = test_state().await;

    // Fire several first logins for the same email at once. The unique
    // email index decides the winner; losers must surface a conflict, not
    // create a duplicate.
    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = ProvisioningService::new(state.get_db());
        handles.push(tokio::spawn(
            async move { service.provision(&jane()).await },
        ));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.expect("join") {
            Ok(account) => {
                assert_eq!(account.email, "jane@x.com");
                successes += 1;
            }
            Err(AppError::Conflict(_)) | Err(AppError::Database(_)) => {}
            Err(other) => panic!("unexpected provisioning error: {other:?}"),
        }
    }

    assert!(successes >= 1, "at least one login must win the race");
    assert_eq!(all_accounts(&state).await.len(), 1);
}

#[tokio::test]
async fn test_duplicate_email_insert_reports_conflict() {
    let (state, _dir) = test_state().await;
    let repo = UserAccountRepository::new(state.get_db());

    let now = chrono::Utc::now().timestamp_millis();
    repo.create_with_profile(&jane(), now).await.expect("first");

    // Direct second insert bypasses the resolver and must hit the index
    let err = repo.create_with_profile(&jane(), now).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    assert_eq!(all_accounts(&state).await.len(), 1);
}
