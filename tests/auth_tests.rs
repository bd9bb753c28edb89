//! Session store integration tests
//! Tests login, signup, logout and restore against the demo roster
//!
//! Run with: cargo test --test auth_tests

use shatam::auth::{
    FileStorage, LoginRequest, MemoryStorage, Role, Roster, SessionEvent, SessionSigner,
    SessionState, SessionStore, SignupRequest, Storage, DEMO_ACCOUNTS, STORAGE_KEY,
};
use std::sync::Arc;

const SECRET: &str = "integration-test-secret";

fn roster() -> Arc<Roster> {
    Arc::new(Roster::demo(4).expect("demo roster"))
}

fn store_over(storage: impl Storage + 'static) -> SessionStore {
    SessionStore::open(roster(), SessionSigner::new(SECRET, 24), storage)
}

fn credentials(username: &str, password: &str, role: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
        role: role.to_string(),
    }
}

fn signup_request(role: &str) -> SignupRequest {
    SignupRequest {
        name: "Meera Nair".to_string(),
        email: "meera@example.com".to_string(),
        phone: "+91 90000 00000".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
        role: role.to_string(),
        location: "Kochi, Kerala".to_string(),
        age: Some("29".to_string()),
    }
}

#[test]
fn test_every_demo_account_logs_in_with_its_role() {
    for account in DEMO_ACCOUNTS {
        let mut store = store_over(MemoryStorage::new());
        let ok = store.login(&credentials(
            account.username,
            account.password,
            account.role.as_str(),
        ));

        assert!(ok, "{} should log in", account.username);
        let user = store.current().expect("session");
        assert_eq!(user.role, account.role);
        assert_eq!(user.id, account.id);
    }
}

#[test]
fn test_admin_login_scenario() {
    let mut store = store_over(MemoryStorage::new());

    assert!(store.login(&credentials("admin", "admin123", "admin")));

    let user = store.current().expect("session");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.name, "Admin User");
}

#[test]
fn test_admin_claiming_caregiver_role_fails() {
    let mut store = store_over(MemoryStorage::new());

    assert!(!store.login(&credentials("admin", "admin123", "caregiver")));
    assert_eq!(store.state(), &SessionState::Unauthenticated);
}

#[test]
fn test_wrong_role_leaves_existing_session_unchanged() {
    let mut store = store_over(MemoryStorage::new());
    assert!(store.login(&credentials("caregiver", "care123", "caregiver")));
    let before = store.state().clone();

    assert!(!store.login(&credentials("admin", "admin123", "careseeker")));
    assert_eq!(store.state(), &before);
}

#[test]
fn test_unknown_handle_fails() {
    let mut store = store_over(MemoryStorage::new());

    for role in ["admin", "caregiver", "careseeker"] {
        assert!(!store.login(&credentials("nobody", "admin123", role)));
    }
    assert!(!store.is_authenticated());
}

#[test]
fn test_wrong_password_fails() {
    let mut store = store_over(MemoryStorage::new());
    assert!(!store.login(&credentials("careseeker", "care123", "careseeker")));
    assert!(!store.is_authenticated());
}

#[test]
fn test_login_by_email() {
    let mut store = store_over(MemoryStorage::new());
    assert!(store.login(&credentials("admin@shatam.com", "admin123", "admin")));
    assert_eq!(store.current().map(|u| u.role), Some(Role::Admin));
}

#[test]
fn test_unknown_role_name_fails() {
    let mut store = store_over(MemoryStorage::new());
    assert!(!store.login(&credentials("admin", "admin123", "superuser")));
}

#[test]
fn test_signup_yields_session_with_submitted_role() {
    for role in [Role::Careseeker, Role::Caregiver] {
        let mut store = store_over(MemoryStorage::new());
        let fields = signup_request(role.as_str()).validate().expect("valid");

        let user = store.signup(fields);

        assert_eq!(user.role, role);
        assert_eq!(store.current(), Some(&user));
        assert_eq!(user.age.as_deref(), Some("29"));
        assert!(!user.id.is_empty());
    }
}

#[test]
fn test_signup_password_mismatch_is_rejected_before_session_change() {
    let mut store = store_over(MemoryStorage::new());
    assert!(store.login(&credentials("careseeker", "seek123", "careseeker")));
    let before = store.state().clone();

    let mut request = signup_request("caregiver");
    request.confirm_password = "different".to_string();

    assert!(matches!(request.validate(), Err(shatam::Error::PasswordMismatch)));
    assert_eq!(store.state(), &before);
}

#[test]
fn test_logout_then_restore_is_unauthenticated() {
    let storage = MemoryStorage::new();
    let mut store = store_over(storage.clone());
    assert!(store.login(&credentials("admin", "admin123", "admin")));

    store.logout();

    assert!(!store.is_authenticated());
    assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
    assert_eq!(store.restore(), &SessionState::Unauthenticated);
}

#[test]
fn test_session_survives_restart() {
    let storage = MemoryStorage::new();
    let mut store = store_over(storage.clone());
    assert!(store.login(&credentials("caregiver", "care123", "caregiver")));
    let before = store.current().cloned().expect("session");
    drop(store);

    let restarted = store_over(storage);
    let after = restarted.current().expect("restored session");

    assert_eq!(after.role, before.role);
    assert_eq!(after.id, before.id);
}

#[test]
fn test_signed_up_session_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("storage.json");

    let mut store = store_over(FileStorage::new(&path));
    let user = store.signup(signup_request("caregiver").validate().unwrap());
    drop(store);

    let restarted = store_over(FileStorage::new(&path));
    assert_eq!(restarted.current(), Some(&user));
}

#[test]
fn test_tampered_session_is_discarded() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_KEY, "not-a-token").unwrap();

    let store = store_over(storage.clone());

    assert!(!store.is_authenticated());
    assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_session_signed_with_other_secret_is_discarded() {
    let storage = MemoryStorage::new();
    let mut store =
        SessionStore::open(roster(), SessionSigner::new("old-secret", 24), storage.clone());
    assert!(store.login(&credentials("admin", "admin123", "admin")));

    let restarted = store_over(storage);
    assert!(!restarted.is_authenticated());
}

#[test]
fn test_transitions_are_published() {
    let mut store = store_over(MemoryStorage::new());
    let mut events = store.subscribe();

    assert!(store.login(&credentials("admin", "admin123", "admin")));
    store.logout();

    match events.try_recv().unwrap() {
        SessionEvent::LoggedIn { user } => assert_eq!(user.role, Role::Admin),
        other => panic!("unexpected event {:?}", other),
    }
    assert_eq!(events.try_recv().unwrap(), SessionEvent::LoggedOut);
}

#[test]
fn test_failed_login_publishes_nothing() {
    let mut store = store_over(MemoryStorage::new());
    let mut events = store.subscribe();

    assert!(!store.login(&credentials("admin", "wrong", "admin")));
    assert!(events.try_recv().is_err());
}
