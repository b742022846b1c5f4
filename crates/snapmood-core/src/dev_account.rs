//! Development test accounts.
//!
//! Lets developers skip the sign-in flow by seeding a local session for a
//! known test account. Never enabled in release configurations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A known development login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAccount {
    pub email: String,
    pub display_name: String,
    /// Generation credits granted to the seeded session
    pub credits: u32,
}

impl TestAccount {
    /// Built-in test accounts.
    pub fn builtin() -> Vec<TestAccount> {
        vec![
            TestAccount {
                email: "tester@snapmood.dev".to_string(),
                display_name: "Tester".to_string(),
                credits: 100,
            },
            TestAccount {
                email: "empty@snapmood.dev".to_string(),
                display_name: "No Credits".to_string(),
                credits: 0,
            },
            TestAccount {
                email: "reviewer@snapmood.dev".to_string(),
                display_name: "App Reviewer".to_string(),
                credits: 1000,
            },
        ]
    }

    /// Finds a built-in account by email (case-insensitive).
    pub fn find(email: &str) -> Option<TestAccount> {
        Self::builtin()
            .into_iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()))
    }
}

/// A locally stored session for a test account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevSession {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub credits: u32,
    /// Opaque bearer token; only accepted by development backends
    pub token: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl DevSession {
    /// Creates a fresh session for the account with new random ids.
    pub fn for_account(account: &TestAccount) -> Self {
        Self {
            user_id: Uuid::new_v4().to_string(),
            email: account.email.clone(),
            display_name: account.display_name.clone(),
            credits: account.credits,
            token: format!("dev-{}", Uuid::new_v4().simple()),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        let account = TestAccount::find("Tester@SnapMood.dev").unwrap();
        assert_eq!(account.credits, 100);
        assert!(TestAccount::find("nobody@snapmood.dev").is_none());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let account = &TestAccount::builtin()[0];
        let a = DevSession::for_account(account);
        let b = DevSession::for_account(account);
        assert_ne!(a.user_id, b.user_id);
        assert_ne!(a.token, b.token);
        assert!(a.token.starts_with("dev-"));
        assert_eq!(a.email, account.email);
    }
}
