//! Demonstration logins.
//!
//! Plain string comparison against values compiled into the binary. This
//! selects a UI mode; it is not authentication.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    Employee,
    Developer,
}

struct DemoAccount {
    username: &'static str,
    password: &'static str,
    mode: LoginMode,
}

const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        username: "medarbejder",
        password: "automate123",
        mode: LoginMode::Employee,
    },
    DemoAccount {
        username: "developer",
        password: "workflow123",
        mode: LoginMode::Developer,
    },
];

/// Shown after a failed login.
pub const DEMO_HINT: &str =
    "Invalid credentials. Try: developer / workflow123 or medarbejder / automate123";

/// Mode selected by the given pair, or None if it matches no demo account.
pub fn authenticate(username: &str, password: &str) -> Option<LoginMode> {
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.username == username && account.password == password)
        .map(|account| account.mode)
}
