use std::fmt;

use serde::{Deserialize, Serialize};

/// An account holder. Passwords are stored and compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    password: String,
    pub email: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    /// Checks a candidate password against the stored one.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Returns a copy of this user with the password replaced.
    pub fn with_password(&self, new_password: impl Into<String>) -> Self {
        Self {
            username: self.username.clone(),
            password: new_password.into(),
            email: self.email.clone(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}
