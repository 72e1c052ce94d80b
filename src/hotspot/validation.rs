// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registration form validation

use serde::Deserialize;
use thiserror::Error;

/// Minimum password length, in bytes of UTF-8
pub const MIN_PASSWORD_LEN: usize = 6;

/// Fields posted by the registration page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Credentials that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is required")]
    MissingUsername,

    #[error("Password is required")]
    MissingPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("Username may only contain letters, digits, underscores and dashes")]
    InvalidUsername,
}

impl RegistrationForm {
    /// Trims every field and checks the rules in the order users see them.
    ///
    /// Values go to the router verbatim, so the username character set is the
    /// only thing keeping it a single clean attribute word.
    pub fn validate(&self) -> Result<NewAccount, ValidationError> {
        let username = self.username.trim();
        let password = self.password.trim();
        let confirm_password = self.confirm_password.trim();

        if username.is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        if password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::InvalidUsername);
        }

        Ok(NewAccount {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str, confirm_password: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let account = form("  alice_01 ", " secret1 ", "secret1").validate().unwrap();
        assert_eq!(
            account,
            NewAccount {
                username: "alice_01".to_string(),
                password: "secret1".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_username() {
        assert_eq!(
            form("   ", "secret1", "secret1").validate(),
            Err(ValidationError::MissingUsername)
        );
    }

    #[test]
    fn test_missing_password() {
        assert_eq!(
            form("alice", "", "").validate(),
            Err(ValidationError::MissingPassword)
        );
    }

    #[test]
    fn test_password_mismatch() {
        assert_eq!(
            form("alice", "secret1", "secret2").validate(),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            form("alice", "abc12", "abc12").validate(),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(form("alice", "abc123", "abc123").validate().is_ok());
    }

    #[test]
    fn test_password_length_counts_bytes() {
        // three two-byte characters
        assert!(form("alice", "ééé", "ééé").validate().is_ok());
        assert_eq!(
            form("alice", "éé", "éé").validate(),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_username_character_set() {
        for bad in ["al ice", "alice!", "=name=x", "ali/ce", "ałice"] {
            assert_eq!(
                form(bad, "secret1", "secret1").validate(),
                Err(ValidationError::InvalidUsername),
                "{bad}"
            );
        }
        assert!(form("Alice-2_b", "secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn test_mismatch_reported_before_length() {
        assert_eq!(
            form("alice", "abc", "abd").validate(),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }
}
