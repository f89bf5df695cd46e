//! User domain model
//!
//! Users are owned by the data store; this type is the read-side
//! representation plus the validation applied on the write paths
//! (seeding and tests).

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A user as stored in the directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Create a user instance with validation
    pub fn new(id: i64, name: String, email: String) -> Result<Self> {
        Self::validate_name(&name)?;
        Self::validate_email(&email)?;

        Ok(Self { id, name, email })
    }

    /// Validate user name
    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::validation("User name cannot be empty"));
        }
        if name.len() > 100 {
            return Err(Error::constraint_violation(
                "name_length",
                "User name cannot exceed 100 characters",
            ));
        }
        Ok(())
    }

    /// Validate email address
    fn validate_email(email: &str) -> Result<()> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("Email cannot be empty"));
        }
        if !trimmed.contains('@') {
            return Err(Error::validation("Email must contain an '@' sign"));
        }
        if trimmed.len() > 254 {
            return Err(Error::constraint_violation(
                "email_length",
                "Email cannot exceed 254 characters",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(1, "Alice Jordan".to_string(), "alice@example.com".to_string())
            .expect("valid user");
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice Jordan");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = User::new(1, "   ".to_string(), "alice@example.com".to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_name_length_limit() {
        let long_name = "a".repeat(101);
        let result = User::new(1, long_name, "alice@example.com".to_string());
        assert_eq!(result.unwrap_err().category(), "constraint_violation");
    }

    #[test]
    fn test_malformed_email_rejected() {
        let result = User::new(1, "Alice".to_string(), "not-an-email".to_string());
        assert!(result.unwrap_err().is_validation());
    }
}
