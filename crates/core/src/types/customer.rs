//! Signed-in customer identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    #[error("email local part and domain cannot be empty")]
    MissingPart,
}

/// A structurally valid email address (local part, `@`, domain).
///
/// This is demo-grade validation for a mock login flow, not RFC 5322.
/// Deserialization goes through [`Email::parse`], so a hydrated identity
/// with a structurally invalid address is rejected as malformed data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] if the input is empty, lacks an `@`, or
    /// has an empty local part or domain.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        let at = s.find('@').ok_or(EmailError::MissingAtSymbol)?;
        if at == 0 || at == s.len() - 1 {
            return Err(EmailError::MissingPart);
        }
        Ok(Self(s.to_owned()))
    }

    /// The email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// A signed-in shopper.
///
/// Hydrated from and persisted to storage under its own fixed key; absence
/// simply means "browsing as a guest".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Email::parse("marcus@royal.com").is_ok());
        assert!(Email::parse("a@b").is_ok());
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("no-at"), Err(EmailError::MissingAtSymbol));
        assert_eq!(Email::parse("@royal.com"), Err(EmailError::MissingPart));
        assert_eq!(Email::parse("marcus@"), Err(EmailError::MissingPart));
    }

    #[test]
    fn test_deserialize_rejects_invalid_address() {
        assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
    }

    #[test]
    fn test_customer_is_admin_defaults_false() {
        let json = r#"{"name":"Marcus","email":"marcus@royal.com"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert!(!customer.is_admin);
        assert_eq!(customer.email.as_str(), "marcus@royal.com");
    }
}
