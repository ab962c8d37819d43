//! Policyholder identity

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// The person a policy is issued to
///
/// All three fields are required; empty strings are accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner {
    id: String,
    name: String,
    email: String,
}

impl Owner {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Builds an owner from raw request fields
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the first missing field, checked in the
    /// order id, name, email.
    pub fn from_parts(
        id: Option<String>,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, PolicyError> {
        let id = id.ok_or_else(|| PolicyError::invalid_argument("Owner id is required"))?;
        let name = name.ok_or_else(|| PolicyError::invalid_argument("Owner name is required"))?;
        let email = email.ok_or_else(|| PolicyError::invalid_argument("Owner email is required"))?;
        Ok(Self { id, name, email })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let err = Owner::from_parts(None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Owner id is required");

        let err = Owner::from_parts(Some("o1".into()), None, Some("j@x.com".into())).unwrap_err();
        assert_eq!(err.to_string(), "Owner name is required");

        let err = Owner::from_parts(Some("o1".into()), Some("John".into()), None).unwrap_err();
        assert_eq!(err.to_string(), "Owner email is required");
    }

    #[test]
    fn test_empty_strings_are_accepted() {
        let owner = Owner::from_parts(Some(String::new()), Some(String::new()), Some(String::new()));
        assert!(owner.is_ok());
    }
}
