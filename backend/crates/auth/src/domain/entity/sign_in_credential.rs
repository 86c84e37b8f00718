//! Sign In Credential

use kernel::error::app_error::AppResult;

use crate::domain::value_object::{email::Email, hashed_password::RawPassword, name::Name};

/// Name, email and password presented at sign-in
#[derive(Debug)]
pub struct SignInCredential {
    name: Name,
    email: Email,
    password: RawPassword,
}

impl SignInCredential {
    pub fn new(raw_name: &str, raw_email: &str, raw_password: String) -> AppResult<Self> {
        Ok(Self {
            name: Name::new(raw_name)?,
            email: Email::new(raw_email)?,
            password: RawPassword::new(raw_password)?,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &RawPassword {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_credential_valid() {
        let credential =
            SignInCredential::new("Alice", "Alice@Example.com", "pw".to_string()).unwrap();
        assert_eq!(credential.name().as_str(), "Alice");
        assert_eq!(credential.email().as_str(), "alice@example.com");
    }

    #[test]
    fn test_sign_in_credential_invalid() {
        assert!(SignInCredential::new(" ", "a@example.com", "pw".to_string()).is_err());
        assert!(SignInCredential::new("Alice", "nope", "pw".to_string()).is_err());
        assert!(SignInCredential::new("Alice", "a@example.com", " ".to_string()).is_err());
    }
}
