//! Record services for KARTEI.
//!
//! High-level operations over both collections. Every mutating path runs
//! validate → authorization gate → persist, with record codes generated at
//! creation time.

mod customers;
mod employees;

pub use customers::{CreateCustomerRequest, CustomerService};
pub use employees::{CreateEmployeeRequest, EmployeeService};

use crate::{KarteiError, Result};

/// How many fresh codes a create will try when the unique constraint on
/// the code column fires.
const CODE_RETRY_ATTEMPTS: usize = 3;

/// Validate a name field.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(KarteiError::Validation("name is required".to_string()));
    }
    Ok(())
}

/// Validate an email field.
fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(KarteiError::Validation("email is required".to_string()));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(KarteiError::Validation(format!(
            "invalid email address: {email}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.test").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@domain.test").is_err());
        assert!(validate_email("local@").is_err());
    }
}
