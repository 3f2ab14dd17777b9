//! Employee model for KARTEI.
//!
//! This module defines the Employee struct and Role enum for staff records.

use std::fmt;
use std::str::FromStr;

/// Employee role for permission decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Administrator (full access to both collections).
    Admin,
    /// Standard staff member.
    #[default]
    Standard,
}

impl Role {
    /// Convert role to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Standard => "standard",
        }
    }

    /// Check if this role is the administrator role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "standard" => Ok(Role::Standard),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// Employee entity representing a staff record.
///
/// Carries the password hash; never leaves the db layer. Service-level
/// callers receive an [`EmployeeProfile`] instead.
#[derive(Debug, Clone)]
pub struct Employee {
    /// Unique employee ID.
    pub id: i64,
    /// Human-readable record code (unique, assigned once).
    pub code: String,
    /// Full name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Role for permission decisions.
    pub role: Role,
    /// Password hash (Argon2).
    pub password: String,
    /// Record creation timestamp.
    pub created_at: String,
}

impl Employee {
    /// Strip the password hash for use outside the store.
    pub fn into_profile(self) -> EmployeeProfile {
        EmployeeProfile {
            id: self.id,
            code: self.code,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Employee view with the password hash stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    /// Unique employee ID.
    pub id: i64,
    /// Human-readable record code.
    pub code: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Role for permission decisions.
    pub role: Role,
    /// Record creation timestamp.
    pub created_at: String,
}

impl From<Employee> for EmployeeProfile {
    fn from(employee: Employee) -> Self {
        employee.into_profile()
    }
}

/// Data for creating a new employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// Assigned record code.
    pub code: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Role (defaults to Standard).
    pub role: Role,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
}

impl NewEmployee {
    /// Create a new employee with the required fields.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            role: Role::Standard,
            password: password.into(),
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Replace the assigned code (used by the collision-retry path).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

/// Data for updating an existing employee.
///
/// Code, id, and password are not updatable here; password changes go
/// through the dedicated re-hash operation.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    /// New name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New phone number (Some(None) clears it).
    pub phone: Option<Option<String>>,
    /// New role.
    pub role: Option<Role>,
}

impl EmployeeUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set new email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set new phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Set new role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.role.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("standard").unwrap(), Role::Standard);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert!(Role::from_str("invalid").is_err());
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::Standard.as_str(), "standard");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Admin), "admin");
    }

    #[test]
    fn test_role_default() {
        assert_eq!(Role::default(), Role::Standard);
    }

    #[test]
    fn test_role_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Standard.is_admin());
    }

    #[test]
    fn test_new_employee_builder() {
        let employee = NewEmployee::new("EMP001", "Test Employee", "test@corp.test", "hash")
            .with_phone("555-0100")
            .with_role(Role::Admin);

        assert_eq!(employee.code, "EMP001");
        assert_eq!(employee.name, "Test Employee");
        assert_eq!(employee.email, "test@corp.test");
        assert_eq!(employee.phone, Some("555-0100".to_string()));
        assert_eq!(employee.role, Role::Admin);
        assert_eq!(employee.password, "hash");
    }

    #[test]
    fn test_new_employee_with_code_replaces() {
        let employee =
            NewEmployee::new("EMP001", "Test", "t@corp.test", "hash").with_code("EMP002");
        assert_eq!(employee.code, "EMP002");
    }

    #[test]
    fn test_employee_update_builder() {
        let update = EmployeeUpdate::new()
            .name("New Name")
            .role(Role::Admin)
            .phone(None);

        assert!(update.name.is_some());
        assert!(update.role.is_some());
        assert_eq!(update.phone, Some(None));
        assert!(update.email.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_employee_update_empty() {
        let update = EmployeeUpdate::new();
        assert!(update.is_empty());
    }

    #[test]
    fn test_into_profile_strips_password() {
        let employee = Employee {
            id: 1,
            code: "EMP001".to_string(),
            name: "Test".to_string(),
            email: "test@corp.test".to_string(),
            phone: None,
            role: Role::Standard,
            password: "hash".to_string(),
            created_at: "2024-01-01".to_string(),
        };

        let profile = employee.into_profile();
        assert_eq!(profile.id, 1);
        assert_eq!(profile.code, "EMP001");
        assert_eq!(profile.role, Role::Standard);
    }
}
