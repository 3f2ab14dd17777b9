//! Customer model for KARTEI.

/// Customer entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Unique customer ID.
    pub id: i64,
    /// Human-readable record code (unique, assigned once).
    pub code: String,
    /// Full name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Employee that created this record, if any. Fixed at creation.
    pub owner_id: Option<i64>,
    /// Record creation timestamp.
    pub created_at: String,
}

/// Data for creating a new customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    /// Assigned record code.
    pub code: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Owning employee, if created by an authenticated caller.
    pub owner_id: Option<i64>,
}

impl NewCustomer {
    /// Create a new customer with the required fields.
    pub fn new(code: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            owner_id: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the owning employee.
    pub fn with_owner(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Replace the assigned code (used by the collision-retry path).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

/// Data for updating an existing customer.
///
/// The owner reference is fixed at creation and deliberately absent here,
/// as are code and id.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    /// New name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New phone number (Some(None) clears it).
    pub phone: Option<Option<String>>,
}

impl CustomerUpdate {
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

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}
